use std::time::Duration;

use crate::constants::TIMER_HZ;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Work that has come due since the clock was last advanced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Due {
    /// Instructions to execute.
    pub steps: u64,
    /// 60Hz timer ticks to apply.
    pub ticks: u64,
}

/// # Clock
/// Turns elapsed wall time into a number of instructions and timer ticks.
///
/// Instructions run at a configurable rate while the timers always run at 60Hz. Leftover time
/// is carried between calls so neither rate drifts however the elapsed time is sliced up.
#[derive(Clone, Debug)]
pub struct Clock {
    clock_speed: u32,
    // elapsed nanoseconds multiplied by the rate, not yet converted into whole steps/ticks
    cpu_remainder: u128,
    timer_remainder: u128,
}

impl Clock {
    /// # Arguments
    /// * `clock_speed` instructions per second; must be nonzero
    pub fn new(clock_speed: u32) -> Self {
        Clock {
            clock_speed: clock_speed.max(1),
            cpu_remainder: 0,
            timer_remainder: 0,
        }
    }

    pub fn clock_speed(&self) -> u32 {
        self.clock_speed
    }

    /// Accounts for `elapsed` time and returns what should now be run.
    pub fn advance(&mut self, elapsed: Duration) -> Due {
        let nanos = elapsed.as_nanos();

        self.cpu_remainder += nanos * u128::from(self.clock_speed);
        let steps = self.cpu_remainder / NANOS_PER_SECOND;
        self.cpu_remainder %= NANOS_PER_SECOND;

        self.timer_remainder += nanos * u128::from(TIMER_HZ);
        let ticks = self.timer_remainder / NANOS_PER_SECOND;
        self.timer_remainder %= NANOS_PER_SECOND;

        Due {
            steps: steps as u64,
            ticks: ticks as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_second() {
        let mut clock = Clock::new(700);
        assert_eq!(
            clock.advance(Duration::from_secs(1)),
            Due {
                steps: 700,
                ticks: 60
            }
        );
    }

    #[test]
    fn test_small_slices_add_up() {
        let mut clock = Clock::new(500);
        let mut total = Due::default();
        for _ in 0..1000 {
            let due = clock.advance(Duration::from_millis(1));
            total.steps += due.steps;
            total.ticks += due.ticks;
        }
        assert_eq!(total, Due { steps: 500, ticks: 60 });
    }

    #[test]
    fn test_timer_rate_ignores_clock_speed() {
        let mut slow = Clock::new(1);
        let mut fast = Clock::new(10_000);
        let elapsed = Duration::from_millis(100);
        assert_eq!(slow.advance(elapsed).ticks, 6);
        assert_eq!(fast.advance(elapsed).ticks, 6);
    }

    #[test]
    fn test_nothing_due_yet() {
        let mut clock = Clock::new(700);
        assert_eq!(clock.advance(Duration::from_micros(100)), Due::default());
    }

    #[test]
    fn test_zero_clock_speed_is_clamped() {
        assert_eq!(Clock::new(0).clock_speed(), 1);
    }
}
