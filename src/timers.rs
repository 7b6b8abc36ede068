use log::debug;

/// A change in whether the buzzer should be sounding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tone {
    Start,
    Stop,
}

/// Something that can make the Chip-8's single tone.
pub trait AudioSink {
    fn start_tone(&mut self);
    fn stop_tone(&mut self);

    fn signal(&mut self, tone: Tone) {
        match tone {
            Tone::Start => self.start_tone(),
            Tone::Stop => self.stop_tone(),
        }
    }
}

/// An `AudioSink` that ignores every signal.
#[derive(Debug, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn start_tone(&mut self) {}
    fn stop_tone(&mut self) {}
}

/// # Timers
/// Two 8-bit counters that count down to zero at 60Hz.
/// - delay: read and written by programs for timing
/// - sound: a tone plays for as long as it is nonzero
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    delay: u8,
    sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(&self) -> u8 {
        self.delay
    }

    pub fn sound(&self) -> u8 {
        self.sound
    }

    pub fn set_delay(&mut self, value: u8) {
        self.delay = value;
    }

    /// Sets the sound timer, returning the tone edge this causes if any.
    pub fn set_sound(&mut self, value: u8) -> Option<Tone> {
        let edge = match (self.sound, value) {
            (0, v) if v > 0 => Some(Tone::Start),
            (s, 0) if s > 0 => Some(Tone::Stop),
            _ => None,
        };
        self.sound = value;
        if let Some(tone) = edge {
            debug!("sound timer set to {}: {:?}", value, tone);
        }
        edge
    }

    /// Advances both timers by one 60Hz tick.
    /// Returns `Tone::Stop` when the sound timer runs out on this tick.
    pub fn tick(&mut self) -> Option<Tone> {
        if self.delay > 0 {
            self.delay -= 1;
        }

        if self.sound > 0 {
            self.sound -= 1;
            if self.sound == 0 {
                debug!("sound timer expired");
                return Some(Tone::Stop);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_decrements_both_timers() {
        let mut timers = Timers::new();
        timers.set_delay(2);
        timers.set_sound(5);
        timers.tick();
        assert_eq!(timers.delay(), 1);
        assert_eq!(timers.sound(), 4);
    }

    #[test]
    fn test_tick_stops_at_zero() {
        let mut timers = Timers::new();
        timers.set_delay(1);
        timers.tick();
        timers.tick();
        assert_eq!(timers.delay(), 0);
        assert_eq!(timers.sound(), 0);
    }

    #[test]
    fn test_sound_start_edge() {
        let mut timers = Timers::new();
        assert_eq!(timers.set_sound(3), Some(Tone::Start));
        assert_eq!(timers.set_sound(7), None);
    }

    #[test]
    fn test_sound_stop_when_cleared() {
        let mut timers = Timers::new();
        timers.set_sound(3);
        assert_eq!(timers.set_sound(0), Some(Tone::Stop));
        assert_eq!(timers.set_sound(0), None);
    }

    #[test]
    fn test_sound_stop_only_on_last_tick() {
        let mut timers = Timers::new();
        timers.set_sound(2);
        assert_eq!(timers.tick(), None);
        assert_eq!(timers.tick(), Some(Tone::Stop));
        assert_eq!(timers.tick(), None);
    }

    #[test]
    fn test_delay_does_not_signal() {
        let mut timers = Timers::new();
        timers.set_delay(1);
        assert_eq!(timers.tick(), None);
    }
}
