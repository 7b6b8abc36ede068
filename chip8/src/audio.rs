use log::debug;
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

use chip8vm::AudioSink;

const SAMPLE_RATE: i32 = 44_100;
const TONE_HZ: f32 = 523.0;
const VOLUME: f32 = 0.15;

/// A square wave at a fixed pitch.
pub struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Beeper
/// Plays the Chip-8 tone through SDL2 audio. The device is created paused and is resumed for
/// as long as the sound timer is running.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio_subsystem = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: None,
        };
        let device = audio_subsystem.open_playback(None, &desired, |spec| {
            debug!("opened audio device at {} Hz", spec.freq);
            SquareWave {
                phase_inc: TONE_HZ / spec.freq as f32,
                phase: 0.0,
                volume: VOLUME,
            }
        })?;
        Ok(Beeper { device })
    }
}

impl AudioSink for Beeper {
    fn start_tone(&mut self) {
        self.device.resume();
    }

    fn stop_tone(&mut self) {
        self.device.pause();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_wave_alternates() {
        let mut wave = SquareWave {
            phase_inc: 0.25,
            phase: 0.0,
            volume: 1.0,
        };
        let mut out = [0.0; 8];
        wave.callback(&mut out);
        assert_eq!(out, [1.0, 1.0, 1.0, -1.0, 1.0, 1.0, 1.0, -1.0]);
    }
}
