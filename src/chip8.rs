use std::io::Read;
use std::time::Duration;

use log::debug;

use crate::clock::Clock;
use crate::constants::{MAX_PROGRAM_SIZE, STACK_SIZE};
use crate::error::{Chip8Error, Result};
use crate::frame::Frame;
use crate::instruction;
use crate::keypad::KeypadHandle;
use crate::state::State;
use crate::timers::{AudioSink, Silent, Timers};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - an `audio` sink that is told when the tone should start and stop
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one instruction at a time
/// - advancing its timers at 60Hz
/// - inspecting its frame for rendering by some display
///
/// Everything runs on the caller's thread: whoever drives the machine interleaves `step` and
/// `tick_timers` (or lets `run_for` do it), so instructions that touch the timers never race
/// with the countdown. Only key presses may come from elsewhere, through a `KeypadHandle`.
pub struct Chip8 {
    state: State,
    audio: Box<dyn AudioSink>,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::from_state(State::new())
    }

    /// A machine whose CXKK random numbers are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_state(State::with_seed(seed))
    }

    fn from_state(state: State) -> Self {
        Chip8 {
            state,
            audio: Box::new(Silent),
        }
    }

    /// Replaces the sink that tone start/stop signals are sent to.
    pub fn with_audio(mut self, audio: Box<dyn AudioSink>) -> Self {
        self.audio = audio;
        self
    }

    /// Resets the machine and loads a rom at 0x200.
    ///
    /// # Arguments
    /// * `rom` the program; at most 3584 bytes
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        let sounding = self.state.timers.sound() > 0;
        self.state.load(rom)?;
        if sounding {
            self.audio.stop_tone();
        }
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom_from(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut rom = Vec::with_capacity(MAX_PROGRAM_SIZE);
        // read one byte past the limit so oversized files are caught without reading them whole
        reader
            .take(MAX_PROGRAM_SIZE as u64 + 1)
            .read_to_end(&mut rom)?;
        if rom.len() > MAX_PROGRAM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        self.load_rom(&rom)
    }

    /// Executes the instruction at pc.
    pub fn step(&mut self) -> Result<()> {
        let result = instruction::step(&mut self.state);
        if let Some(tone) = self.state.pending_tone.take() {
            debug!("tone {:?}", tone);
            self.audio.signal(tone);
        }
        result
    }

    /// Advances the delay and sound timers by one 60Hz tick.
    pub fn tick_timers(&mut self) {
        if let Some(tone) = self.state.timers.tick() {
            debug!("tone {:?}", tone);
            self.audio.signal(tone);
        }
    }

    /// Runs all instructions and timer ticks that `clock` says are due after `elapsed`,
    /// spreading the ticks evenly between the instructions.
    pub fn run_for(&mut self, clock: &mut Clock, elapsed: Duration) -> Result<()> {
        let due = clock.advance(elapsed);
        let mut ticked = 0;
        for n in 1..=due.steps {
            self.step()?;
            while ticked < n * due.ticks / due.steps {
                self.tick_timers();
                ticked += 1;
            }
        }
        while ticked < due.ticks {
            self.tick_timers();
            ticked += 1;
        }
        Ok(())
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.state.keypad.press(key);
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.state.keypad.release(key);
    }

    /// A handle for pressing and releasing keys from another thread.
    pub fn keypad_handle(&self) -> KeypadHandle {
        self.state.keypad.handle()
    }

    /// The current frame, whether or not it has changed.
    pub fn frame(&self) -> &Frame {
        &self.state.frame
    }

    /// Returns the Frame if the display should be redrawn
    /// The frame is marked as drawn, so it is only returned again once it changes.
    pub fn take_frame(&mut self) -> Option<&Frame> {
        if self.state.frame.has_changed() {
            self.state.frame.commit();
            Some(&self.state.frame)
        } else {
            None
        }
    }

    pub fn registers(&self) -> &[u8; 16] {
        &self.state.v
    }

    pub fn index(&self) -> u16 {
        self.state.i
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    /// Number of return addresses on the stack, at most 16.
    pub fn stack_depth(&self) -> usize {
        debug_assert!(self.state.sp <= STACK_SIZE);
        self.state.sp
    }

    pub fn timers(&self) -> Timers {
        self.state.timers
    }

    /// The `len` bytes of memory starting at `address`.
    pub fn memory(&self, address: u16, len: usize) -> Result<&[u8]> {
        self.state.read(address, len)
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
