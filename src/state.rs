use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{
    FONT_SET, FONT_START, MAX_PROGRAM_SIZE, MEMORY_SIZE, PROGRAM_START, STACK_SIZE,
};
use crate::error::{Chip8Error, Result};
use crate::frame::Frame;
use crate::keypad::Keypad;
use crate::timers::{Timers, Tone};

/// The Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is also written as a flag by arithmetic, shifts and drawing
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, starting at 0x200
///
/// Stack
/// - up to 16 return addresses; `sp` is the number in use
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented at 60Hz
///
/// ## Memory
/// - 4096 bytes of addressable memory
///     - 0x050..0x0A0 holds the font
///     - ROMs are loaded at 0x200
/// - a 64x32 frame
///
/// ## Input
/// - the keypad's pressed keys
///
/// ## Sound
/// - a tone edge from FX18 not yet delivered
///
/// ## Randomness
/// - one generator, seeded once, feeding CXKK
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: usize,
    pub stack: [u16; STACK_SIZE],
    pub timers: Timers,
    pub memory: [u8; MEMORY_SIZE],
    pub frame: Frame,
    pub keypad: Keypad,
    /// A tone edge caused by the last instruction, waiting to be passed to an `AudioSink`.
    pub pending_tone: Option<Tone>,
    rng: StdRng,
}

impl State {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A state whose random numbers are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let font = FONT_START as usize;
        memory[font..font + FONT_SET.len()].copy_from_slice(&FONT_SET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; STACK_SIZE],
            timers: Timers::new(),
            memory,
            frame: Frame::new(),
            keypad: Keypad::new(),
            pending_tone: None,
            rng,
        }
    }

    /// Resets everything but the keypad and random number generator, then copies `rom` to 0x200.
    pub fn load(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_PROGRAM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }

        let rng = std::mem::replace(&mut self.rng, StdRng::seed_from_u64(0));
        let keypad = std::mem::take(&mut self.keypad);
        *self = State {
            keypad,
            ..Self::with_rng(rng)
        };

        let start = PROGRAM_START as usize;
        self.memory[start..start + rom.len()].copy_from_slice(rom);
        debug!("loaded {} byte ROM at {:#05X}", rom.len(), PROGRAM_START);
        Ok(())
    }

    /// The `len` bytes of memory starting at `address`.
    pub fn read(&self, address: u16, len: usize) -> Result<&[u8]> {
        let start = address as usize;
        self.memory
            .get(start..start + len)
            .ok_or(Chip8Error::MemoryOutOfBounds {
                address: start + len - 1,
            })
    }

    /// Copies `bytes` into memory starting at `address`.
    pub fn write(&mut self, address: u16, bytes: &[u8]) -> Result<()> {
        let start = address as usize;
        let end = start + bytes.len();
        match self.memory.get_mut(start..end) {
            Some(dest) => {
                dest.copy_from_slice(bytes);
                Ok(())
            }
            None => Err(Chip8Error::MemoryOutOfBounds { address: end - 1 }),
        }
    }

    /// STACK.push(PC)
    /// Returns false, leaving the stack untouched, when all 16 slots are in use.
    pub fn push(&mut self, address: u16) -> bool {
        if self.sp >= STACK_SIZE {
            return false;
        }
        self.stack[self.sp] = address;
        self.sp += 1;
        true
    }

    /// STACK.pop()
    pub fn pop(&mut self) -> Option<u16> {
        self.sp = self.sp.checked_sub(1)?;
        Some(self.stack[self.sp])
    }

    pub fn random_byte(&mut self) -> u8 {
        self.rng.gen()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
