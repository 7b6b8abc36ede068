//! A Chip-8 interpreter core.
//!
//! [`Chip8`] owns the machine and is driven from outside: call [`Chip8::step`] at the
//! instruction rate and [`Chip8::tick_timers`] at 60Hz (or hand elapsed time to
//! [`Chip8::run_for`] with a [`Clock`]), push key events in, and draw [`Frame`]s out.
pub use chip8::Chip8;
pub use clock::{Clock, Due};
pub use error::{Chip8Error, Result};
pub use frame::Frame;
pub use keypad::{Keypad, KeypadHandle};
pub use timers::{AudioSink, Silent, Timers, Tone};

mod chip8;
mod clock;
pub mod constants;
mod error;
mod frame;
mod instruction;
mod keypad;
mod opcode;
mod operations;
mod state;
mod timers;
