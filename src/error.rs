use thiserror::Error;

/// Everything that can stop a running program.
///
/// None of these are recoverable from inside the machine; they are handed back to whoever is
/// driving it to decide whether to halt, reload or report.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("failed to read ROM: {0}")]
    RomRead(#[from] std::io::Error),

    #[error("stack overflow calling a subroutine at pc {pc:#05X}")]
    StackOverflow { pc: u16 },

    #[error("return with an empty stack at pc {pc:#05X}")]
    StackUnderflow { pc: u16 },

    #[error("invalid opcode {opcode:#06X} at pc {pc:#05X}")]
    InvalidOpcode { opcode: u16, pc: u16 },

    #[error("memory access out of bounds at address {address:#06X}")]
    MemoryOutOfBounds { address: usize },
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
