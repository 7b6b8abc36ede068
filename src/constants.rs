/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// ROMs are loaded (and execution starts) at this address.
pub const PROGRAM_START: u16 = 0x200;

/// Largest ROM that fits between `PROGRAM_START` and the end of the usable address space.
pub const MAX_PROGRAM_SIZE: usize = 0xE00;

/// Address of the first glyph in the built-in font.
pub const FONT_START: u16 = 0x050;

/// Every font glyph is 5 rows of 8 pixels.
pub const FONT_GLYPH_SIZE: u16 = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Maximum depth of nested subroutine calls.
pub const STACK_SIZE: usize = 16;

/// Number of keys on the hex keypad.
pub const KEY_COUNT: u8 = 16;

/// Delay and sound timers always count down at this rate.
pub const TIMER_HZ: u32 = 60;

/// Instructions per second unless configured otherwise.
pub const DEFAULT_CLOCK_SPEED: u32 = 700;

/// # Font
/// Hexadecimal digits 0..F drawn as 4x5 sprites, one byte per row.
///
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const FONT_SET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
