/// # Opcodes
///
/// Every instruction is one big-endian 16-bit word. The first nibble picks the instruction
/// family; families `0`, `8`, `E` and `F` are further split on the last nibble or the low byte.
///
/// The remaining nibbles are operands:
/// - `_xy_` register indices Vx and Vy (`FX55`/`FX65` use x as the end of V0..=Vx)
/// - `__kk` an 8-bit immediate
/// - `_nnn` a 12-bit address
/// - `___n` a 4-bit immediate, the sprite height for `DXYN`
pub trait Opcode {
    /// Returns the Opcode's component nibbles.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// Index of the register named by the second nibble.
    /// `[_x__]`
    fn x(&self) -> usize;

    /// Index of the register named by the third nibble.
    /// `[__y_]`
    fn y(&self) -> usize;

    /// The Opcode's fourth nibble.
    /// `[___n]`
    fn n(&self) -> u8;

    /// The Opcode's least significant byte.
    /// `[__kk]`
    fn kk(&self) -> u8;

    /// The Opcode without its most significant nibble.
    /// `[_adr]`
    fn addr(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (
            ((self & 0xF000) >> 12) as u8,
            ((self & 0x0F00) >> 8) as u8,
            ((self & 0x00F0) >> 4) as u8,
            self.n(),
        )
    }

    fn x(&self) -> usize {
        ((self & 0x0F00) >> 8) as usize
    }

    fn y(&self) -> usize {
        ((self & 0x00F0) >> 4) as usize
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn addr(&self) -> u16 {
        self & 0x0FFF
    }
}

/// Joins two consecutive memory bytes into an opcode.
pub fn from_bytes(high: u8, low: u8) -> u16 {
    u16::from(high) << 8 | u16::from(low)
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_operand_fields() {
        let op: u16 = 0xD4A7;
        assert_eq!(op.nibbles(), (0xD, 0x4, 0xA, 0x7));
        assert_eq!((op.x(), op.y()), (0x4, 0xA));
        assert_eq!(op.n(), 0x7);
        assert_eq!(op.kk(), 0xA7);
        assert_eq!(op.addr(), 0x04A7);
    }

    #[test]
    fn test_from_bytes_is_big_endian() {
        assert_eq!(from_bytes(0xAA, 0xBB), 0xAABB);
        assert_eq!(from_bytes(0x00, 0xE0).nibbles(), (0x0, 0x0, 0xE, 0x0));
    }
}
