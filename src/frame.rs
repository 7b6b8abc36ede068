use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # Frame
/// The Chip-8 display is 64x32 monochrome pixels.
///
/// Each row is packed into a `u64` with column 0 in the most significant bit. Alongside the
/// current rows the frame keeps a copy of the rows as they were last handed to a renderer so
/// that redraws can be skipped when nothing changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    rows: [u64; DISPLAY_HEIGHT],
    committed: [u64; DISPLAY_HEIGHT],
}

impl Frame {
    pub fn new() -> Self {
        Frame {
            rows: [0; DISPLAY_HEIGHT],
            committed: [0; DISPLAY_HEIGHT],
        }
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.rows = [0; DISPLAY_HEIGHT];
    }

    /// XORs one byte of sprite data onto `row` with its leftmost pixel at `column`.
    ///
    /// Pixels that would land past the right edge are clipped. Returns whether any pixel that was
    /// on has been turned off.
    ///
    /// # Arguments
    /// * `row` the row to draw on; rows outside the display are ignored
    /// * `bits` one row of a sprite, most significant bit leftmost
    /// * `column` the x coordinate of the sprite's leftmost pixel
    pub fn xor_sprite(&mut self, row: usize, bits: u8, column: usize) -> bool {
        if row >= DISPLAY_HEIGHT || column >= DISPLAY_WIDTH {
            return false;
        }
        let shift = DISPLAY_WIDTH - 8;
        let mask = if column <= shift {
            u64::from(bits) << (shift - column)
        } else {
            u64::from(bits) >> (column - shift)
        };
        let collision = self.rows[row] & mask != 0;
        self.rows[row] ^= mask;
        collision
    }

    /// Whether the pixel at (x, y) is on.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT && self.rows[y] & (1 << (DISPLAY_WIDTH - 1 - x)) != 0
    }

    /// The packed rows, top to bottom.
    pub fn rows(&self) -> &[u64; DISPLAY_HEIGHT] {
        &self.rows
    }

    /// Whether the frame differs from what was last committed.
    pub fn has_changed(&self) -> bool {
        self.rows != self.committed
    }

    /// Marks the current frame as rendered.
    pub fn commit(&mut self) {
        self.committed = self.rows;
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
