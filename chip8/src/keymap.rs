use sdl2::keyboard::Keycode;

/// How the 16 hex keys are laid out on a keyboard.
#[derive(clap::ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    /// The keypad's 4x4 grid on the left 4 alphanumeric columns.
    ///
    /// ```text
    /// |1|2|3|C|      |1|2|3|4|
    /// |4|5|6|D|  ->  |Q|W|E|R|
    /// |7|8|9|E|  ->  |A|S|D|F|
    /// |A|0|B|F|      |Z|X|C|V|
    /// ```
    Grid,
    /// Each hex digit on the key with the same label: 0-9 and A-F.
    Hex,
}

const GRID: [(Keycode, u8); 16] = [
    (Keycode::X, 0x0),
    (Keycode::Num1, 0x1),
    (Keycode::Num2, 0x2),
    (Keycode::Num3, 0x3),
    (Keycode::Q, 0x4),
    (Keycode::W, 0x5),
    (Keycode::E, 0x6),
    (Keycode::A, 0x7),
    (Keycode::S, 0x8),
    (Keycode::D, 0x9),
    (Keycode::Z, 0xA),
    (Keycode::C, 0xB),
    (Keycode::Num4, 0xC),
    (Keycode::R, 0xD),
    (Keycode::F, 0xE),
    (Keycode::V, 0xF),
];

const HEX: [(Keycode, u8); 16] = [
    (Keycode::Num0, 0x0),
    (Keycode::Num1, 0x1),
    (Keycode::Num2, 0x2),
    (Keycode::Num3, 0x3),
    (Keycode::Num4, 0x4),
    (Keycode::Num5, 0x5),
    (Keycode::Num6, 0x6),
    (Keycode::Num7, 0x7),
    (Keycode::Num8, 0x8),
    (Keycode::Num9, 0x9),
    (Keycode::A, 0xA),
    (Keycode::B, 0xB),
    (Keycode::C, 0xC),
    (Keycode::D, 0xD),
    (Keycode::E, 0xE),
    (Keycode::F, 0xF),
];

impl Layout {
    fn table(self) -> &'static [(Keycode, u8); 16] {
        match self {
            Layout::Grid => &GRID,
            Layout::Hex => &HEX,
        }
    }

    /// The Chip-8 key bound to a keyboard key, if any.
    pub fn key(self, keycode: Keycode) -> Option<u8> {
        self.table()
            .iter()
            .find(|(bound, _)| *bound == keycode)
            .map(|(_, key)| *key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_bound_once() {
        for layout in [Layout::Grid, Layout::Hex].iter() {
            let mut keys: Vec<u8> = layout.table().iter().map(|(_, key)| *key).collect();
            keys.sort_unstable();
            assert_eq!(keys, (0..16).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn test_grid_layout() {
        assert_eq!(Layout::Grid.key(Keycode::X), Some(0x0));
        assert_eq!(Layout::Grid.key(Keycode::V), Some(0xF));
        assert_eq!(Layout::Grid.key(Keycode::Num5), None);
    }

    #[test]
    fn test_hex_layout() {
        assert_eq!(Layout::Hex.key(Keycode::Num0), Some(0x0));
        assert_eq!(Layout::Hex.key(Keycode::B), Some(0xB));
        assert_eq!(Layout::Hex.key(Keycode::Q), None);
    }
}
