use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;

use log::debug;

use crate::constants::KEY_COUNT;

/// # Keypad
/// The 16 hex keys 0..F packed into a bit mask, bit `n` set while key `n` is held.
///
/// The mask lives behind an `Arc` so that an input source on another thread can hold a
/// [`KeypadHandle`] and press/release keys while the interpreter reads the mask.
#[derive(Debug, Default)]
pub struct Keypad {
    mask: Arc<AtomicU16>,
}

/// A cloneable reference to a [`Keypad`]'s key mask for pushing input events.
#[derive(Clone, Debug)]
pub struct KeypadHandle {
    mask: Arc<AtomicU16>,
}

fn bit(key: u8) -> Option<u16> {
    if key < KEY_COUNT {
        Some(1 << key)
    } else {
        debug!("ignoring key {:#X} outside of the keypad", key);
        None
    }
}

fn press(mask: &AtomicU16, key: u8) {
    if let Some(bit) = bit(key) {
        mask.fetch_or(bit, Ordering::AcqRel);
    }
}

fn release(mask: &AtomicU16, key: u8) {
    if let Some(bit) = bit(key) {
        mask.fetch_and(!bit, Ordering::AcqRel);
    }
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as held. Pressing a held key does nothing.
    pub fn press(&self, key: u8) {
        press(&self.mask, key);
    }

    /// Mark `key` as released. Releasing a released key does nothing.
    pub fn release(&self, key: u8) {
        release(&self.mask, key);
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        key < KEY_COUNT && self.mask() & (1 << key) != 0
    }

    /// The lowest numbered key currently held.
    pub fn first_pressed(&self) -> Option<u8> {
        let mask = self.mask();
        if mask == 0 {
            None
        } else {
            Some(mask.trailing_zeros() as u8)
        }
    }

    /// A point in time snapshot of the key mask.
    pub fn mask(&self) -> u16 {
        self.mask.load(Ordering::Acquire)
    }

    pub fn handle(&self) -> KeypadHandle {
        KeypadHandle {
            mask: Arc::clone(&self.mask),
        }
    }
}

impl KeypadHandle {
    pub fn press(&self, key: u8) {
        press(&self.mask, key);
    }

    pub fn release(&self, key: u8) {
        release(&self.mask, key);
    }
}
