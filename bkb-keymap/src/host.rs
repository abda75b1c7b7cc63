//! Services the host firmware provides to the keymap callbacks.
//!
//! Each trait covers one subsystem, so a keyboard without a pointing device or a RGB matrix
//! only implements what it has.

use crate::action::Action;
use crate::color::Rgb;
use crate::keycode::{HidKeyCode, KeyCode, from_ascii};
use crate::layer::LayerState;
use crate::modifier::ModifierCombination;

/// Keystroke injection and modifier state.
pub trait KeyboardHost {
    /// Press and release an action right away
    fn tap(&mut self, action: Action);

    /// Add modifiers to the next report only
    fn add_weak_mods(&mut self, mods: ModifierCombination);

    /// Add modifiers which are released after the next key
    fn add_oneshot_mods(&mut self, mods: ModifierCombination);

    /// Remove pending oneshot modifiers
    fn del_oneshot_mods(&mut self, mods: ModifierCombination);

    /// Type an ASCII string, US layout.
    ///
    /// Characters which can't be typed are skipped.
    fn send_string(&mut self, s: &str) {
        for c in s.bytes() {
            let (key, shifted) = from_ascii(c);
            if key == HidKeyCode::No {
                warn!("Unsupported char in string: {}", c);
                continue;
            }
            let action = if shifted {
                Action::KeyWithModifier(KeyCode::Hid(key), ModifierCombination::LSHIFT)
            } else {
                Action::Key(KeyCode::Hid(key))
            };
            self.tap(action);
        }
    }
}

/// Per-key RGB matrix access.
pub trait RgbMatrixHost {
    /// Enabled layers, including the default layer
    fn layer_state(&self) -> LayerState;

    /// Current global brightness
    fn brightness(&self) -> u8;

    /// LED wired to the key at `(row, col)`, `None` if the key has no LED
    fn led_index(&self, row: usize, col: usize) -> Option<u8>;

    fn set_color(&mut self, index: u8, color: Rgb);
}

/// Pointing device driver controls.
pub trait PointingHost {
    /// Layer activated automatically when the pointer moves
    fn set_auto_mouse_layer(&mut self, layer: u8);

    fn set_auto_mouse_enable(&mut self, enable: bool);

    /// Switch the sensor to the sniping (low) DPI
    fn set_pointer_sniping_enabled(&mut self, enable: bool);
}
