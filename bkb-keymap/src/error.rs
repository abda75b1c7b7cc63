//! Errors reported when checking the static keymap tables.

use core::fmt;

use crate::combo::COMBO_MAX_LENGTH;

/// Problems found by [`Keymap::validate`](crate::keymap::Keymap::validate)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// A key activates a layer which doesn't exist
    LayerOutOfRange { layer: usize, row: usize, col: usize, target: u8 },
    /// A combo key can't be found in any layer, so the combo can never fire
    ComboKeyNotInKeymap { combo: usize, key: usize },
    /// A combo output activates a layer which doesn't exist
    ComboOutputLayerOutOfRange { combo: usize, target: u8 },
    /// A combo without any key
    EmptyCombo { combo: usize },
    /// A combo with more keys than the tracker can follow
    ComboTooLong { combo: usize, len: usize },
    /// More combos than the tracker can hold
    TooManyCombos { count: usize, max: usize },
    /// The auto mouse layer doesn't exist
    AutoMouseLayerOutOfRange { target: u8 },
    /// The auto sniping layer doesn't exist
    SnipingLayerOutOfRange { target: u8 },
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::LayerOutOfRange { layer, row, col, target } => {
                write!(
                    f,
                    "Key ({}, {}) on layer {} activates non-existent layer {}",
                    row, col, layer, target
                )
            }
            KeymapError::ComboKeyNotInKeymap { combo, key } => {
                write!(f, "Key {} of combo {} is not in the keymap", key, combo)
            }
            KeymapError::ComboOutputLayerOutOfRange { combo, target } => {
                write!(f, "Combo {} activates non-existent layer {}", combo, target)
            }
            KeymapError::EmptyCombo { combo } => write!(f, "Combo {} has no keys", combo),
            KeymapError::ComboTooLong { combo, len } => {
                write!(f, "Combo {} has {} keys, at most {} are supported", combo, len, COMBO_MAX_LENGTH)
            }
            KeymapError::TooManyCombos { count, max } => {
                write!(f, "{} combos defined, at most {} are supported", count, max)
            }
            KeymapError::AutoMouseLayerOutOfRange { target } => {
                write!(f, "Auto mouse layer {} doesn't exist", target)
            }
            KeymapError::SnipingLayerOutOfRange { target } => {
                write!(f, "Auto sniping layer {} doesn't exist", target)
            }
        }
    }
}

impl core::error::Error for KeymapError {}
