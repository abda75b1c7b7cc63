//! Whole-layer transforms applied to a base layer before it is arranged on the matrix.
//!
//! The transforms work on the reading-order key list (3 rows of 10, then thumbs), so the
//! positions below are the same for every 3x5+3 keyboard:
//!
//! ```text
//!  0  1  2  3  4 |  5  6  7  8  9
//! 10 11 12 13 14 | 15 16 17 18 19
//! 20 21 22 23 24 | 25 26 27 28 29
//! ```
//!
//! Only plain keys (`KeyAction::Single`) are turned into dual-role keys. Anything else on a
//! designated position is kept as is.

use crate::action::{Action, KeyAction};
use crate::layer::Layer;
use crate::modifier::ModifierCombination;

/// Order of the home row modifiers, from the pinky to the index finger.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomeRowOrder {
    /// GUI, Alt, Ctrl, Shift
    Gacs,
    /// Ctrl, Alt, GUI, Shift
    Cags,
}

impl HomeRowOrder {
    /// Hold modifiers of positions 10 to 13
    pub const fn left(self) -> [ModifierCombination; 4] {
        match self {
            HomeRowOrder::Gacs => [
                ModifierCombination::LGUI,
                ModifierCombination::LALT,
                ModifierCombination::LCTRL,
                ModifierCombination::LSHIFT,
            ],
            HomeRowOrder::Cags => [
                ModifierCombination::LCTRL,
                ModifierCombination::LALT,
                ModifierCombination::LGUI,
                ModifierCombination::LSHIFT,
            ],
        }
    }

    /// Hold modifiers of positions 16 to 19
    ///
    /// The ring finger holds left alt on both hands, right alt is AltGr on most layouts.
    pub const fn right(self) -> [ModifierCombination; 4] {
        match self {
            HomeRowOrder::Gacs => [
                ModifierCombination::RSHIFT,
                ModifierCombination::RCTRL,
                ModifierCombination::LALT,
                ModifierCombination::RGUI,
            ],
            HomeRowOrder::Cags => [
                ModifierCombination::RSHIFT,
                ModifierCombination::RGUI,
                ModifierCombination::LALT,
                ModifierCombination::RCTRL,
            ],
        }
    }
}

/// First position of the left home row modifiers
pub const LEFT_HOME_ROW: usize = 10;
/// First position of the right home row modifiers
pub const RIGHT_HOME_ROW: usize = 16;
/// Positions turned into pointer layer keys by [`pointer_mod`]
pub const POINTER_MOD_POSITIONS: [usize; 2] = [20, 29];

/// Add modifiers on hold to the 8 home row keys.
///
/// The two inner columns (positions 14 and 15) are left untouched.
pub const fn home_row_mods<const N: usize>(keys: [KeyAction; N], order: HomeRowOrder) -> [KeyAction; N] {
    const { assert!(N >= 20, "home row mods need at least two rows of 10 keys") };

    let mut keys = keys;
    let left = order.left();
    let right = order.right();
    let mut i = 0;
    while i < 4 {
        keys[LEFT_HOME_ROW + i] = keys[LEFT_HOME_ROW + i].with_hold(Action::Modifier(left[i]));
        keys[RIGHT_HOME_ROW + i] = keys[RIGHT_HOME_ROW + i].with_hold(Action::Modifier(right[i]));
        i += 1;
    }
    keys
}

/// Activate the pointer layer while holding the outermost keys of the bottom row.
pub const fn pointer_mod<const N: usize>(keys: [KeyAction; N]) -> [KeyAction; N] {
    const { assert!(N >= 30, "pointer mod needs at least three rows of 10 keys") };

    let mut keys = keys;
    let mut i = 0;
    while i < POINTER_MOD_POSITIONS.len() {
        let pos = POINTER_MOD_POSITIONS[i];
        keys[pos] = keys[pos].with_hold(Action::LayerOn(Layer::Pointer as u8));
        i += 1;
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{a, k, lt, mt};

    #[rustfmt::skip]
    const ROWS: [KeyAction; 36] = [
        k!(Quote), k!(Comma), k!(Dot), k!(P), k!(Y), k!(F), k!(G), k!(C), k!(R), k!(L),
        k!(A), k!(O), k!(E), k!(U), k!(I), k!(D), k!(H), k!(T), k!(N), k!(S),
        k!(Semicolon), k!(Q), k!(J), k!(K), k!(X), k!(B), k!(M), k!(W), k!(V), k!(Z),
        k!(Escape), lt!(Navigation, Backspace), k!(Tab), k!(Space), k!(Enter), a!(No),
    ];

    fn changed_positions(before: &[KeyAction], after: &[KeyAction]) -> heapless::Vec<usize, 36> {
        before
            .iter()
            .zip(after.iter())
            .enumerate()
            .filter(|(_, (b, a))| b != a)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_home_row_mods_cags() {
        let keys = home_row_mods(ROWS, HomeRowOrder::Cags);
        assert_eq!(keys[10], mt!(A, LCTRL));
        assert_eq!(keys[11], mt!(O, LALT));
        assert_eq!(keys[12], mt!(E, LGUI));
        assert_eq!(keys[13], mt!(U, LSHIFT));
        assert_eq!(keys[16], mt!(H, RSHIFT));
        assert_eq!(keys[17], mt!(T, RGUI));
        assert_eq!(keys[18], mt!(N, LALT));
        assert_eq!(keys[19], mt!(S, RCTRL));
    }

    #[test]
    fn test_home_row_mods_gacs() {
        let keys = home_row_mods(ROWS, HomeRowOrder::Gacs);
        assert_eq!(keys[10], mt!(A, LGUI));
        assert_eq!(keys[12], mt!(E, LCTRL));
        assert_eq!(keys[17], mt!(T, RCTRL));
        assert_eq!(keys[19], mt!(S, RGUI));
    }

    #[test]
    fn test_home_row_mods_only_touch_home_row() {
        let keys = home_row_mods(ROWS, HomeRowOrder::Gacs);
        let changed = changed_positions(&ROWS, &keys);
        assert_eq!(changed.as_slice(), &[10, 11, 12, 13, 16, 17, 18, 19]);
    }

    #[test]
    fn test_pointer_mod() {
        let keys = pointer_mod(ROWS);
        let changed = changed_positions(&ROWS, &keys);
        assert_eq!(changed.as_slice(), &[20, 29]);
        assert_eq!(
            keys[29],
            KeyAction::TapHold(ROWS[29].tap_action(), Action::LayerOn(Layer::Pointer as u8))
        );
    }

    #[test]
    fn test_non_plain_keys_are_kept() {
        let mut rows = ROWS;
        rows[10] = a!(Transparent);
        rows[16] = lt!(Symbols, H);
        rows[20] = a!(No);
        let keys = pointer_mod(home_row_mods(rows, HomeRowOrder::Cags));
        assert_eq!(keys[10], a!(Transparent));
        assert_eq!(keys[16], lt!(Symbols, H));
        assert_eq!(keys[20], a!(No));
        assert_eq!(keys[11], mt!(O, LALT));
    }
}
