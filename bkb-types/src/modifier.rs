use core::ops::BitOr;

use bitfield_struct::bitfield;

/// Modifier combination carried by dual-role keys and modified keystrokes.
///
/// 5 bits are used: 4 for the modifier kind and 1 for the hand.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.merge(rhs)
    }
}

impl ModifierCombination {
    pub const LCTRL: Self = Self::new().with_ctrl(true);
    pub const LSHIFT: Self = Self::new().with_shift(true);
    pub const LALT: Self = Self::new().with_alt(true);
    pub const LGUI: Self = Self::new().with_gui(true);
    pub const RCTRL: Self = Self::LCTRL.with_right(true);
    pub const RSHIFT: Self = Self::LSHIFT.with_right(true);
    pub const RALT: Self = Self::LALT.with_right(true);
    pub const RGUI: Self = Self::LGUI.with_right(true);

    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        Self::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    /// Union of two combinations, usable in const tables.
    ///
    /// The hand flag is sticky: merging any right-hand combination yields a right-hand one.
    pub const fn merge(self, other: Self) -> Self {
        Self::from_bits(self.into_bits() | other.into_bits())
    }

    /// `true` if no modifier is set
    pub const fn is_empty(self) -> bool {
        self.into_bits() & 0x0F == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_hand_constants() {
        assert!(ModifierCombination::RSHIFT.shift());
        assert!(ModifierCombination::RSHIFT.right());
        assert!(!ModifierCombination::LSHIFT.right());
    }

    #[test]
    fn test_merge() {
        let m = ModifierCombination::RSHIFT.merge(ModifierCombination::RGUI);
        assert_eq!(m, ModifierCombination::new_from(true, true, false, true, false));
        assert_eq!(m, ModifierCombination::RSHIFT | ModifierCombination::RGUI);
        assert!(ModifierCombination::new().is_empty());
        assert!(!m.is_empty());
    }
}
