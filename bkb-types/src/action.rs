//! Keyboard actions.
//!
//! Key types:
//! - [`Action`] - Single operations that a key sends or executes
//! - [`KeyAction`] - What a key position does, including dual-role keys
//! - [`EncoderAction`] - Rotary encoder actions

use crate::keycode::{HidKeyCode, KeyCode};
use crate::modifier::ModifierCombination;

/// EncoderAction is the action at a encoder position, stored in encoder_map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderAction {
    clockwise: KeyAction,
    counter_clockwise: KeyAction,
}

impl Default for EncoderAction {
    fn default() -> Self {
        Self {
            clockwise: KeyAction::No,
            counter_clockwise: KeyAction::No,
        }
    }
}

impl EncoderAction {
    /// Create a new encoder action.
    pub const fn new(clockwise: KeyAction, counter_clockwise: KeyAction) -> Self {
        Self {
            clockwise,
            counter_clockwise,
        }
    }

    /// Get the clockwise action.
    pub fn clockwise(&self) -> KeyAction {
        self.clockwise
    }

    /// Get the counter clockwise action.
    pub fn counter_clockwise(&self) -> KeyAction {
        self.counter_clockwise
    }
}

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action. Triggered when pressed and cancelled when released.
    Single(Action),
    /// Dual-role key: the first action is sent when tapped, the second while held.
    ///
    /// Whether a press is a tap or a hold is decided by the host.
    TapHold(Action, Action),
}

impl KeyAction {
    /// The action sent when this key is tapped.
    ///
    /// `Action::No` for `No` and `Transparent`.
    pub const fn tap_action(self) -> Action {
        match self {
            KeyAction::Single(a) | KeyAction::TapHold(a, _) => a,
            _ => Action::No,
        }
    }

    /// The action activated while this key is held, for dual-role keys only
    pub const fn hold_action(self) -> Option<Action> {
        match self {
            KeyAction::TapHold(_, h) => Some(h),
            _ => None,
        }
    }

    /// Turn a single key into a dual-role key with the given hold action.
    ///
    /// Anything other than `Single` is returned unchanged.
    pub const fn with_hold(self, hold: Action) -> Self {
        match self {
            KeyAction::Single(tap) => KeyAction::TapHold(tap, hold),
            other => other,
        }
    }

    pub fn is_dual_role(&self) -> bool {
        matches!(self, KeyAction::TapHold(_, _))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A normal key stroke.
    Key(KeyCode),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Hold a modifier combination.
    Modifier(ModifierCombination),
    /// Activate a layer while held.
    LayerOn(u8),
    /// Oneshot modifier, keep the modifier active until the next key is triggered.
    OneShotModifier(ModifierCombination),
}

impl Action {
    /// The keycode emitted by this action, if it emits one
    pub const fn keycode(self) -> Option<KeyCode> {
        match self {
            Action::Key(k) | Action::KeyWithModifier(k, _) => Some(k),
            _ => None,
        }
    }

    /// The HID keycode emitted by this action, if it emits one
    pub const fn hid_keycode(self) -> Option<HidKeyCode> {
        match self {
            Action::Key(KeyCode::Hid(k)) | Action::KeyWithModifier(KeyCode::Hid(k), _) => Some(k),
            _ => None,
        }
    }

    /// The layer activated by this action
    pub const fn layer(self) -> Option<u8> {
        match self {
            Action::LayerOn(l) => Some(l),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: KeyAction = KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::A)));

    #[test]
    fn test_with_hold() {
        let hold = Action::Modifier(ModifierCombination::LCTRL);
        let dual = A.with_hold(hold);
        assert_eq!(dual, KeyAction::TapHold(A.tap_action(), hold));
        assert_eq!(dual.hold_action(), Some(hold));
        // Already dual-role keys and empty keys are left alone
        assert_eq!(dual.with_hold(Action::LayerOn(3)), dual);
        assert_eq!(KeyAction::No.with_hold(hold), KeyAction::No);
        assert_eq!(KeyAction::Transparent.with_hold(hold), KeyAction::Transparent);
    }

    #[test]
    fn test_action_accessors() {
        assert_eq!(A.tap_action().hid_keycode(), Some(HidKeyCode::A));
        assert_eq!(Action::LayerOn(2).layer(), Some(2));
        assert_eq!(Action::Modifier(ModifierCombination::LALT).keycode(), None);
    }
}
