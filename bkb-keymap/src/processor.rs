//! User keycode processing.

use crate::action::{Action, KeyAction};
use crate::case_modes::CaseModes;
use crate::host::KeyboardHost;
use crate::keycode::{HidKeyCode, KeyCode, SpecialKey, UserKey};
use crate::modifier::ModifierCombination;

/// A key event as seen by the keymap callbacks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyRecord {
    pub pressed: bool,
    /// Number of taps of a dual-role key, 0 while it is held or undecided
    pub tap_count: u8,
}

impl KeyRecord {
    pub const fn pressed() -> Self {
        Self {
            pressed: true,
            tap_count: 1,
        }
    }

    pub const fn released() -> Self {
        Self {
            pressed: false,
            tap_count: 1,
        }
    }

    /// A dual-role key being held
    pub const fn held(pressed: bool) -> Self {
        Self { pressed, tap_count: 0 }
    }
}

/// Delimiter of camel case: the next letter is shifted
pub const CAMEL_CASE_DELIMITER: Action = Action::OneShotModifier(ModifierCombination::RSHIFT);
/// Delimiter of snake case: `_`
pub const SNAKE_CASE_DELIMITER: Action =
    Action::KeyWithModifier(KeyCode::Hid(HidKeyCode::Minus), ModifierCombination::LSHIFT);

/// Handle the keymap's own keycodes.
///
/// Returns `true` if the host should continue with its default processing of the key.
pub fn process_record_user<H: KeyboardHost>(
    case_modes: &mut CaseModes,
    host: &mut H,
    key: KeyAction,
    record: KeyRecord,
) -> bool {
    if !case_modes.process(host, key, record) {
        return false;
    }

    let keycode = match key {
        KeyAction::Single(Action::Key(k)) => k,
        _ => return true,
    };

    match keycode {
        KeyCode::User(UserKey::CapsWord) | KeyCode::Special(SpecialKey::CapsWordToggle) => {
            if record.pressed {
                case_modes.enable_caps_word();
            }
            false
        }
        KeyCode::User(UserKey::CamelCaseToggle) => {
            if record.pressed {
                case_modes.enable_xcase_with(CAMEL_CASE_DELIMITER);
            }
            false
        }
        KeyCode::User(UserKey::SnakeCaseToggle) | KeyCode::User(UserKey::SnakeCase) => {
            if record.pressed {
                case_modes.enable_xcase_with(SNAKE_CASE_DELIMITER);
            }
            false
        }
        _ => true,
    }
}
