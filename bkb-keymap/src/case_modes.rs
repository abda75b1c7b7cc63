//! Caps word and x-case.
//!
//! Caps word shifts letters until a key that doesn't belong to a word is typed. X-case
//! replaces spaces by a delimiter, which gives `snake_case` with `_` or `camelCase` with a
//! oneshot shift. Typing space twice in a row removes the delimiter and ends x-case.

use crate::action::{Action, KeyAction};
use crate::host::KeyboardHost;
use crate::keycode::{HidKeyCode, KeyCode};
use crate::modifier::ModifierCombination;
use crate::processor::KeyRecord;

/// Key replaced by the delimiter in x-case
const XCASE_SEPARATOR: HidKeyCode = HidKeyCode::Space;

/// State of the case modes, owned by the host and passed to every key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CaseModes {
    caps_word: bool,
    /// Delimiter of the active x-case
    xcase: Option<Action>,
    /// Keys typed since the last delimiter, negative before the first one
    distance_to_last_delimiter: i8,
}

impl Default for CaseModes {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseModes {
    pub const fn new() -> Self {
        Self {
            caps_word: false,
            xcase: None,
            distance_to_last_delimiter: -1,
        }
    }

    pub fn caps_word_on(&self) -> bool {
        self.caps_word
    }

    pub fn xcase_on(&self) -> bool {
        self.xcase.is_some()
    }

    /// Delimiter of the active x-case
    pub fn xcase_delimiter(&self) -> Option<Action> {
        self.xcase
    }

    pub fn enable_caps_word(&mut self) {
        debug!("Caps word on");
        self.caps_word = true;
    }

    pub fn disable_caps_word(&mut self) {
        if self.caps_word {
            debug!("Caps word off");
        }
        self.caps_word = false;
    }

    /// Start x-case, spaces are replaced by `delimiter`.
    ///
    /// A `OneShotModifier` delimiter applies the modifiers to the next key instead of typing.
    pub fn enable_xcase_with(&mut self, delimiter: Action) {
        debug!("X-case on, delimiter: {:?}", delimiter);
        self.xcase = Some(delimiter);
        self.distance_to_last_delimiter = -1;
    }

    pub fn disable_xcase(&mut self) {
        if self.xcase.is_some() {
            debug!("X-case off");
        }
        self.xcase = None;
    }

    /// Run the case modes on a key event.
    ///
    /// Returns `false` if the key was consumed and must not be processed further.
    pub fn process<H: KeyboardHost>(&mut self, host: &mut H, key: KeyAction, record: KeyRecord) -> bool {
        if !self.caps_word && self.xcase.is_none() {
            return true;
        }

        let action = match key {
            // Held dual-role keys act as a modifier or a layer
            KeyAction::TapHold(_, _) if record.tap_count == 0 => return true,
            KeyAction::TapHold(tap, _) | KeyAction::Single(tap) => tap,
            KeyAction::No | KeyAction::Transparent => return true,
        };

        let keycode = match action {
            Action::Key(k) | Action::KeyWithModifier(k, _) => k,
            // Layer and modifier keys don't change the word
            _ => return true,
        };

        // Modifiers combine with the word's keys
        if keycode.as_hid().is_some_and(|k| k.is_modifier()) || !record.pressed {
            return true;
        }

        if let Some(delimiter) = self.xcase {
            match keycode {
                KeyCode::Hid(XCASE_SEPARATOR) => {
                    if self.distance_to_last_delimiter != 0 {
                        place_delimiter(host, delimiter);
                        self.distance_to_last_delimiter = 0;
                        return false;
                    }
                    // Second space in a row
                    remove_delimiter(host, delimiter);
                    self.disable_xcase();
                    self.disable_caps_word();
                    return true;
                }
                KeyCode::Hid(HidKeyCode::Backspace) => {
                    self.distance_to_last_delimiter = self.distance_to_last_delimiter.saturating_sub(1);
                }
                _ if self.distance_to_last_delimiter >= 0 => {
                    // The oneshot delimiter was consumed by a backspace, put it back
                    if self.distance_to_last_delimiter == 0 && matches!(delimiter, Action::OneShotModifier(_)) {
                        place_delimiter(host, delimiter);
                    }
                    self.distance_to_last_delimiter = self.distance_to_last_delimiter.saturating_add(1);
                }
                _ => (),
            }
        }

        match keycode.as_hid() {
            Some(k) if k.is_word_continue_key() => {
                if self.caps_word && k.is_caps_word_shifted_key() {
                    host.add_weak_mods(ModifierCombination::LSHIFT);
                }
            }
            _ => {
                self.disable_caps_word();
                self.disable_xcase();
            }
        }

        true
    }
}

fn place_delimiter<H: KeyboardHost>(host: &mut H, delimiter: Action) {
    match delimiter {
        Action::OneShotModifier(mods) => host.add_oneshot_mods(mods),
        action => host.tap(action),
    }
}

fn remove_delimiter<H: KeyboardHost>(host: &mut H, delimiter: Action) {
    match delimiter {
        Action::OneShotModifier(mods) => host.del_oneshot_mods(mods),
        _ => host.tap(Action::Key(KeyCode::Hid(HidKeyCode::Backspace))),
    }
}
