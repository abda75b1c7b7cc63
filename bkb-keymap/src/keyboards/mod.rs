//! Keymaps and board descriptions of the supported keyboards.
//!
//! Skeletyl and Dilemma share the 3x5+3 layout and the layer set in [`Layer`](crate::layer::Layer).

pub mod bento;
pub mod dilemma;
pub mod skeletyl;

use crate::action::KeyAction;
use crate::lt;

/// Tab, function layer on hold
pub const TAB_FUN: KeyAction = lt!(Function, Tab);
/// Backspace, navigation layer on hold
pub const BSP_NAV: KeyAction = lt!(Navigation, Backspace);
/// Space, numeral layer on hold
pub const SPC_NUM: KeyAction = lt!(Numeral, Space);
/// Enter, symbols layer on hold
pub const ENT_SYM: KeyAction = lt!(Symbols, Enter);
