//! BastardKB Skeletyl, 3x5+3 split.
//!
//! Dvorak alphas with CAGS home row mods, and combos for the shifted digits on the two
//! top rows.

use strum::FromRepr;

use super::{BSP_NAV, ENT_SYM, SPC_NUM, TAB_FUN};
use crate::action::KeyAction;
use crate::combo::Combo;
use crate::config::BehaviorConfig;
use crate::host::KeyboardHost;
use crate::keymap::Keymap;
use crate::layer::NUM_LAYERS;
use crate::layout::{MATRIX_COLS, MATRIX_ROWS, split_3x5_3};
use crate::modifier::ModifierCombination;
use crate::pointing::{DPI_MOD, DRG_TOG, S_D_MOD, SNIPING};
use crate::transform::{HomeRowOrder, home_row_mods, pointer_mod};
use crate::{a, k, kc, mt, shifted, wm};

pub use crate::processor::process_record_user;

#[rustfmt::skip]
const LAYER_BASE: [KeyAction; 36] = [
    k!(Quote),     k!(Comma), k!(Dot), k!(P), k!(Y),         k!(F), k!(G), k!(C), k!(R), k!(L),
    k!(A),         k!(O),     k!(E),   k!(U), k!(I),         k!(D), k!(H), k!(T), k!(N), k!(S),
    k!(Semicolon), k!(Q),     k!(J),   k!(K), k!(X),         k!(B), k!(M), k!(W), k!(V), k!(Z),
                              TAB_FUN, BSP_NAV, k!(Escape),  k!(Grave), SPC_NUM, ENT_SYM,
];

#[rustfmt::skip]
const LAYER_FUNCTION: [KeyAction; 36] = [
    k!(F1),    k!(F2),   k!(F3),   k!(F4),     k!(F5),     k!(F6),           k!(F7),                   k!(F8),                                          k!(F9),         k!(F10),
    k!(LCtrl), k!(LAlt), k!(LGui), k!(LShift), a!(No),     k!(AudioVolUp),   wm!(Left, ModifierCombination::RSHIFT), wm!(Up, ModifierCombination::RSHIFT), wm!(Down, ModifierCombination::RSHIFT), wm!(Right, ModifierCombination::RSHIFT),
    a!(No),    a!(No),   a!(No),   a!(No),     a!(No),     k!(AudioVolDown), kc!(Special, CapsWordToggle), wm!(Kc4, ModifierCombination::RSHIFT.merge(ModifierCombination::RGUI)), k!(F11), k!(F12),
                         a!(Transparent), a!(No), a!(No),  a!(No), a!(No), a!(No),
];

#[rustfmt::skip]
const LAYER_NAVIGATION: [KeyAction; 36] = [
    a!(No),    a!(No),   a!(No),   a!(No),     a!(No),     a!(No),        k!(MouseWheelLeft), k!(MouseWheelUp), k!(MouseWheelDown), k!(MouseWheelRight),
    k!(LCtrl), k!(LAlt), k!(LGui), k!(LShift), a!(No),     k!(CapsLock),  k!(Left),           k!(Up),           k!(Down),           k!(Right),
    a!(No),    a!(No),   a!(No),   a!(No),     a!(No),     k!(Insert),    k!(Home),           k!(PageUp),       k!(PageDown),       k!(End),
                         a!(No), a!(Transparent), a!(No),  k!(Delete), k!(Space), k!(Enter),
];

#[rustfmt::skip]
const LAYER_POINTER: [KeyAction; 36] = [
    kc!(Special, Bootloader), kc!(Special, EepromClear), a!(No), DPI_MOD, S_D_MOD,   S_D_MOD, DPI_MOD, kc!(Rgb, Toggle), kc!(Rgb, ModePlain), kc!(Rgb, ValueIncrease),
    k!(LCtrl),       k!(LAlt), k!(LGui), k!(LShift),     a!(No),                     a!(No),  k!(LShift), k!(LGui), k!(LAlt), k!(LCtrl),
    a!(Transparent), DRG_TOG,  SNIPING,  k!(MouseBtn5),  k!(MouseBtn4),              k!(MouseBtn4), k!(MouseBtn5), SNIPING, DRG_TOG, a!(Transparent),
                     k!(MouseBtn3), k!(MouseBtn2), k!(MouseBtn1),                    k!(MouseBtn1), k!(MouseBtn2), k!(MouseBtn3),
];

#[rustfmt::skip]
const LAYER_NUMERAL: [KeyAction; 36] = [
    k!(Kc1),          k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5),          k!(Kc6), k!(Kc7),    k!(Kc8),  k!(Kc9),  k!(Kc0),
    k!(LeftBracket),  a!(No),  a!(No),  a!(No),  k!(Backslash),    a!(No),  k!(LShift), k!(LGui), k!(LAlt), k!(LCtrl),
    k!(RightBracket), a!(No),  a!(No),  a!(No),  k!(Slash),        a!(No),  a!(No),     a!(No),   a!(No),   a!(No),
                      k!(Minus), k!(Equal), k!(Dot),               a!(No), a!(Transparent), a!(No),
];

#[rustfmt::skip]
const LAYER_SYMBOLS: [KeyAction; 36] = [
    shifted!(Kc1),          shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5),         shifted!(Kc6), shifted!(Kc7), shifted!(Kc8), shifted!(Kc9), shifted!(Kc0),
    shifted!(LeftBracket),  a!(No),        a!(No),        a!(No),        shifted!(Backslash),   a!(No),        k!(LShift),    k!(LGui),      k!(LAlt),      k!(LCtrl),
    shifted!(RightBracket), a!(No),        a!(No),        a!(No),        shifted!(Slash),       a!(No),        a!(No),        a!(No),        a!(No),        a!(No),
                            shifted!(Minus), shifted!(Equal), shifted!(Grave),                  a!(No), a!(No), a!(Transparent),
];

/// Base layer with its dual-role keys
pub const BASE: [KeyAction; 36] = pointer_mod(home_row_mods(LAYER_BASE, HomeRowOrder::Cags));

/// Layers, indexed by [`Layer`](crate::layer::Layer)
pub static KEYMAP: [[[KeyAction; MATRIX_COLS]; MATRIX_ROWS]; NUM_LAYERS] = [
    split_3x5_3(BASE, a!(No)),
    split_3x5_3(LAYER_FUNCTION, a!(No)),
    split_3x5_3(LAYER_NAVIGATION, a!(No)),
    split_3x5_3(LAYER_POINTER, a!(No)),
    split_3x5_3(LAYER_NUMERAL, a!(No)),
    split_3x5_3(LAYER_SYMBOLS, a!(No)),
];

/// Combos, the discriminant is the index in [`COMBOS`]
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComboId {
    AQuoteExclaim = 0,
    OCommaAt,
    EDotHash,
    UPDollar,
    IYPercent,
    DFCaret,
    HGAmpersand,
    TCAsterisk,
    NRLeftParen,
    SLRightParen,
    UHCapsWord,
    ETCamelCase,
    CommaDotDoubleArrow,
    DotPArrow,
}

pub static COMBOS: [Combo; 14] = [
    Combo::new(&[mt!(A, LCTRL), k!(Quote)], shifted!(Kc1)),
    Combo::new(&[mt!(O, LALT), k!(Comma)], shifted!(Kc2)),
    Combo::new(&[mt!(E, LGUI), k!(Dot)], shifted!(Kc3)),
    Combo::new(&[mt!(U, LSHIFT), k!(P)], shifted!(Kc4)),
    Combo::new(&[k!(I), k!(Y)], shifted!(Kc5)),
    Combo::new(&[k!(D), k!(F)], shifted!(Kc6)),
    Combo::new(&[mt!(H, RSHIFT), k!(G)], shifted!(Kc7)),
    Combo::new(&[mt!(T, RGUI), k!(C)], shifted!(Kc8)),
    Combo::new(&[mt!(N, LALT), k!(R)], shifted!(Kc9)),
    Combo::new(&[mt!(S, RCTRL), k!(L)], shifted!(Kc0)),
    Combo::new(&[mt!(U, LSHIFT), mt!(H, RSHIFT)], kc!(Special, CapsWordToggle)),
    Combo::new(&[mt!(E, LGUI), mt!(T, RGUI)], kc!(User, CamelCaseToggle)),
    Combo::custom(&[k!(Comma), k!(Dot)]),
    Combo::custom(&[k!(Dot), k!(P)]),
];

/// Handle the combos without an output of their own. Only presses do something.
pub fn process_combo_event<H: KeyboardHost>(host: &mut H, index: usize, pressed: bool) {
    let Some(combo) = u8::try_from(index).ok().and_then(ComboId::from_repr) else {
        return;
    };
    if !pressed {
        return;
    }
    match combo {
        ComboId::CommaDotDoubleArrow => {
            debug!("Combo {:?}", combo);
            host.send_string("=>");
        }
        ComboId::DotPArrow => {
            debug!("Combo {:?}", combo);
            host.send_string("->");
        }
        _ => (),
    }
}

pub fn keymap() -> Keymap<'static, MATRIX_ROWS, MATRIX_COLS, NUM_LAYERS> {
    Keymap::new(&KEYMAP, None, &COMBOS, BehaviorConfig::default())
}
