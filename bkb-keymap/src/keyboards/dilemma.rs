//! BastardKB Dilemma, 3x5+3 split with a trackpad and two encoders.
//!
//! Same alphas as the Skeletyl with GACS home row mods, numpad style numerals, per-layer LED
//! indicators and an auto mouse pointer layer.

use super::{BSP_NAV, ENT_SYM, SPC_NUM, TAB_FUN};
use crate::action::{EncoderAction, KeyAction};
use crate::config::{BehaviorConfig, PointingConfig};
#[cfg(feature = "pointing")]
use crate::host::PointingHost;
#[cfg(feature = "rgb_matrix")]
use crate::host::RgbMatrixHost;
#[cfg(feature = "rgb_matrix")]
use crate::indicator::{self, Color};
use crate::keymap::Keymap;
use crate::layer::{Layer, NUM_LAYERS};
#[cfg(feature = "pointing")]
use crate::layer::LayerState;
use crate::layout::{MATRIX_COLS, MATRIX_ROWS, split_3x5_3};
use crate::pointing::{DPI_MOD, DRGSCRL, S_D_MOD, SNIPING};
use crate::transform::{HomeRowOrder, home_row_mods, pointer_mod};
use crate::{a, k, kc, shifted};
#[cfg(feature = "encoder_map")]
use crate::encoder;

/// Number of rotary encoders, one per half
pub const NUM_ENCODERS: usize = 2;

#[rustfmt::skip]
const LAYER_BASE: [KeyAction; 36] = [
    k!(Quote),     k!(Comma), k!(Dot), k!(P), k!(Y),            k!(F), k!(G), k!(C), k!(R), k!(L),
    k!(A),         k!(O),     k!(E),   k!(U), k!(I),            k!(D), k!(H), k!(T), k!(N), k!(S),
    k!(Semicolon), k!(Q),     k!(J),   k!(K), k!(X),            k!(B), k!(M), k!(W), k!(V), k!(Z),
                              k!(Escape), TAB_FUN, BSP_NAV,     SPC_NUM, ENT_SYM, k!(Grave),
];

#[rustfmt::skip]
const LAYER_FUNCTION: [KeyAction; 36] = [
    a!(No),   a!(No),   a!(No),    a!(No),     a!(No),      k!(PrintScreen), k!(F7), k!(F8), k!(F9), k!(F12),
    k!(LGui), k!(LAlt), k!(LCtrl), k!(LShift), a!(No),      k!(ScrollLock),  k!(F4), k!(F5), k!(F6), k!(F11),
    a!(No),   a!(No),   a!(No),    a!(No),     a!(No),      k!(Pause),       k!(F1), k!(F2), k!(F3), k!(F10),
                        a!(No), a!(Transparent), a!(No),    a!(No), a!(No), a!(No),
];

#[rustfmt::skip]
const LAYER_NAVIGATION: [KeyAction; 36] = [
    a!(No),   a!(No),   a!(No),    a!(No),     a!(No),      a!(No),       a!(No),   a!(No),       a!(No),     a!(No),
    k!(LGui), k!(LAlt), k!(LCtrl), k!(LShift), a!(No),      k!(CapsLock), k!(Left), k!(Up),       k!(Down),   k!(Right),
    a!(No),   a!(No),   a!(No),    a!(No),     a!(No),      k!(Insert),   k!(Home), k!(PageDown), k!(PageUp), k!(End),
                        a!(No), a!(No), a!(Transparent),    k!(Space), k!(Enter), k!(Delete),
];

#[rustfmt::skip]
const LAYER_POINTER: [KeyAction; 36] = [
    kc!(Special, Bootloader), kc!(Special, EepromClear), a!(No), DPI_MOD, S_D_MOD,   S_D_MOD, DPI_MOD, kc!(Rgb, Toggle), kc!(Rgb, ModePlain), kc!(Rgb, ValueIncrease),
    k!(LGui),        k!(LAlt), k!(LCtrl), k!(LShift),   a!(No),                      a!(No),  k!(LShift), k!(LCtrl), k!(LAlt), k!(LGui),
    a!(Transparent), DRGSCRL,  SNIPING,   k!(MouseBtn3), a!(No),                     a!(No),  k!(MouseBtn3), SNIPING, DRGSCRL, a!(Transparent),
                     k!(MouseBtn3), k!(MouseBtn2), k!(MouseBtn1),                    k!(MouseBtn1), k!(MouseBtn2), k!(MouseBtn3),
];

#[rustfmt::skip]
const LAYER_NUMERAL: [KeyAction; 36] = [
    k!(LeftBracket),  k!(Kc7), k!(Kc8), k!(Kc9), k!(Equal),        a!(No), a!(No),     a!(No),    a!(No),   a!(No),
    k!(RightBracket), k!(Kc4), k!(Kc5), k!(Kc6), k!(Slash),        a!(No), k!(LShift), k!(LCtrl), k!(LAlt), k!(LGui),
    k!(Dot),          k!(Kc1), k!(Kc2), k!(Kc3), k!(Backslash),    a!(No), a!(No),     a!(No),    a!(No),   a!(No),
                      k!(Dot), k!(Minus), k!(Kc0),                 a!(No), a!(Transparent), a!(No),
];

#[rustfmt::skip]
const LAYER_SYMBOLS: [KeyAction; 36] = [
    shifted!(LeftBracket),  shifted!(Kc7), shifted!(Kc8), shifted!(Kc9), shifted!(Equal),        a!(No), a!(No),     a!(No),    a!(No),   a!(No),
    shifted!(RightBracket), shifted!(Kc4), shifted!(Kc5), shifted!(Kc6), shifted!(Slash),        a!(No), k!(LShift), k!(LCtrl), k!(LAlt), k!(LGui),
    shifted!(Grave),        shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Backslash),    a!(No), a!(No),     a!(No),    a!(No),   a!(No),
                            shifted!(Kc9), shifted!(Minus), shifted!(Kc0),                       a!(Transparent), a!(No), a!(No),
];

/// Base layer with its dual-role keys
pub const BASE: [KeyAction; 36] = pointer_mod(home_row_mods(LAYER_BASE, HomeRowOrder::Gacs));

/// Layers, indexed by [`Layer`]
pub static KEYMAP: [[[KeyAction; MATRIX_COLS]; MATRIX_ROWS]; NUM_LAYERS] = [
    split_3x5_3(BASE, a!(No)),
    split_3x5_3(LAYER_FUNCTION, a!(No)),
    split_3x5_3(LAYER_NAVIGATION, a!(No)),
    split_3x5_3(LAYER_POINTER, a!(No)),
    split_3x5_3(LAYER_NUMERAL, a!(No)),
    split_3x5_3(LAYER_SYMBOLS, a!(No)),
];

/// Encoder actions per layer, left encoder first
#[cfg(feature = "encoder_map")]
pub static ENCODER_MAP: [[EncoderAction; NUM_ENCODERS]; NUM_LAYERS] = [
    // Base
    [
        encoder!(k!(MouseWheelUp), k!(MouseWheelDown)),
        encoder!(k!(AudioVolUp), k!(AudioVolDown)),
    ],
    // Function
    [encoder!(k!(Up), k!(Down)), encoder!(k!(Right), k!(Left))],
    // Navigation
    [
        encoder!(k!(PageUp), k!(PageDown)),
        encoder!(k!(AudioVolDown), k!(AudioVolUp)),
    ],
    // Pointer
    [
        encoder!(kc!(Rgb, HueIncrease), kc!(Rgb, HueDecrease)),
        encoder!(kc!(Rgb, SaturationIncrease), kc!(Rgb, SaturationDecrease)),
    ],
    // Numeral
    [
        encoder!(kc!(Rgb, ValueIncrease), kc!(Rgb, ValueDecrease)),
        encoder!(kc!(Rgb, SpeedIncrease), kc!(Rgb, SpeedDecrease)),
    ],
    // Symbols
    [
        encoder!(kc!(Rgb, ModeForward), kc!(Rgb, ModeReverse)),
        encoder!(k!(Right), k!(Left)),
    ],
];

/// Auto mouse on the pointer layer, no auto sniping
pub const POINTING_CONFIG: PointingConfig = PointingConfig {
    auto_mouse_layer: Layer::Pointer as u8,
    auto_sniping_layer: None,
};

pub fn behavior_config() -> BehaviorConfig {
    BehaviorConfig {
        pointing: POINTING_CONFIG,
        ..Default::default()
    }
}

pub fn keymap() -> Keymap<'static, MATRIX_ROWS, MATRIX_COLS, NUM_LAYERS, NUM_ENCODERS> {
    #[cfg(feature = "encoder_map")]
    let encoders: Option<&'static [[EncoderAction; NUM_ENCODERS]; NUM_LAYERS]> = Some(&ENCODER_MAP);
    #[cfg(not(feature = "encoder_map"))]
    let encoders: Option<&'static [[EncoderAction; NUM_ENCODERS]; NUM_LAYERS]> = None;

    Keymap::new(&KEYMAP, encoders, &[], behavior_config())
}

#[cfg(feature = "pointing")]
pub fn pointing_device_init_user<H: PointingHost>(host: &mut H) {
    crate::pointing::pointing_device_init_user(host, &POINTING_CONFIG);
}

#[cfg(feature = "pointing")]
pub fn layer_state_set_user<H: PointingHost>(host: &mut H, state: LayerState) -> LayerState {
    crate::pointing::layer_state_set_user(host, &POINTING_CONFIG, state)
}

#[cfg(feature = "rgb_matrix")]
mod ledmap {
    use super::Color::{self, Cyan, LightRed, Off, Orange, Red};
    use crate::layer::NUM_LAYERS;
    use crate::layout::{MATRIX_COLS, MATRIX_ROWS, split_3x5_3};

    #[rustfmt::skip]
    const LAYER_BASE: [Color; 36] = [
        Off, Off, Off, Off, Off,    Off, Off, Off, Off, Off,
        Off, Off, Off, Off, Off,    Off, Off, Off, Off, Off,
        Off, Off, Off, Off, Off,    Off, Off, Off, Off, Off,
                  Off, Off, Off,    Off, Off, Off,
    ];

    #[rustfmt::skip]
    const LAYER_NAVIGATION: [Color; 36] = [
        Off, Off, Off, Off, Off,    Off, Off,  Off,  Off,  Off,
        Off, Off, Off, Off, Off,    Off, Cyan, Cyan, Cyan, Cyan,
        Off, Off, Off, Off, Off,    Off, Off,  Off,  Off,  Off,
                  Off, Off, Off,    Off, Off, Off,
    ];

    #[rustfmt::skip]
    const LAYER_POINTER: [Color; 36] = [
        Off, Off, Off, Off, Off,    Off, Off, Off, Off, Off,
        Off, Off, Off, Off, Off,    Off, Off, Off, Off, Off,
        Off, Off, Off, Off, Off,    Off, Off, Off, Off, Off,
                  Orange, LightRed, Red,    Red, LightRed, Orange,
    ];

    #[rustfmt::skip]
    const LAYER_NUMERAL: [Color; 36] = [
        Off, Cyan, Cyan, Cyan, Off,    Off, Off, Off, Off, Off,
        Off, Cyan, Cyan, Cyan, Off,    Off, Off, Off, Off, Off,
        Off, Cyan, Cyan, Cyan, Off,    Off, Off, Off, Off, Off,
                   Off,  Off,  Cyan,   Off, Off, Off,
    ];

    #[rustfmt::skip]
    const LAYER_SYMBOLS: [Color; 36] = [
        LightRed, Off, Off, Off, Off,    Off, Off, Off, Off, Off,
        LightRed, Off, Off, Off, Off,    Off, Off, Off, Off, Off,
        Off,      Off, Off, Off, Off,    Off, Off, Off, Off, Off,
                  Orange, Off, Orange,   Off, Off, Off,
    ];

    pub static LEDMAP: [[[Color; MATRIX_COLS]; MATRIX_ROWS]; NUM_LAYERS] = [
        split_3x5_3(LAYER_BASE, Off),
        split_3x5_3(LAYER_BASE, Off),
        split_3x5_3(LAYER_NAVIGATION, Off),
        split_3x5_3(LAYER_POINTER, Off),
        split_3x5_3(LAYER_NUMERAL, Off),
        split_3x5_3(LAYER_SYMBOLS, Off),
    ];
}

/// LED colors per layer, with the shape of [`KEYMAP`]
#[cfg(feature = "rgb_matrix")]
pub use ledmap::LEDMAP;

/// Paint the keys with the color map of the highest active layer
#[cfg(feature = "rgb_matrix")]
pub fn rgb_matrix_indicators_advanced_user<H: RgbMatrixHost>(host: &mut H, led_min: u8, led_max: u8) -> bool {
    indicator::rgb_matrix_indicators_advanced_user(&LEDMAP, host, led_min, led_max)
}
