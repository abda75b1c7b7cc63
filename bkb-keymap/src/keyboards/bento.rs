//! Bento, a 2x3 macropad with a rotary encoder.
//!
//! Only the board description is provided: the keymap is the host's default.

use crate::config::{
    BacklightConfig, DebounceConfig, DirectPinMatrixConfig, EncoderConfig, KeyboardUsbConfig, LockingConfig,
    RgbLightConfig,
};

pub const MATRIX_ROWS: usize = 2;
pub const MATRIX_COLS: usize = 3;

pub const USB_CONFIG: KeyboardUsbConfig<'static> = KeyboardUsbConfig {
    vid: 0xCB10,
    pid: 0x1133,
    device_version: 0x0100,
    manufacturer: "nguyedt",
    product_name: "Bento",
    description: "2x3 Macropad with Rotary Encoder",
};

pub const MATRIX_CONFIG: DirectPinMatrixConfig<'static, MATRIX_ROWS, MATRIX_COLS> = DirectPinMatrixConfig {
    pins: [[Some("D2"), Some("D4"), Some("F4")], [Some("D7"), Some("B1"), Some("B3")]],
    low_active: true,
};

pub const ENCODERS: [EncoderConfig<'static>; 1] = [EncoderConfig {
    pin_a: "D1",
    pin_b: "F5",
    resolution: 4,
    default_position: 0x3,
    reverse: false,
}];

pub const BACKLIGHT_CONFIG: BacklightConfig<'static> = BacklightConfig { pin: "B6", levels: 7 };

pub const RGB_LIGHT_CONFIG: RgbLightConfig<'static> = RgbLightConfig {
    pin: "D3",
    rgb_led_num: 11,
    rgb_hue_step: 8,
    rgb_val_step: 8,
    rgb_sat_step: 8,
    limit_val: 255,
    sleep: true,
    animations: true,
};

pub const DEBOUNCE_CONFIG: DebounceConfig = DebounceConfig { debounce_time: 5 };

pub const LOCKING_CONFIG: LockingConfig = LockingConfig {
    enabled: true,
    resync: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_a_pin() {
        assert!(MATRIX_CONFIG.pins.iter().flatten().all(|p| p.is_some()));
        assert_eq!(MATRIX_CONFIG.pins.iter().flatten().count(), MATRIX_ROWS * MATRIX_COLS);
    }

    #[test]
    fn test_pins_are_not_shared() {
        let mut pins: heapless::Vec<&str, 16> = heapless::Vec::new();
        let matrix = MATRIX_CONFIG.pins.iter().flatten().flatten().copied();
        let others = [ENCODERS[0].pin_a, ENCODERS[0].pin_b, BACKLIGHT_CONFIG.pin, RGB_LIGHT_CONFIG.pin];
        for pin in matrix.chain(others) {
            assert!(!pins.contains(&pin), "{} used twice", pin);
            pins.push(pin).unwrap();
        }
    }
}
