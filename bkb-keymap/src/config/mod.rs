//! Keymap behavior and board descriptions.
//!
//! Timings are owned by the host, they are listed here so a keymap ships with the values it
//! was tuned for.

use embassy_time::Duration;

use crate::layer::Layer;

/// Config for configurable action behavior
#[derive(Clone, Copy, Debug, Default)]
pub struct BehaviorConfig {
    pub tap_hold: TapHoldConfig,
    pub combo: CombosConfig,
    pub pointing: PointingConfig,
}

/// Configurations for tap hold behavior
#[derive(Clone, Copy, Debug)]
pub struct TapHoldConfig {
    /// Home row mods: a tap-hold key is a tap when pressed right after typing
    pub enable_hrm: bool,
    pub prior_idle_time: Duration,
    /// Tapping term, a dual-role key held longer is a hold
    pub hold_timeout: Duration,
}

impl Default for TapHoldConfig {
    fn default() -> Self {
        Self {
            enable_hrm: false,
            prior_idle_time: Duration::from_millis(120),
            hold_timeout: Duration::from_millis(250),
        }
    }
}

/// Config for combo behavior
#[derive(Clone, Copy, Debug)]
pub struct CombosConfig {
    /// All keys of a combo must be pressed within this time
    pub timeout: Duration,
}

impl Default for CombosConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(50),
        }
    }
}

/// Config of the pointing device hooks
#[derive(Clone, Copy, Debug)]
pub struct PointingConfig {
    /// Layer activated when the pointer moves
    pub auto_mouse_layer: u8,
    /// Layer on which sniping is turned on automatically, `None` to disable
    pub auto_sniping_layer: Option<u8>,
}

impl Default for PointingConfig {
    fn default() -> Self {
        Self {
            auto_mouse_layer: Layer::Pointer as u8,
            auto_sniping_layer: None,
        }
    }
}

/// Configurations for usb
#[derive(Clone, Copy, Debug)]
pub struct KeyboardUsbConfig<'a> {
    /// Vender id
    pub vid: u16,
    /// Product id
    pub pid: u16,
    /// Device release number, BCD
    pub device_version: u16,
    /// Manufacturer
    pub manufacturer: &'a str,
    /// Product name
    pub product_name: &'a str,
    pub description: &'a str,
}

/// Key matrix with one pin per key
#[derive(Clone, Copy, Debug)]
pub struct DirectPinMatrixConfig<'a, const ROW: usize, const COL: usize> {
    /// Pin names, `None` where no key is wired
    pub pins: [[Option<&'a str>; COL]; ROW],
    /// Keys pull the pin low when pressed
    pub low_active: bool,
}

/// Config of a rotary encoder
#[derive(Clone, Copy, Debug)]
pub struct EncoderConfig<'a> {
    // Pin a of the encoder
    pub pin_a: &'a str,
    // Pin b of the encoder
    pub pin_b: &'a str,
    /// Pulses per detent
    pub resolution: u8,
    /// Initial state of the two phases
    pub default_position: u8,
    // Whether the direction of the rotary encoder is reversed.
    pub reverse: bool,
}

/// Configurations for single-pin backlight
#[derive(Clone, Copy, Debug)]
pub struct BacklightConfig<'a> {
    pub pin: &'a str,
    pub levels: u8,
}

/// Configurations for RGB light
#[derive(Clone, Copy, Debug)]
pub struct RgbLightConfig<'a> {
    /// Data pin of the LED chain
    pub pin: &'a str,
    pub rgb_led_num: u32,
    pub rgb_hue_step: u32,
    pub rgb_val_step: u32,
    pub rgb_sat_step: u32,
    /// The maximum brightness level
    pub limit_val: u8,
    /// Switch off when the host goes to sleep
    pub sleep: bool,
    pub animations: bool,
}

/// Configuration for debouncing
#[derive(Clone, Copy, Debug)]
pub struct DebounceConfig {
    /// Debounce time in ms
    pub debounce_time: u32,
}

/// Mechanical locking switches (caps lock, num lock, scroll lock)
#[derive(Clone, Copy, Debug, Default)]
pub struct LockingConfig {
    pub enabled: bool,
    /// Resynchronize the lock state with the host
    pub resync: bool,
}
