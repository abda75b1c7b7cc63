use strum::FromRepr;

/// Keyboard usages from the HID usage tables (page 0x07), plus the mouse range used by
/// the host's mouse keys.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// Reserved, no-key.
    No = 0x00,
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,
    /// `1` and `!`
    Kc1 = 0x1E,
    /// `2` and `@`
    Kc2 = 0x1F,
    /// `3` and `#`
    Kc3 = 0x20,
    /// `4` and `$`
    Kc4 = 0x21,
    /// `5` and `%`
    Kc5 = 0x22,
    /// `6` and `^`
    Kc6 = 0x23,
    /// `7` and `&`
    Kc7 = 0x24,
    /// `8` and `*`
    Kc8 = 0x25,
    /// `9` and `(`
    Kc9 = 0x26,
    /// `0` and `)`
    Kc0 = 0x27,
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    /// `-` and `_`
    Minus = 0x2D,
    /// `=` and `+`
    Equal = 0x2E,
    /// `[` and `{`
    LeftBracket = 0x2F,
    /// `]` and `}`
    RightBracket = 0x30,
    /// `\` and `|`
    Backslash = 0x31,
    /// Non-US `#` and `~`
    NonusHash = 0x32,
    /// `;` and `:`
    Semicolon = 0x33,
    /// `'` and `"`
    Quote = 0x34,
    /// `` ` `` and `~`
    Grave = 0x35,
    /// `,` and `<`
    Comma = 0x36,
    /// `.` and `>`
    Dot = 0x37,
    /// `/` and `?`
    Slash = 0x38,
    CapsLock = 0x39,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,
    NumLock = 0x53,
    Application = 0x65,
    /// Processed as consumer `Mute` by the host
    AudioMute = 0xA8,
    /// Processed as consumer `Volume Increment` by the host
    AudioVolUp = 0xA9,
    /// Processed as consumer `Volume Decrement` by the host
    AudioVolDown = 0xAA,
    MouseUp = 0xCD,
    MouseDown = 0xCE,
    MouseLeft = 0xCF,
    MouseRight = 0xD0,
    /// Mouse Button 1(Left)
    MouseBtn1 = 0xD1,
    /// Mouse Button 2(Right)
    MouseBtn2 = 0xD2,
    /// Mouse Button 3(Middle)
    MouseBtn3 = 0xD3,
    /// Mouse Button 4(Back)
    MouseBtn4 = 0xD4,
    /// Mouse Button 5(Forward)
    MouseBtn5 = 0xD5,
    MouseWheelUp = 0xD9,
    MouseWheelDown = 0xDA,
    MouseWheelLeft = 0xDB,
    MouseWheelRight = 0xDC,
    LCtrl = 0xE0,
    LShift = 0xE1,
    LAlt = 0xE2,
    LGui = 0xE3,
    RCtrl = 0xE4,
    RShift = 0xE5,
    RAlt = 0xE6,
    RGui = 0xE7,
}

impl HidKeyCode {
    /// Returns `true` if the keycode is a letter, `A` to `Z`
    pub fn is_alpha(self) -> bool {
        HidKeyCode::A <= self && self <= HidKeyCode::Z
    }

    /// Returns `true` if the keycode is a digit of the top row
    pub fn is_digit(self) -> bool {
        HidKeyCode::Kc1 <= self && self <= HidKeyCode::Kc0
    }

    /// Returns `true` if the keycode is a modifier keycode
    pub fn is_modifier(self) -> bool {
        HidKeyCode::LCtrl <= self && self <= HidKeyCode::RGui
    }

    /// Returns `true` if the keycode is a mouse keycode
    pub fn is_mouse_key(self) -> bool {
        HidKeyCode::MouseUp <= self && self <= HidKeyCode::MouseWheelRight
    }

    /// Does current keycode continue a caps word or an x-case word?
    pub fn is_word_continue_key(self) -> bool {
        self.is_alpha()
            || self.is_digit()
            || matches!(self, HidKeyCode::Minus | HidKeyCode::Backspace | HidKeyCode::Delete)
    }

    /// Is current keycode shifted while caps word is on?
    pub fn is_caps_word_shifted_key(self) -> bool {
        self.is_alpha() || self == HidKeyCode::Minus
    }
}

impl From<u8> for HidKeyCode {
    fn from(value: u8) -> Self {
        Self::from_repr(value).unwrap_or(HidKeyCode::No)
    }
}

/// Built-in firmware keycodes which are not HID usages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpecialKey {
    /// `CW_TOGG`
    CapsWordToggle,
    /// `QK_BOOT`, jump to the bootloader
    Bootloader,
    /// `EE_CLR`, wipe the persisted configuration
    EepromClear,
}

/// RGB matrix control keycodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbKey {
    Toggle,
    ModeForward,
    ModeReverse,
    /// Static color mode, `RGB_M_P`
    ModePlain,
    HueIncrease,
    HueDecrease,
    SaturationIncrease,
    SaturationDecrease,
    ValueIncrease,
    ValueDecrease,
    SpeedIncrease,
    SpeedDecrease,
}

/// Pointing device keycodes provided by the keyboard's pointing driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointingKey {
    /// Cycle the default DPI
    DpiMod,
    /// Cycle the sniping DPI
    SnipingDpiMod,
    /// Momentary sniping mode
    Sniping,
    /// Momentary drag-scroll
    DragScroll,
    /// Toggle drag-scroll
    DragScrollToggle,
}

/// Keycodes owned by the keymaps, handled by `process_record_user`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UserKey {
    CapsWord,
    CamelCaseToggle,
    SnakeCaseToggle,
    SnakeCase,
}

/// Everything a key position can emit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    Hid(HidKeyCode),
    Special(SpecialKey),
    Rgb(RgbKey),
    Pointing(PointingKey),
    User(UserKey),
}

impl KeyCode {
    /// The HID usage of this keycode, if any
    pub fn as_hid(self) -> Option<HidKeyCode> {
        match self {
            KeyCode::Hid(k) => Some(k),
            _ => None,
        }
    }
}

impl From<HidKeyCode> for KeyCode {
    fn from(value: HidKeyCode) -> Self {
        KeyCode::Hid(value)
    }
}

/// Convert an ASCII character to the HID keycode typing it on a US layout.
///
/// The flag is `true` if shift must be held. Unsupported characters map to `No`.
pub fn from_ascii(ascii: u8) -> (HidKeyCode, bool) {
    match ascii {
        b'a'..=b'z' => (HidKeyCode::from(ascii - b'a' + HidKeyCode::A as u8), false),
        b'A'..=b'Z' => (HidKeyCode::from(ascii - b'A' + HidKeyCode::A as u8), true),
        b'1'..=b'9' => (HidKeyCode::from(ascii - b'1' + HidKeyCode::Kc1 as u8), false),
        b'0' => (HidKeyCode::Kc0, false),
        b'!' => (HidKeyCode::Kc1, true),
        b'@' => (HidKeyCode::Kc2, true),
        b'#' => (HidKeyCode::Kc3, true),
        b'$' => (HidKeyCode::Kc4, true),
        b'%' => (HidKeyCode::Kc5, true),
        b'^' => (HidKeyCode::Kc6, true),
        b'&' => (HidKeyCode::Kc7, true),
        b'*' => (HidKeyCode::Kc8, true),
        b'(' => (HidKeyCode::Kc9, true),
        b')' => (HidKeyCode::Kc0, true),
        b'\n' => (HidKeyCode::Enter, false),
        b'\t' => (HidKeyCode::Tab, false),
        b' ' => (HidKeyCode::Space, false),
        b'-' => (HidKeyCode::Minus, false),
        b'_' => (HidKeyCode::Minus, true),
        b'=' => (HidKeyCode::Equal, false),
        b'+' => (HidKeyCode::Equal, true),
        b'[' => (HidKeyCode::LeftBracket, false),
        b'{' => (HidKeyCode::LeftBracket, true),
        b']' => (HidKeyCode::RightBracket, false),
        b'}' => (HidKeyCode::RightBracket, true),
        b'\\' => (HidKeyCode::Backslash, false),
        b'|' => (HidKeyCode::Backslash, true),
        b';' => (HidKeyCode::Semicolon, false),
        b':' => (HidKeyCode::Semicolon, true),
        b'\'' => (HidKeyCode::Quote, false),
        b'"' => (HidKeyCode::Quote, true),
        b'`' => (HidKeyCode::Grave, false),
        b'~' => (HidKeyCode::Grave, true),
        b',' => (HidKeyCode::Comma, false),
        b'<' => (HidKeyCode::Comma, true),
        b'.' => (HidKeyCode::Dot, false),
        b'>' => (HidKeyCode::Dot, true),
        b'/' => (HidKeyCode::Slash, false),
        b'?' => (HidKeyCode::Slash, true),
        _ => (HidKeyCode::No, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8() {
        assert_eq!(HidKeyCode::from(0x04), HidKeyCode::A);
        assert_eq!(HidKeyCode::from(0xE5), HidKeyCode::RShift);
        // Gap in the usage table
        assert_eq!(HidKeyCode::from(0x01), HidKeyCode::No);
    }

    #[test]
    fn test_from_ascii_arrows() {
        assert_eq!(from_ascii(b'='), (HidKeyCode::Equal, false));
        assert_eq!(from_ascii(b'>'), (HidKeyCode::Dot, true));
        assert_eq!(from_ascii(b'-'), (HidKeyCode::Minus, false));
        assert_eq!(from_ascii(b'Q'), (HidKeyCode::Q, true));
        assert_eq!(from_ascii(b'9'), (HidKeyCode::Kc9, false));
        assert_eq!(from_ascii(0x7F), (HidKeyCode::No, false));
    }

    #[test]
    fn test_word_keys() {
        assert!(HidKeyCode::Q.is_word_continue_key());
        assert!(HidKeyCode::Kc0.is_word_continue_key());
        assert!(HidKeyCode::Backspace.is_word_continue_key());
        assert!(!HidKeyCode::Space.is_word_continue_key());
        assert!(HidKeyCode::Minus.is_caps_word_shifted_key());
        assert!(!HidKeyCode::Kc1.is_caps_word_shifted_key());
    }
}
