/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::A)))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Hid(
            $crate::keycode::HidKeyCode::$k,
        )))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::action::KeyAction::$a
    };
}

/// Create a normal key with modifier action, e.g. `wm!(Left, ModifierCombination::RSHIFT)`
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::KeyWithModifier(
            $crate::keycode::KeyCode::Hid($crate::keycode::HidKeyCode::$x),
            $m,
        ))
    };
}

/// Create a shifted key, e.g. `shifted!(Kc1)` types `!`
#[macro_export]
macro_rules! shifted {
    ($x: ident) => {
        $crate::wm!($x, $crate::modifier::ModifierCombination::LSHIFT)
    };
}

/// Create a layer-tap key: activates the layer while held, taps the key otherwise.
///
/// The layer is a [`Layer`](crate::layer::Layer) variant, e.g. `lt!(Navigation, Backspace)`.
#[macro_export]
macro_rules! lt {
    ($x: ident, $k: ident) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::KeyCode::Hid($crate::keycode::HidKeyCode::$k)),
            $crate::action::Action::LayerOn($crate::layer::Layer::$x as u8),
        )
    };
}

/// Create a modifier-tap key, e.g. `mt!(A, LCTRL)`
#[macro_export]
macro_rules! mt {
    ($k: ident, $m: ident) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::KeyCode::Hid($crate::keycode::HidKeyCode::$k)),
            $crate::action::Action::Modifier($crate::modifier::ModifierCombination::$m),
        )
    };
}

/// Create a key sending a non-HID keycode, e.g. `kc!(User, SnakeCase)` or `kc!(Rgb, Toggle)`
#[macro_export]
macro_rules! kc {
    (Special, $k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Special(
            $crate::keycode::SpecialKey::$k,
        )))
    };
    (Rgb, $k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Rgb(
            $crate::keycode::RgbKey::$k,
        )))
    };
    (Pointing, $k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Pointing(
            $crate::keycode::PointingKey::$k,
        )))
    };
    (User, $k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::User(
            $crate::keycode::UserKey::$k,
        )))
    };
}

/// Create an oneshot modifier key in keymap
#[macro_export]
macro_rules! osm {
    ($m: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::OneShotModifier(
            $crate::modifier::ModifierCombination::$m,
        ))
    };
}

/// Create an encoder action, the first argument is the clockwise action, the second is the counter-clockwise action
#[macro_export]
macro_rules! encoder {
    ($clockwise: expr, $counter_clockwise: expr) => {
        $crate::action::EncoderAction::new($clockwise, $counter_clockwise)
    };
}

#[cfg(test)]
mod tests {
    use crate::action::{Action, KeyAction};
    use crate::keycode::{HidKeyCode, KeyCode, UserKey};
    use crate::layer::Layer;
    use crate::modifier::ModifierCombination;

    #[test]
    fn test_dual_role_macros() {
        assert_eq!(
            lt!(Navigation, Backspace),
            KeyAction::TapHold(
                Action::Key(KeyCode::Hid(HidKeyCode::Backspace)),
                Action::LayerOn(Layer::Navigation as u8)
            )
        );
        assert_eq!(
            mt!(A, LCTRL).hold_action(),
            Some(Action::Modifier(ModifierCombination::LCTRL))
        );
    }

    #[test]
    fn test_keycode_macros() {
        assert_eq!(
            shifted!(Kc1).tap_action(),
            Action::KeyWithModifier(KeyCode::Hid(HidKeyCode::Kc1), ModifierCombination::LSHIFT)
        );
        assert_eq!(
            kc!(User, SnakeCase).tap_action().keycode(),
            Some(KeyCode::User(UserKey::SnakeCase))
        );
        assert_eq!(a!(Transparent), KeyAction::Transparent);
    }
}
