pub mod common;

use bkb_keymap::action::{Action, KeyAction};
use bkb_keymap::case_modes::CaseModes;
use bkb_keymap::combo::{ComboEvent, ComboOutput, ComboTracker};
use bkb_keymap::keyboards::skeletyl::{self, COMBOS, ComboId, KEYMAP};
use bkb_keymap::keyboards::{BSP_NAV, ENT_SYM, SPC_NUM, TAB_FUN};
use bkb_keymap::keycode::{HidKeyCode, KeyCode, SpecialKey};
use bkb_keymap::layer::{Layer, LayerState};
use bkb_keymap::processor::KeyRecord;
use bkb_keymap::{a, k, kc, mt, shifted};

use crate::common::{TestHost, find, key, shifted_key};

#[test]
fn test_keymap_is_valid() {
    assert_eq!(skeletyl::keymap().validate(), Ok(()));
}

#[test]
fn test_base_layer_matrix() {
    let base = &KEYMAP[Layer::Base as usize];
    assert_eq!(base[0], [k!(Quote), k!(Comma), k!(Dot), k!(P), k!(Y)]);
    // Right half is mirrored
    assert_eq!(base[4], [k!(L), k!(R), k!(C), k!(G), k!(F)]);
    assert_eq!(base[1][0], mt!(A, LCTRL));
    assert_eq!(base[1][4], k!(I));
    assert_eq!(base[5][4], k!(D));
    assert_eq!(base[5][3], mt!(H, RSHIFT));
    assert_eq!(base[5][0], mt!(S, RCTRL));
    // Thumbs
    assert_eq!(base[3], [a!(No), a!(No), TAB_FUN, BSP_NAV, k!(Escape)]);
    assert_eq!(base[7], [a!(No), a!(No), ENT_SYM, SPC_NUM, k!(Grave)]);
}

#[test]
fn test_pointer_keys_on_base_layer() {
    let base = &KEYMAP[Layer::Base as usize];
    let pointer = Action::LayerOn(Layer::Pointer as u8);
    assert_eq!(base[2][0], KeyAction::TapHold(Action::Key(KeyCode::Hid(HidKeyCode::Semicolon)), pointer));
    assert_eq!(base[6][0], KeyAction::TapHold(Action::Key(KeyCode::Hid(HidKeyCode::Z)), pointer));
    assert_eq!(base[2][1], k!(Q));
}

#[test]
fn test_transparent_thumb_resolves_to_base() {
    let keymap = skeletyl::keymap();
    let state = LayerState::only(Layer::Base as u8).with(Layer::Numeral as u8);
    // The numeral layer is held by this thumb, which is transparent there
    assert_eq!(keymap.get_action(state, 7, 3), SPC_NUM);
    assert_eq!(keymap.get_action(state, 0, 0), k!(Kc1));
    assert_eq!(keymap.get_action(state, 3, 4), k!(Dot));
}

#[test]
fn test_function_layer_specials() {
    let function = &KEYMAP[Layer::Function as usize];
    assert_eq!(function[6][3], kc!(Special, CapsWordToggle));
    assert!(find(function, k!(AudioVolUp)).is_some());
    assert_eq!(function[3][2], a!(Transparent));
}

#[test]
fn test_combo_keys_are_on_base_layer() {
    let base = &KEYMAP[Layer::Base as usize];
    for combo in COMBOS.iter() {
        for key in combo.keys {
            assert!(find(base, *key).is_some(), "{:?} not on base layer", key);
        }
    }
    assert_eq!(COMBOS[ComboId::AQuoteExclaim as usize].output, ComboOutput::Action(shifted!(Kc1)));
    assert_eq!(
        COMBOS[ComboId::ETCamelCase as usize].output,
        ComboOutput::Action(kc!(User, CamelCaseToggle))
    );
    assert_eq!(COMBOS[ComboId::DotPArrow as usize].output, ComboOutput::Custom);
}

#[test]
fn test_double_arrow_combo() {
    let mut host = TestHost::new();
    skeletyl::process_combo_event(&mut host, ComboId::CommaDotDoubleArrow as usize, true);
    assert_eq!(host.taps(), vec![key(HidKeyCode::Equal), shifted_key(HidKeyCode::Dot)]);

    // Release sends nothing
    host.clear();
    skeletyl::process_combo_event(&mut host, ComboId::CommaDotDoubleArrow as usize, false);
    assert!(host.events.is_empty());
}

#[test]
fn test_arrow_combo() {
    let mut host = TestHost::new();
    skeletyl::process_combo_event(&mut host, ComboId::DotPArrow as usize, true);
    assert_eq!(host.taps(), vec![key(HidKeyCode::Minus), shifted_key(HidKeyCode::Dot)]);
}

#[test]
fn test_other_combos_have_no_custom_action() {
    let mut host = TestHost::new();
    skeletyl::process_combo_event(&mut host, ComboId::AQuoteExclaim as usize, true);
    skeletyl::process_combo_event(&mut host, ComboId::UHCapsWord as usize, true);
    skeletyl::process_combo_event(&mut host, 14, true);
    skeletyl::process_combo_event(&mut host, 1000, true);
    assert!(host.events.is_empty());
}

#[test]
fn test_chord_sends_arrow_once() {
    let mut host = TestHost::new();
    let mut tracker = ComboTracker::new(&COMBOS);
    let mut feed = |key: KeyAction, pressed: bool, host: &mut TestHost| {
        if let Some(ComboEvent { index, pressed }) = tracker.process(key, pressed) {
            skeletyl::process_combo_event(host, index, pressed);
        }
    };

    feed(k!(Comma), true, &mut host);
    feed(k!(Dot), true, &mut host);
    feed(k!(Dot), false, &mut host);
    feed(k!(Comma), false, &mut host);

    assert_eq!(host.taps(), vec![key(HidKeyCode::Equal), shifted_key(HidKeyCode::Dot)]);
}

#[test]
fn test_caps_word_combo_output() {
    let mut host = TestHost::new();
    let mut case_modes = CaseModes::new();
    let output = match COMBOS[ComboId::UHCapsWord as usize].output {
        ComboOutput::Action(a) => a,
        ComboOutput::Custom => panic!("caps word combo has an output"),
    };
    assert_eq!(output.tap_action().keycode(), Some(KeyCode::Special(SpecialKey::CapsWordToggle)));
    assert!(!skeletyl::process_record_user(&mut case_modes, &mut host, output, KeyRecord::pressed()));
    assert!(case_modes.caps_word_on());
}
