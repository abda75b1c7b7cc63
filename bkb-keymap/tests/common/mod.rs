#![allow(dead_code)]

use bkb_keymap::action::{Action, KeyAction};
use bkb_keymap::color::Rgb;
use bkb_keymap::host::{KeyboardHost, PointingHost, RgbMatrixHost};
use bkb_keymap::keycode::{HidKeyCode, KeyCode};
use bkb_keymap::layer::LayerState;
use bkb_keymap::layout::split_3x5_3_position;
use bkb_keymap::modifier::ModifierCombination;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Everything the keymap asked the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Tap(Action),
    WeakMods(ModifierCombination),
    OneShotMods(ModifierCombination),
    DelOneShotMods(ModifierCombination),
    AutoMouseLayer(u8),
    AutoMouseEnable(bool),
    Sniping(bool),
    SetColor(u8, Rgb),
}

/// Recording host, LEDs are numbered in the reading order of the 3x5+3 layout
pub struct TestHost {
    pub events: Vec<HostEvent>,
    pub layer_state: LayerState,
    pub brightness: u8,
}

impl Default for TestHost {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            layer_state: LayerState::only(0),
            brightness: 255,
        }
    }
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layers(layers: &[u8]) -> Self {
        let mut state = LayerState::default();
        for l in layers {
            state = state.with(*l);
        }
        Self {
            layer_state: state,
            ..Default::default()
        }
    }

    pub fn taps(&self) -> Vec<Action> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Tap(a) => Some(*a),
                _ => None,
            })
            .collect()
    }

    pub fn colors(&self) -> Vec<(u8, Rgb)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::SetColor(i, c) => Some((*i, *c)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl KeyboardHost for TestHost {
    fn tap(&mut self, action: Action) {
        self.events.push(HostEvent::Tap(action));
    }

    fn add_weak_mods(&mut self, mods: ModifierCombination) {
        self.events.push(HostEvent::WeakMods(mods));
    }

    fn add_oneshot_mods(&mut self, mods: ModifierCombination) {
        self.events.push(HostEvent::OneShotMods(mods));
    }

    fn del_oneshot_mods(&mut self, mods: ModifierCombination) {
        self.events.push(HostEvent::DelOneShotMods(mods));
    }
}

impl RgbMatrixHost for TestHost {
    fn layer_state(&self) -> LayerState {
        self.layer_state
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn led_index(&self, row: usize, col: usize) -> Option<u8> {
        (0..36).find(|i| split_3x5_3_position(*i) == Some((row, col))).map(|i| i as u8)
    }

    fn set_color(&mut self, index: u8, color: Rgb) {
        self.events.push(HostEvent::SetColor(index, color));
    }
}

impl PointingHost for TestHost {
    fn set_auto_mouse_layer(&mut self, layer: u8) {
        self.events.push(HostEvent::AutoMouseLayer(layer));
    }

    fn set_auto_mouse_enable(&mut self, enable: bool) {
        self.events.push(HostEvent::AutoMouseEnable(enable));
    }

    fn set_pointer_sniping_enabled(&mut self, enable: bool) {
        self.events.push(HostEvent::Sniping(enable));
    }
}

pub fn key(k: HidKeyCode) -> Action {
    Action::Key(KeyCode::Hid(k))
}

pub fn shifted_key(k: HidKeyCode) -> Action {
    Action::KeyWithModifier(KeyCode::Hid(k), ModifierCombination::LSHIFT)
}

/// Position of `action` in a layer, if any
pub fn find<const ROW: usize, const COL: usize>(
    layer: &[[KeyAction; COL]; ROW],
    action: KeyAction,
) -> Option<(usize, usize)> {
    for (r, row) in layer.iter().enumerate() {
        for (c, a) in row.iter().enumerate() {
            if *a == action {
                return Some((r, c));
            }
        }
    }
    None
}
