use heapless::Vec;

use crate::action::KeyAction;

/// Max number of combos a keymap can hold
pub const COMBO_MAX_NUM: usize = 16;
/// Max number of keys of a single combo
pub const COMBO_MAX_LENGTH: usize = 4;

/// What a combo does when it fires.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComboOutput {
    /// Send an action, like a normal key
    Action(KeyAction),
    /// No output of its own, the keyboard's combo event handler does the work
    Custom,
}

/// A chord of keys which triggers a single output.
///
/// Keys are matched by their action on the layer where they are pressed, so a home row mod
/// key is referenced as the dual-role key, e.g. `mt!(A, LCTRL)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Combo {
    pub keys: &'static [KeyAction],
    pub output: ComboOutput,
}

impl Combo {
    pub const fn new(keys: &'static [KeyAction], output: KeyAction) -> Self {
        Self {
            keys,
            output: ComboOutput::Action(output),
        }
    }

    pub const fn custom(keys: &'static [KeyAction]) -> Self {
        Self {
            keys,
            output: ComboOutput::Custom,
        }
    }

    pub(crate) fn position(&self, key: KeyAction) -> Option<usize> {
        self.keys.iter().position(|&k| k == key)
    }
}

/// A combo was triggered or released.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ComboEvent {
    /// Index of the combo in its table
    pub index: usize,
    pub pressed: bool,
}

#[derive(Debug, Copy, Clone, Default)]
struct ComboState {
    /// Bit `i` is set when the `i`-th key of the combo is held
    state: u8,
    /// The combo has fired and waits for one of its keys to be released
    triggered: bool,
}

impl ComboState {
    fn keys_pressed(&self) -> u32 {
        self.state.count_ones()
    }

    fn reset(&mut self) {
        self.state = 0;
        self.triggered = false;
    }
}

/// Tracks which combos are being chorded.
///
/// Timing is left to the caller: a chord that is not completed within
/// [`CombosConfig::timeout`](crate::config::CombosConfig) should be abandoned with
/// [`ComboTracker::reset`] and its keys replayed.
pub struct ComboTracker<'a> {
    combos: &'a [Combo],
    states: Vec<ComboState, COMBO_MAX_NUM>,
}

impl<'a> ComboTracker<'a> {
    /// Create a tracker for the given combos. Combos after [`COMBO_MAX_NUM`] are ignored.
    pub fn new(combos: &'a [Combo]) -> Self {
        if combos.len() > COMBO_MAX_NUM {
            warn!("Too many combos: {}, only {} are tracked", combos.len(), COMBO_MAX_NUM);
        }
        let combos = &combos[..combos.len().min(COMBO_MAX_NUM)];
        let mut states = Vec::new();
        for _ in combos {
            // `combos` is truncated to the capacity
            let _ = states.push(ComboState::default());
        }
        Self { combos, states }
    }

    /// Feed a key event.
    ///
    /// Returns a press event when this key completes a combo, the longest one if several are
    /// completed at once, and a release event when a key of a triggered combo is released.
    pub fn process(&mut self, key: KeyAction, pressed: bool) -> Option<ComboEvent> {
        if key == KeyAction::No {
            return None;
        }

        if pressed {
            self.on_press(key)
        } else {
            self.on_release(key)
        }
    }

    fn on_press(&mut self, key: KeyAction) -> Option<ComboEvent> {
        let mut done: Option<usize> = None;
        for (i, (combo, state)) in self.combos.iter().zip(self.states.iter_mut()).enumerate() {
            if state.triggered {
                continue;
            }
            match combo.position(key) {
                Some(pos) if pos < COMBO_MAX_LENGTH => state.state |= 1 << pos,
                _ => {
                    state.reset();
                    continue;
                }
            }
            if state.keys_pressed() as usize == combo.keys.len() {
                let longer = match done {
                    Some(j) => combo.keys.len() > self.combos[j].keys.len(),
                    None => true,
                };
                if longer {
                    done = Some(i);
                }
            }
        }

        let index = done?;
        for (i, state) in self.states.iter_mut().enumerate() {
            if i == index {
                state.triggered = true;
            } else if !state.triggered {
                state.reset();
            }
        }
        debug!("Combo {} triggered", index);
        Some(ComboEvent { index, pressed: true })
    }

    fn on_release(&mut self, key: KeyAction) -> Option<ComboEvent> {
        let mut released = None;
        for (i, (combo, state)) in self.combos.iter().zip(self.states.iter_mut()).enumerate() {
            let Some(pos) = combo.position(key) else {
                continue;
            };
            if state.triggered {
                state.reset();
                if released.is_none() {
                    released = Some(ComboEvent { index: i, pressed: false });
                }
            } else if pos < COMBO_MAX_LENGTH {
                state.state &= !(1 << pos);
            }
        }
        released
    }

    /// `true` if some combo is partially pressed
    pub fn is_chording(&self) -> bool {
        self.states.iter().any(|s| !s.triggered && s.state != 0)
    }

    /// Forget every partial chord, triggered combos are kept
    pub fn reset(&mut self) {
        for state in self.states.iter_mut().filter(|s| !s.triggered) {
            state.reset();
        }
    }
}
