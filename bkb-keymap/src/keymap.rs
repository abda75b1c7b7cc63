use crate::action::{Action, EncoderAction, KeyAction};
use crate::combo::{COMBO_MAX_LENGTH, COMBO_MAX_NUM, Combo, ComboOutput};
use crate::config::BehaviorConfig;
use crate::error::KeymapError;
use crate::layer::LayerState;

/// Keymap represents the stack of layers of a keyboard, with its combos and behavior config.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap should be binded to the actual pcb matrix definition, actions are retrieved with
/// `(layer, row, col)`.
pub struct Keymap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize = 0> {
    /// Layers
    pub layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Rotary encoders, each rotary encoder is represented as (Clockwise, CounterClockwise)
    pub encoders: Option<&'a [[EncoderAction; NUM_ENCODER]; NUM_LAYER]>,
    /// Combos
    pub combos: &'a [Combo],
    /// Options for configurable action behavior
    pub behavior: BehaviorConfig,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize>
    Keymap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>
{
    pub const fn new(
        layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
        encoders: Option<&'a [[EncoderAction; NUM_ENCODER]; NUM_LAYER]>,
        combos: &'a [Combo],
        behavior: BehaviorConfig,
    ) -> Self {
        Self {
            layers,
            encoders,
            combos,
            behavior,
        }
    }

    /// Action at the given position of a layer, `None` if out of range
    pub fn action_at(&self, layer: usize, row: usize, col: usize) -> Option<KeyAction> {
        self.layers.get(layer)?.get(row)?.get(col).copied()
    }

    /// Resolve the action of a key with the given layers enabled.
    ///
    /// Layers are checked from the highest active one, transparent keys fall through to the
    /// next active layer.
    pub fn get_action(&self, state: LayerState, row: usize, col: usize) -> KeyAction {
        for layer in state.iter_active() {
            match self.action_at(layer as usize, row, col) {
                Some(KeyAction::Transparent) | None => continue,
                Some(action) => return action,
            }
        }
        KeyAction::No
    }

    /// Action of an encoder on the highest active layer
    pub fn get_encoder_action(&self, state: LayerState, id: usize, clockwise: bool) -> Option<KeyAction> {
        let encoders = self.encoders?;
        let action = encoders.get(state.highest_layer() as usize)?.get(id)?;
        Some(if clockwise {
            action.clockwise()
        } else {
            action.counter_clockwise()
        })
    }

    /// Check the consistency of the tables.
    pub fn validate(&self) -> Result<(), KeymapError> {
        let result = self.validate_inner();
        if let Err(e) = result {
            error!("Invalid keymap: {:?}", e);
        }
        result
    }

    fn validate_inner(&self) -> Result<(), KeymapError> {
        for (layer, rows) in self.layers.iter().enumerate() {
            for (row, cols) in rows.iter().enumerate() {
                for (col, action) in cols.iter().enumerate() {
                    if let Some(target) = self.out_of_range_layer(*action) {
                        return Err(KeymapError::LayerOutOfRange {
                            layer,
                            row,
                            col,
                            target,
                        });
                    }
                }
            }
        }

        if let Some(encoders) = self.encoders {
            for (layer, actions) in encoders.iter().enumerate() {
                for (id, action) in actions.iter().enumerate() {
                    for a in [action.clockwise(), action.counter_clockwise()] {
                        if let Some(target) = self.out_of_range_layer(a) {
                            return Err(KeymapError::LayerOutOfRange {
                                layer,
                                row: id,
                                col: 0,
                                target,
                            });
                        }
                    }
                }
            }
        }

        if self.combos.len() > COMBO_MAX_NUM {
            return Err(KeymapError::TooManyCombos {
                count: self.combos.len(),
                max: COMBO_MAX_NUM,
            });
        }
        for (combo_idx, combo) in self.combos.iter().enumerate() {
            if combo.keys.is_empty() {
                return Err(KeymapError::EmptyCombo { combo: combo_idx });
            }
            if combo.keys.len() > COMBO_MAX_LENGTH {
                return Err(KeymapError::ComboTooLong {
                    combo: combo_idx,
                    len: combo.keys.len(),
                });
            }
            for (key_idx, key) in combo.keys.iter().enumerate() {
                if !self.contains(*key) {
                    return Err(KeymapError::ComboKeyNotInKeymap {
                        combo: combo_idx,
                        key: key_idx,
                    });
                }
            }
            if let ComboOutput::Action(output) = combo.output {
                if let Some(target) = self.out_of_range_layer(output) {
                    return Err(KeymapError::ComboOutputLayerOutOfRange {
                        combo: combo_idx,
                        target,
                    });
                }
            }
        }

        let pointing = &self.behavior.pointing;
        if pointing.auto_mouse_layer as usize >= NUM_LAYER {
            return Err(KeymapError::AutoMouseLayerOutOfRange {
                target: pointing.auto_mouse_layer,
            });
        }
        if let Some(target) = pointing.auto_sniping_layer {
            if target as usize >= NUM_LAYER {
                return Err(KeymapError::SnipingLayerOutOfRange { target });
            }
        }

        Ok(())
    }

    /// `true` if the action is on any layer
    fn contains(&self, action: KeyAction) -> bool {
        self.layers.iter().flatten().flatten().any(|a| *a == action)
    }

    fn out_of_range_layer(&self, action: KeyAction) -> Option<u8> {
        let layer = match action {
            KeyAction::Single(Action::LayerOn(l)) | KeyAction::TapHold(_, Action::LayerOn(l)) => l,
            KeyAction::TapHold(Action::LayerOn(l), _) => l,
            _ => return None,
        };
        if layer as usize >= NUM_LAYER { Some(layer) } else { None }
    }
}
