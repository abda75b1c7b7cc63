//! Pointing device keys and hooks.
//!
//! The keys are always available so layouts don't depend on the feature. Without the
//! `pointing` feature they do nothing.

use crate::action::{Action, KeyAction};
#[cfg(feature = "pointing")]
use crate::config::PointingConfig;
#[cfg(feature = "pointing")]
use crate::host::PointingHost;
use crate::keycode::{KeyCode, PointingKey};
#[cfg(feature = "pointing")]
use crate::layer::LayerState;

macro_rules! pointing_keys {
    ($($(#[$attr:meta])* $name:ident => $key:ident),* $(,)?) => {
        $(
            $(#[$attr])*
            pub const $name: KeyAction = if cfg!(feature = "pointing") {
                KeyAction::Single(Action::Key(KeyCode::Pointing(PointingKey::$key)))
            } else {
                KeyAction::No
            };
        )*
    };
}

pointing_keys! {
    /// Cycle the default DPI
    DPI_MOD => DpiMod,
    /// Cycle the sniping DPI
    S_D_MOD => SnipingDpiMod,
    /// Sniping while held
    SNIPING => Sniping,
    /// Drag-scroll while held
    DRGSCRL => DragScroll,
    /// Toggle drag-scroll
    DRG_TOG => DragScrollToggle,
}

/// Turn on auto mouse: moving the pointer activates the configured layer.
#[cfg(feature = "pointing")]
pub fn pointing_device_init_user<H: PointingHost>(host: &mut H, config: &PointingConfig) {
    info!("Auto mouse layer: {}", config.auto_mouse_layer);
    host.set_auto_mouse_layer(config.auto_mouse_layer);
    host.set_auto_mouse_enable(true);
}

/// Follow layer changes: sniping is on while the auto sniping layer is active.
///
/// Returns the state unchanged.
#[cfg(feature = "pointing")]
pub fn layer_state_set_user<H: PointingHost>(host: &mut H, config: &PointingConfig, state: LayerState) -> LayerState {
    if let Some(layer) = config.auto_sniping_layer {
        host.set_pointer_sniping_enabled(state.contains(layer));
    }
    state
}
