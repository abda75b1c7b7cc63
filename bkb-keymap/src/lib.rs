//! Keymaps for BastardKB split keyboards.
//!
//! The tables in this crate (layers, combos, LED color maps, encoder maps) are built at
//! compile time. The host firmware owns scanning, timing and reporting, and calls back into
//! this crate at a few extension points:
//!
//! - [`processor::process_record_user`] for every key event
//! - [`combo`] event handlers when a chord fires
//! - [`indicator::rgb_matrix_indicators_advanced_user`] on every LED refresh
//! - [`pointing::pointing_device_init_user`] and [`pointing::layer_state_set_user`]
//!
//! The host side is abstracted by the traits in [`host`].
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("The `defmt` and `log` features are mutually exclusive");

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod case_modes;
pub mod combo;
pub mod config;
pub mod error;
pub mod host;
#[cfg(feature = "rgb_matrix")]
pub mod indicator;
pub mod keyboards;
pub mod keymap;
pub mod layer;
pub mod layout;
pub mod layout_macro;
pub mod pointing;
pub mod processor;
pub mod transform;

pub use bkb_types as types;
pub use bkb_types::{action, color, keycode, modifier};
