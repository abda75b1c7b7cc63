//! # bkb types
//!
//! Fundamental type definitions shared by the keymaps.
//!
//! ## Modules
//!
//! - [`action`] - What a key position does: single actions, dual-role keys, encoder actions
//! - [`keycode`] - HID keycodes plus the firmware-level keycodes (RGB, pointing, user keycodes)
//! - [`modifier`] - Modifier key combinations
//! - [`color`] - HSV/RGB colors and the HSV to RGB conversion used by indicators

#![no_std]

pub mod action;
pub mod color;
pub mod keycode;
pub mod modifier;
