//! Platform abstraction layer
//!
//! Handles device differences for:
//! - Keyboard input
//! - Touch-zone input

pub mod input;

pub use input::{Key, key_intent, touch_intent};
