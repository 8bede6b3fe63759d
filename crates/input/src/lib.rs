//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`]s for the dice
//! set, and into [`Command`]s that the outer game loop handles itself.

pub mod map;

pub use kniffel_types as types;

pub use map::{command, dice_event, should_quit, Command};
