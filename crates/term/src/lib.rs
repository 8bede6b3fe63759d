//! Terminal rendering layer.
//!
//! Dice are painted into a simple framebuffer that the [`TerminalSession`]
//! flushes to the terminal. Nothing outside [`renderer`] touches the real
//! terminal, so everything else here can be unit-tested.

pub mod dice_set;
pub mod fb;
pub mod pips;
pub mod renderer;
pub mod status;

pub use kniffel_core as core;
pub use kniffel_types as types;

pub use dice_set::{DiceSet, DiceSetError, LOCKED_FG};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalSession};
pub use status::{compose_screen, StatusLine};
