//! Shared types and constants - input events and dice layout
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the core logic, the terminal layer and the input mapping alike.
//!
//! # Dice Layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DICE_COUNT` | 5 | Dice in a set |
//! | `DIE_WIDTH` | 9 | Columns per rendered die |
//! | `DIE_HEIGHT` | 5 | Rows per rendered die |
//! | `MAX_ROLLS` | 3 | Rolls allowed per turn |
//!
//! # Examples
//!
//! ```
//! use kniffel_types::{InputEvent, DICE_COUNT};
//!
//! let event = InputEvent::from_str("move-next").unwrap();
//! assert_eq!(event, InputEvent::MoveNext);
//! assert_eq!(DICE_COUNT, 5);
//! ```

/// Number of dice in a set.
pub const DICE_COUNT: usize = 5;

/// Rendered die width in terminal columns.
pub const DIE_WIDTH: u16 = 9;

/// Rendered die height in terminal rows.
pub const DIE_HEIGHT: u16 = 5;

/// Lowest face value.
pub const MIN_FACE: u8 = 1;

/// Highest face value.
pub const MAX_FACE: u8 = 6;

/// Rolls a player gets per turn.
pub const MAX_ROLLS: u32 = 3;

/// A discrete input event delivered to the dice set by the outer loop.
///
/// `Redraw` and `Char` never change state; they only trigger a repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Move the selection cursor to the previous die (wraps).
    MovePrevious,
    /// Move the selection cursor to the next die (wraps).
    MoveNext,
    /// Toggle the lock on the selected die.
    Confirm,
    /// Repaint without a state change.
    Redraw,
    /// A literal character with no dice binding.
    Char(char),
}

impl InputEvent {
    /// Parse a symbolic event name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use kniffel_types::InputEvent;
    ///
    /// assert_eq!(InputEvent::from_str("Move-Previous"), Some(InputEvent::MovePrevious));
    /// assert_eq!(InputEvent::from_str("confirm"), Some(InputEvent::Confirm));
    /// assert_eq!(InputEvent::from_str("x"), Some(InputEvent::Char('x')));
    /// assert_eq!(InputEvent::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "move-previous" | "previous" | "up" => Some(InputEvent::MovePrevious),
            "move-next" | "next" | "down" => Some(InputEvent::MoveNext),
            "confirm" | "enter" | "toggle" => Some(InputEvent::Confirm),
            "redraw" => Some(InputEvent::Redraw),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(InputEvent::Char(c)),
                    _ => None,
                }
            }
        }
    }

    /// Canonical name of the event. Literal characters report `"char"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::MovePrevious => "move-previous",
            InputEvent::MoveNext => "move-next",
            InputEvent::Confirm => "confirm",
            InputEvent::Redraw => "redraw",
            InputEvent::Char(_) => "char",
        }
    }

    /// Whether the event only repaints.
    pub fn is_repaint_only(&self) -> bool {
        matches!(self, InputEvent::Redraw | InputEvent::Char(_))
    }
}
