//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the dice entity, the randomness sources used for
//! rolling, and the persisted game state. It has **no** dependencies on the
//! terminal, input handling or the filesystem.
//!
//! # Module Structure
//!
//! - [`dice`]: one six-sided die with a lock flag
//! - [`rng`]: process entropy or a fixed seed for rolls
//! - [`game_state`]: full game snapshot with tolerant JSON decoding
//!
//! # Example
//!
//! ```
//! use kniffel_core::{Dice, Entropy};
//!
//! let mut rng = Entropy::Seed(8).rng();
//! let mut dice = Dice::with_value(2);
//! dice.lock(true);
//! dice.roll_with(&mut rng);
//! assert_eq!(dice.value(), 2);
//! ```

pub mod dice;
pub mod game_state;
pub mod rng;

pub use kniffel_types as types;

pub use dice::Dice;
pub use game_state::{GameKind, GameState, Point};
pub use rng::Entropy;
