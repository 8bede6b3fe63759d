//! Kniffel (workspace facade crate).
//!
//! Re-exports the `kniffel_*` crates under `kniffel::{core,input,store,term,types}`
//! and hosts the pieces only the binary needs: configuration, logging setup and
//! the game session that sits between terminal events and the dice set.

pub use kniffel_core as core;
pub use kniffel_input as input;
pub use kniffel_store as store;
pub use kniffel_term as term;
pub use kniffel_types as types;

pub mod config;
pub mod game;
pub mod logging;

pub use config::Config;
pub use game::{Flow, Game};
