//! Runtime configuration from environment variables.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `KNIFFEL_SEED` | Fixed seed; every roll becomes reproducible |
//! | `KNIFFEL_SAVE_PATH` | Save file, loaded at start and written on save/quit |
//! | `KNIFFEL_LOG_PATH` | Log file; logging is off without it |
//!
//! Empty values count as unset.

use std::path::PathBuf;

use crate::core::Entropy;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub seed: Option<u64>,
    pub save_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            seed: get("KNIFFEL_SEED").and_then(|s| s.parse().ok()),
            save_path: get("KNIFFEL_SAVE_PATH").map(PathBuf::from),
            log_path: get("KNIFFEL_LOG_PATH").map(PathBuf::from),
        }
    }

    /// Randomness for the first draw; later rolls derive from a counter.
    pub fn entropy(&self) -> Entropy {
        Entropy::from(self.seed)
    }
}
