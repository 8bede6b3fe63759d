//! Save files: a [`GameState`] as pretty-printed JSON on disk.
//!
//! Only I/O and JSON syntax errors surface; a syntactically valid file with
//! the wrong structure still loads, with defaults filled in.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use kniffel_core::GameState;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("save file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("save file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

pub fn load(path: impl AsRef<Path>) -> Result<GameState> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: Value = serde_json::from_str(&text).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let state = GameState::from_json(&raw);
    info!(path = %path.display(), roll_count = state.roll_count, "loaded game");
    Ok(state)
}

/// Write `state` to `path` through a sibling temp file and a rename, so a
/// crash mid-write leaves the previous save intact.
pub fn save(path: impl AsRef<Path>, state: &GameState) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let text = serde_json::to_string_pretty(&state.to_json()).map_err(|source| {
        StoreError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let tmp = tmp_path(path);
    fs::write(&tmp, text).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;
    info!(path = %path.display(), "saved game");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
