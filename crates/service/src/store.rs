//! Snapshot persistence: the whole game state is written and read as one
//! JSON document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use xiangqi_core::GameState;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot I/O on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("bad snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed storage for the current game.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored game. A missing file means there is no game yet.
    pub fn load(&self) -> Result<Option<GameState>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(GameState::from_json(&contents)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(self.io_error(source)),
        }
    }

    /// Replace the stored game. Written to a sibling temp file first and
    /// renamed into place, so readers never see a partial snapshot.
    pub fn save(&self, state: &GameState) -> Result<(), StoreError> {
        let json = state.to_json_pretty()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }

    /// Remove the stored game, if any.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
