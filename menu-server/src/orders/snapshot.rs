//! Order history snapshot persistence
//!
//! The entire history is serialized to one JSON file and rewritten in full
//! on every successful order. Writes go through a tmp file + rename so a
//! crash mid-write never leaves a truncated snapshot behind.

use std::path::PathBuf;

use thiserror::Error;

use shared::models::Order;

#[derive(Debug, Error)]
pub enum SnapshotError {
    /// No snapshot file yet - the normal first-run condition
    #[error("Snapshot file not found")]
    NotFound,

    /// File exists but does not parse as an order history
    #[error("Snapshot file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializes/deserializes the full order history to/from a single file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Write the full history, overwriting any prior snapshot.
    ///
    /// Atomic: writes to a tmp file then renames over the target.
    pub async fn save(&self, history: &[Order]) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec(history)?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &bytes).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        tracing::debug!(orders = history.len(), path = %self.path.display(), "Order snapshot written");
        Ok(())
    }

    /// Load the full history from the snapshot file.
    pub async fn load(&self) -> Result<Vec<Order>, SnapshotError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SnapshotError::NotFound);
            }
            Err(e) => return Err(e.into()),
        };

        let history = serde_json::from_slice(&bytes)?;
        Ok(history)
    }
}
