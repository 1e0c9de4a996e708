//! In-memory resume store.
//!
//! Uploaded file bytes go to the upload directory on disk; metadata lives in
//! process memory and does not survive a restart. The store is an explicit
//! object carried in `AppState` so ranking code can be exercised against a
//! plain snapshot instead of ambient global state.

use anyhow::{Context, Result};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

/// Metadata for one uploaded resume. The `file_path` is an opaque handle for
/// the text extractor; nothing else interprets it.
#[derive(Debug, Clone, Serialize)]
pub struct StoredResume {
    pub id: Uuid,
    pub filename: String,
    pub file_path: PathBuf,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ResumeStore {
    upload_dir: PathBuf,
    entries: Arc<RwLock<Vec<StoredResume>>>,
}

impl ResumeStore {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Writes the file under a fresh UUID (original extension preserved) and
    /// records its metadata.
    pub async fn add(&self, data: Bytes, filename: &str) -> Result<StoredResume> {
        let id = Uuid::new_v4();
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let file_path = self.upload_dir.join(format!("{id}.{extension}"));

        tokio::fs::write(&file_path, &data)
            .await
            .with_context(|| format!("failed to write upload to {}", file_path.display()))?;

        let stored = StoredResume {
            id,
            filename: filename.to_string(),
            file_path,
            uploaded_at: Utc::now(),
        };

        self.entries.write().await.push(stored.clone());
        Ok(stored)
    }

    /// Returns a point-in-time copy of all entries. Ranking consumes this
    /// snapshot; uploads or clears that race with an in-flight ranking pass
    /// do not affect it.
    pub async fn snapshot(&self) -> Vec<StoredResume> {
        self.entries.read().await.clone()
    }

    /// Removes all stored files and entries, returning how many were cleared.
    pub async fn clear(&self) -> Result<usize> {
        let mut entries = self.entries.write().await;
        for entry in entries.iter() {
            if let Err(e) = tokio::fs::remove_file(&entry.file_path).await {
                // The entry is dropped either way; a leftover file is harmless.
                warn!(
                    "failed to remove {}: {e}",
                    entry.file_path.display()
                );
            }
        }
        let removed = entries.len();
        entries.clear();
        Ok(removed)
    }
}
