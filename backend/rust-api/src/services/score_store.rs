use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::metrics::track_score_append;
use crate::utils::retry::{retry_async_when, RetryConfig};
use crate::utils::time::iso_utc_now;

pub const TIMESTAMP_FIELD: &str = "timestamp";

pub type ScoreEntry = Map<String, Value>;

#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("score file I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("score file {path} is not a JSON array: {reason}")]
    Corrupt { path: PathBuf, reason: String },
    #[error("score entries must be JSON objects")]
    NotAnObject,
    #[error("failed to serialize score entries: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ScoreStoreError {
    /// Only I/O failures are worth retrying; the rest fail the same way twice.
    pub fn is_transient(&self) -> bool {
        matches!(self, ScoreStoreError::Io { .. })
    }
}

/// Append-only log of score entries persisted as one JSON array.
///
/// Every read and write goes through one async mutex, and writes replace the
/// file via a temp file and rename, so concurrent appends never lose or
/// duplicate entries and readers never see a half-written array.
pub struct ScoreStore {
    path: PathBuf,
    lock: Mutex<()>,
    tolerant_retry: RetryConfig,
}

impl ScoreStore {
    /// Opens the store, creating the file as `[]` when it does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, ScoreStoreError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| io_error(parent, source))?;
        }

        let exists = tokio::fs::try_exists(&path)
            .await
            .map_err(|source| io_error(&path, source))?;
        if !exists {
            write_entries(&path, &[]).await?;
            tracing::info!("Initialized empty score file at {}", path.display());
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
            tolerant_retry: RetryConfig::default(),
        })
    }

    pub fn with_tolerant_retry(mut self, retry: RetryConfig) -> Self {
        self.tolerant_retry = retry;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every persisted entry, oldest first.
    pub async fn load_all(&self) -> Result<Vec<Value>, ScoreStoreError> {
        let _guard = self.lock.lock().await;
        read_entries(&self.path).await
    }

    /// Appends `entry` with a server-assigned UTC timestamp and returns the
    /// stored object. Any `timestamp` the caller supplied is overwritten.
    pub async fn append<T: Serialize + ?Sized>(
        &self,
        entry: &T,
    ) -> Result<ScoreEntry, ScoreStoreError> {
        let mut entry = match serde_json::to_value(entry)? {
            Value::Object(map) => map,
            _ => return Err(ScoreStoreError::NotAnObject),
        };

        let _guard = self.lock.lock().await;
        entry.insert(TIMESTAMP_FIELD.to_string(), Value::String(iso_utc_now()));

        let mut entries = read_entries(&self.path).await?;
        entries.push(Value::Object(entry.clone()));
        write_entries(&self.path, &entries).await?;

        tracing::debug!(
            "Appended score entry #{} to {}",
            entries.len(),
            self.path.display()
        );
        Ok(entry)
    }

    /// Strict append: failures are counted and returned to the caller.
    pub async fn append_strict<T: Serialize + ?Sized>(
        &self,
        entry: &T,
    ) -> Result<ScoreEntry, ScoreStoreError> {
        track_score_append("strict", self.append(entry)).await
    }

    /// Tolerant append: transient failures are retried, and a final failure is
    /// logged and counted instead of being returned. Reports whether the entry
    /// was stored.
    pub async fn append_tolerant<T: Serialize + ?Sized>(&self, entry: &T) -> bool {
        let result = track_score_append(
            "tolerant",
            retry_async_when(
                self.tolerant_retry.clone(),
                || self.append(entry),
                ScoreStoreError::is_transient,
            ),
        )
        .await;

        match result {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Dropping score entry, append failed: {}", e);
                false
            }
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ScoreStoreError {
    ScoreStoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

async fn read_entries(path: &Path) -> Result<Vec<Value>, ScoreStoreError> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Score file {} disappeared, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(source) => return Err(io_error(path, source)),
    };

    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(&raw).map_err(|e| ScoreStoreError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

async fn write_entries(path: &Path, entries: &[Value]) -> Result<(), ScoreStoreError> {
    let body = serde_json::to_vec_pretty(entries)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scores.json".to_string());
    let tmp_path = path.with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

    let written = async {
        let mut file = tokio::fs::File::create(&tmp_path).await?;
        file.write_all(&body).await?;
        file.sync_all().await?;
        tokio::fs::rename(&tmp_path, path).await
    }
    .await;

    if let Err(source) = written {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(io_error(path, source));
    }
    Ok(())
}
