//! JSON file persistence.
//!
//! Every content type lives in one pretty-printed JSON document under the
//! data directory. Documents are read whole, changed in memory and written
//! back whole.

mod collection;
mod repository;
pub mod seed;

pub use collection::*;
pub use repository::*;

use std::io;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::{Mutex, MutexGuard};

use crate::errors::AppError;

/// Make sure the data directory exists.
pub async fn init_data_dir(data_dir: &Path) -> Result<(), AppError> {
    tokio::fs::create_dir_all(data_dir).await?;
    Ok(())
}

/// A single JSON document on disk, seeded with defaults when missing.
///
/// Read-modify-write cycles on the same document are serialized through an
/// async mutex.
pub struct JsonFile<T> {
    path: PathBuf,
    seed: fn() -> T,
    lock: Mutex<()>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>, seed: fn() -> T) -> Self {
        Self {
            path: path.into(),
            seed,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Take exclusive access to the document.
    pub async fn lock(&self) -> FileGuard<'_, T> {
        FileGuard {
            file: self,
            _guard: self.lock.lock().await,
        }
    }

    /// Read the whole document.
    pub async fn read(&self) -> Result<T, AppError> {
        self.lock().await.load().await
    }

    /// Load, apply `f`, and write back. Nothing is written when `f` fails.
    pub async fn update<R, F>(&self, f: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut T) -> Result<R, AppError>,
    {
        let guard = self.lock().await;
        let mut value = guard.load().await?;
        let result = f(&mut value)?;
        guard.store(&value).await?;
        Ok(result)
    }

    /// Overwrite the document.
    pub async fn replace(&self, value: &T) -> Result<(), AppError> {
        self.lock().await.store(value).await
    }
}

/// Exclusive access to a [`JsonFile`] while held.
pub struct FileGuard<'a, T> {
    file: &'a JsonFile<T>,
    _guard: MutexGuard<'a, ()>,
}

impl<T> FileGuard<'_, T>
where
    T: Serialize + DeserializeOwned,
{
    /// Read the document, writing the seed first if the file does not exist.
    pub async fn load(&self) -> Result<T, AppError> {
        let path = self.file.path();
        match tokio::fs::read_to_string(path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                tracing::error!("Failed to parse {}: {}", path.display(), e);
                AppError::Storage(format!("Corrupt data file {}: {}", path.display(), e))
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("Seeding {} with default content", path.display());
                let value = (self.file.seed)();
                self.store(&value).await?;
                Ok(value)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write the whole document, pretty-printed, via a temp file and rename.
    pub async fn store(&self, value: &T) -> Result<(), AppError> {
        let path = self.file.path();
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, path).await?;

        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }
}
