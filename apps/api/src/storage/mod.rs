//! JSON file stores — one file per collection, guarded by an async mutex.
//!
//! Every mutation goes through [`JsonStore::update`], which holds the lock
//! across the whole load-modify-write cycle so concurrent requests against
//! the same store cannot interleave and lose writes. Writes land in a
//! sibling temp file first and are renamed into place.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::warn;

use crate::errors::AppError;

pub struct JsonStore<T> {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
    _marker: PhantomData<fn() -> T>,
}

// Manual impl: T itself does not need to be Clone.
impl<T> Clone for JsonStore<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            lock: Arc::clone(&self.lock),
            _marker: PhantomData,
        }
    }
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current contents. A missing or unreadable file loads as
    /// `T::default()` so first-run and corrupted stores both degrade to empty.
    pub async fn read(&self) -> Result<T, AppError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Atomic read-modify-write. The closure's return value is passed back
    /// to the caller after a successful persist.
    pub async fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R, AppError> {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;
        let out = f(&mut data);
        self.persist(&data).await?;
        Ok(out)
    }

    /// Writes an initial value only when the file does not exist yet.
    pub async fn seed_if_missing(&self, value: &T) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        if tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| AppError::Storage(format!("{}: {e}", self.path.display())))?
        {
            return Ok(());
        }
        self.persist(value).await
    }

    async fn load(&self) -> Result<T, AppError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(data) => Ok(data),
                Err(e) => {
                    warn!("Unreadable store {}: {e}; starting empty", self.path.display());
                    Ok(T::default())
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(AppError::Storage(format!(
                "{}: {e}",
                self.path.display()
            ))),
        }
    }

    async fn persist(&self, data: &T) -> Result<(), AppError> {
        let io_err = |e: std::io::Error| AppError::Storage(format!("{}: {e}", self.path.display()));

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let raw = serde_json::to_string_pretty(data)
            .map_err(|e| AppError::Storage(format!("serialize {}: {e}", self.path.display())))?;

        // Temp-then-rename keeps readers from ever seeing a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, raw).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        Ok(())
    }
}
