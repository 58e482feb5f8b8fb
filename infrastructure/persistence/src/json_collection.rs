use std::ffi::OsString;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};
use tokio::{fs, sync::Mutex};
use tracing::debug;

use crate::storage::StorageError;

/// One record collection persisted as a pretty-printed JSON array.
///
/// Nothing is cached: every call re-reads the file. All calls on the same
/// instance are serialized by an internal lock, so a `mutate` cycle can
/// never interleave with another one and lose its update. Share one
/// instance per file.
pub struct JsonCollection<T> {
    file_path: PathBuf,
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
            lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    /// Reads the whole collection. A missing file is an empty collection.
    pub async fn load(&self) -> Result<Vec<T>, StorageError> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    /// Load-mutate-store cycle. When `f` fails nothing is written.
    pub async fn mutate<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, E>,
        E: From<StorageError>,
    {
        let _guard = self.lock.lock().await;
        let mut records = self.read().await?;
        let outcome = f(&mut records)?;
        self.write(&records).await?;
        Ok(outcome)
    }

    async fn read(&self) -> Result<Vec<T>, StorageError> {
        match fs::read(&self.file_path).await {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
                    path: self.file_path.clone(),
                    source,
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(StorageError::Io {
                path: self.file_path.clone(),
                source,
            }),
        }
    }

    // Written next to the target and renamed over it, so readers only ever
    // see a complete collection.
    async fn write(&self, records: &[T]) -> Result<(), StorageError> {
        let data = serde_json::to_vec_pretty(records)?;
        let tmp_path = self.tmp_path();
        let io_err = |source: std::io::Error| StorageError::Io {
            path: self.file_path.clone(),
            source,
        };

        fs::write(&tmp_path, &data).await.map_err(io_err)?;
        fs::rename(&tmp_path, &self.file_path)
            .await
            .map_err(io_err)?;

        debug!(
            path = %self.file_path.display(),
            records = records.len(),
            "collection written"
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("collection"));
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }
}
