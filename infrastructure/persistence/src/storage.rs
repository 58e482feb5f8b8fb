use std::path::PathBuf;

use business::domain::errors::RepositoryError;
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.io_error: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("storage.corrupt_collection: {path}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage.encode_error")]
    Encode(#[from] serde_json::Error),
}

impl From<StorageError> for RepositoryError {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, source = ?std::error::Error::source(&err), "collection storage failed");
        RepositoryError::Persistence
    }
}

/// Location of the collection files
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub products_file: String,
    pub carts_file: String,
}

impl StorageConfig {
    /// Creates a storage configuration with the default file names
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            products_file: "products.json".to_string(),
            carts_file: "carts.json".to_string(),
        }
    }

    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(&self.products_file)
    }

    pub fn carts_path(&self) -> PathBuf {
        self.data_dir.join(&self.carts_file)
    }
}

/// Makes sure the data directory exists before the first write
pub async fn prepare_data_dir(config: &StorageConfig) -> Result<(), StorageError> {
    fs::create_dir_all(&config.data_dir)
        .await
        .map_err(|source| StorageError::Io {
            path: config.data_dir.clone(),
            source,
        })
}
