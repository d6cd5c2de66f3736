use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures raised by the JSON file store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file does not exist.
    #[error("{file} not found")]
    Missing { file: String },
    /// The backing file exists but could not be read or written.
    #[error("failed to access {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    /// The backing file contents are not a valid JSON record array.
    #[error("{file} contains invalid JSON: {source}")]
    Malformed {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A whole-file JSON store for an ordered collection of records.
///
/// Every `load` re-reads the full backing file and every `save` rewrites it.
/// The file holds a single JSON array, pretty-printed, UTF-8 encoded with
/// non-ASCII characters written verbatim. Record order in the array is the
/// collection order.
pub struct JsonStore<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name used in error details, e.g. "students.json".
    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Reads and parses the full collection from the backing file.
    ///
    /// An absent file is `StoreError::Missing`, not an empty collection.
    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::Missing {
                    file: self.file_name(),
                });
            }
            Err(err) => {
                return Err(StoreError::Io {
                    file: self.file_name(),
                    source: err,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|err| StoreError::Malformed {
            file: self.file_name(),
            source: err,
        })
    }

    /// Serializes the full collection and overwrites the backing file.
    ///
    /// Parent directories are created if absent. The write is not atomic.
    pub async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|err| StoreError::Io {
                        file: self.file_name(),
                        source: err,
                    })?;
            }
        }

        let json =
            serde_json::to_string_pretty(records).map_err(|err| StoreError::Malformed {
                file: self.file_name(),
                source: err,
            })?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|err| StoreError::Io {
                file: self.file_name(),
                source: err,
            })
    }
}
