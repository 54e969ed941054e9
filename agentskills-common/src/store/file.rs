use super::Store;
use serde::{de::DeserializeOwned, Serialize};
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("file store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file store serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

/// A single-slot [`Store`] persisted as a JSON file.
///
/// The file holds one serialized value or does not exist. Content that fails
/// to deserialize reads as an absent value, never as an error.
pub struct FileStore<V> {
    path: PathBuf,
    _value: PhantomData<fn() -> V>,
}

impl<V> FileStore<V> {
    /// Create a new [`FileStore`] backed by the file at the given path.
    ///
    /// The file and its parent directories are created on the first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf(), _value: PhantomData }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    async fn remove(&self) -> Result<(), Error> {
        match tokio::fs::remove_file(&self.path).await {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

impl<V> Clone for FileStore<V> {
    fn clone(&self) -> Self {
        Self::new(&self.path)
    }
}

impl<V> Store<(), V> for FileStore<V>
where
    V: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    type Error = Error;

    async fn get(&self, _key: &()) -> Result<Option<V>, Self::Error> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "ignoring unreadable stored value");
                Ok(None)
            }
        }
    }
    async fn set(&self, _key: (), value: V) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, serde_json::to_string_pretty(&value)?).await?;
        Ok(())
    }
    async fn del(&self, _key: &()) -> Result<(), Self::Error> {
        self.remove().await
    }
    async fn clear(&self) -> Result<(), Self::Error> {
        self.remove().await
    }
}
