//! Filesystem blob store.
//!
//! Blobs are addressed by `/`-separated keys made of `[A-Za-z0-9._-]` segments and stored
//! as plain files under the store root. Keys are validated before touching the filesystem
//! so a key can never escape the root.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokio::{fs, io::AsyncWriteExt};

use crate::server::error::storage::StorageError;

#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root directory if it does not exist yet.
    pub async fn prepare(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Opens a writer for a new blob.
    ///
    /// Missing parent directories are created. Fails if a blob already exists under `key`.
    ///
    /// # Returns
    /// - `Ok(BlobWriter)` - Writer positioned at the start of an empty file
    /// - `Err(StorageError::InvalidKey)` - Key failed validation
    /// - `Err(StorageError::Io)` - Directory or file creation failed
    pub async fn writer(&self, key: &str) -> Result<BlobWriter, StorageError> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        Ok(BlobWriter {
            path,
            file,
            written: 0,
        })
    }

    /// Stores `bytes` under `key` in one call.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bytes stored
    pub async fn put(&self, key: &str, bytes: &[u8]) -> Result<u64, StorageError> {
        let mut writer = self.writer(key).await?;
        if let Err(err) = writer.write(bytes).await {
            writer.abort().await;
            return Err(err);
        }
        writer.finish().await
    }

    /// Reads the full contents of a blob.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - Blob contents
    /// - `Err(StorageError::NotFound)` - Nothing stored under `key`
    pub async fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(key)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a blob.
    ///
    /// # Returns
    /// - `Ok(())` - Blob removed
    /// - `Err(StorageError::NotFound)` - Nothing stored under `key`
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let path = self.resolve(key)?;
        Ok(fs::try_exists(&path).await?)
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;

        let mut path = self.root.clone();
        for segment in key.split('/') {
            path.push(segment);
        }
        Ok(path)
    }
}

/// Checks that `key` is a non-empty sequence of safe `/`-separated segments.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key.split('/').all(|segment| {
            !segment.is_empty()
                && segment != "."
                && segment != ".."
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        });

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Streaming writer for a single new blob.
///
/// Call `finish` once all chunks are written, or `abort` to remove the partial file.
pub struct BlobWriter {
    path: PathBuf,
    file: fs::File,
    written: u64,
}

impl BlobWriter {
    pub async fn write(&mut self, chunk: &[u8]) -> Result<(), StorageError> {
        self.file.write_all(chunk).await?;
        self.written += chunk.len() as u64;
        Ok(())
    }

    /// Bytes written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flushes the blob to disk and returns its size. The file is removed if flushing fails.
    pub async fn finish(mut self) -> Result<u64, StorageError> {
        let synced = async {
            self.file.flush().await?;
            self.file.sync_all().await
        }
        .await;

        if let Err(err) = synced {
            self.abort().await;
            return Err(err.into());
        }

        Ok(self.written)
    }

    /// Discards the partial blob.
    pub async fn abort(self) {
        let BlobWriter { path, file, .. } = self;
        drop(file);

        if let Err(err) = fs::remove_file(&path).await {
            if err.kind() != ErrorKind::NotFound {
                tracing::warn!("Failed to remove partial blob {}: {}", path.display(), err);
            }
        }
    }
}
