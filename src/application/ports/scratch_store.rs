use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::ScratchPath;

/// Shared scratch area for the temporary audio artifacts of in-flight requests.
#[async_trait::async_trait]
pub trait ScratchStore: Send + Sync {
    async fn store(
        &self,
        path: &ScratchPath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, ScratchStoreError>;

    async fn fetch(&self, path: &ScratchPath) -> Result<Vec<u8>, ScratchStoreError>;

    async fn delete(&self, path: &ScratchPath) -> Result<(), ScratchStoreError>;

    /// Deletes `path`, treating an already missing object as success.
    async fn discard(&self, path: &ScratchPath) -> Result<(), ScratchStoreError> {
        match self.delete(path).await {
            Ok(()) | Err(ScratchStoreError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScratchStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
