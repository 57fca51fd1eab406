use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{ScratchStore, ScratchStoreError};
use crate::domain::ScratchPath;

/// Scratch store rooted at a directory on the local filesystem.
pub struct LocalScratchStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalScratchStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ScratchStoreError> {
        std::fs::create_dir_all(&base_path).map_err(ScratchStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| ScratchStoreError::WriteFailed(e.to_string()))?;
        Ok(Self { inner: Arc::new(fs) })
    }
}

fn read_error(path: &ScratchPath, e: object_store::Error) -> ScratchStoreError {
    match e {
        object_store::Error::NotFound { .. } => ScratchStoreError::NotFound(path.to_string()),
        other => ScratchStoreError::ReadFailed(other.to_string()),
    }
}

#[async_trait::async_trait]
impl ScratchStore for LocalScratchStore {
    async fn store(
        &self,
        path: &ScratchPath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, ScratchStoreError> {
        let store_path = StorePath::from(path.as_str());
        let mut upload = self
            .inner
            .put_multipart(&store_path)
            .await
            .map_err(|e| ScratchStoreError::WriteFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(ScratchStoreError::Io(e));
                }
            };
            total_bytes += bytes.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                let _ = upload.abort().await;
                return Err(ScratchStoreError::WriteFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| ScratchStoreError::WriteFailed(e.to_string()))?;

        Ok(total_bytes)
    }

    async fn fetch(&self, path: &ScratchPath) -> Result<Vec<u8>, ScratchStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| read_error(path, e))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| read_error(path, e))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, path: &ScratchPath) -> Result<(), ScratchStoreError> {
        let store_path = StorePath::from(path.as_str());
        self.inner.delete(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => ScratchStoreError::NotFound(path.to_string()),
            other => ScratchStoreError::DeleteFailed(other.to_string()),
        })
    }

}
