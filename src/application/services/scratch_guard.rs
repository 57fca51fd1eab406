use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream;

use crate::application::ports::{ScratchStore, ScratchStoreError};
use crate::domain::ScratchPath;

/// Owns one temporary object in the scratch store and removes it when
/// released. If the guard is dropped without `release` (early return, panic,
/// cancelled request) the removal is spawned onto the current runtime.
pub struct ScratchGuard {
    store: Arc<dyn ScratchStore>,
    path: ScratchPath,
    armed: bool,
}

impl ScratchGuard {
    pub async fn acquire(
        store: Arc<dyn ScratchStore>,
        path: ScratchPath,
        data: Bytes,
    ) -> Result<Self, ScratchStoreError> {
        let byte_stream = stream::iter(vec![Ok::<Bytes, io::Error>(data)]).boxed();

        let guard = Self {
            store,
            path,
            armed: true,
        };

        // The guard exists before the write so a partially written object is
        // still removed when the write fails.
        let size = guard.store.store(guard.path(), byte_stream).await?;
        tracing::debug!(path = %guard.path(), bytes = size, "Scratch object written");

        Ok(guard)
    }

    pub fn path(&self) -> &ScratchPath {
        &self.path
    }

    pub async fn release(mut self) -> Result<(), ScratchStoreError> {
        self.armed = false;
        self.store.discard(&self.path).await?;
        tracing::debug!(path = %self.path, "Scratch object removed");
        Ok(())
    }
}

impl Drop for ScratchGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let path = self.path.clone();

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let store = Arc::clone(&self.store);
                handle.spawn(async move {
                    if let Err(e) = store.discard(&path).await {
                        tracing::warn!(path = %path, error = %e, "Failed to remove scratch object");
                    }
                });
            }
            Err(_) => {
                tracing::warn!(path = %path, "No runtime available, scratch object left behind");
            }
        }
    }
}
