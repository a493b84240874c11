//! In-memory object store for local runs and tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pinfluencer_core::image::{ImageError, ObjectStore, PutObject};

/// Keeps every stored object in a map keyed by storage key.
///
/// Can be switched to fail every put, to exercise storage errors.
#[derive(Debug, Clone, Default)]
pub struct InMemoryObjectStore {
    objects: Arc<RwLock<HashMap<String, PutObject>>>,
    puts: Arc<RwLock<Vec<String>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent put fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn get(&self, key: &str) -> Option<PutObject> {
        self.objects.read().await.get(key).cloned()
    }

    /// Keys of every successful put, in order.
    pub async fn keys(&self) -> Vec<String> {
        self.puts.read().await.clone()
    }

    pub async fn put_count(&self) -> usize {
        self.puts.read().await.len()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn put(&self, object: PutObject) -> Result<(), ImageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ImageError::Storage(format!(
                "bucket {} is unavailable",
                object.bucket
            )));
        }

        self.puts.write().await.push(object.key.clone());
        self.objects.write().await.insert(object.key.clone(), object);
        Ok(())
    }
}
