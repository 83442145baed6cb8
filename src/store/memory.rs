//! In-process blob store.

use crate::errors::StoreError;
use crate::store::BlobStore;
use std::collections::HashMap;
use std::io;

/// Keeps blobs in a map. Reads and writes can be made to fail, which is how
/// the persistence failure paths are exercised.
#[derive(Debug, Default, Clone)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::LoadFailure {
                key: key.to_string(),
                message: "simulated read failure".to_string(),
            });
        }
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::PersistFailure {
                key: key.to_string(),
                source: io::Error::other("simulated write failure"),
            });
        }
        self.blobs.insert(key.to_string(), blob.to_string());
        self.writes += 1;
        Ok(())
    }
}
