//! In-memory receipt store
//!
//! Implements the `ReceiptStore` port with a lock-guarded map. Records live
//! for the life of the process.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::models::ScoredReceipt;
use crate::core::ports::ReceiptStore;

/// Receipt store backed by a `RwLock<HashMap>`
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    records: RwLock<HashMap<String, ScoredReceipt>>,
}

impl InMemoryReceiptStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> anyhow::Result<RwLockReadGuard<'_, HashMap<String, ScoredReceipt>>> {
        self.records.read().map_err(|_| anyhow::anyhow!("receipt store lock poisoned"))
    }

    fn write(&self) -> anyhow::Result<RwLockWriteGuard<'_, HashMap<String, ScoredReceipt>>> {
        self.records.write().map_err(|_| anyhow::anyhow!("receipt store lock poisoned"))
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn insert(&self, record: ScoredReceipt) -> anyhow::Result<()> {
        let mut records = self.write()?;
        match records.entry(record.id.clone()) {
            Entry::Occupied(_) => anyhow::bail!("receipt id '{}' already exists", record.id),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            },
        }
    }

    fn get(&self, id: &str) -> anyhow::Result<Option<ScoredReceipt>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn len(&self) -> anyhow::Result<usize> {
        Ok(self.read()?.len())
    }
}
