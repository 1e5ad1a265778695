//! Receipt store port
//!
//! Defines the interface for keeping scored receipts and looking them up by id.

use crate::core::models::ScoredReceipt;

/// Storage for scored receipts, keyed by id
///
/// Implementations must be safe to share across request threads. A lookup
/// returns either a whole stored record or nothing, never a partial write.
pub trait ReceiptStore: Send + Sync {
    /// Store a scored receipt
    ///
    /// Fails if a record with the same id already exists; ids are never reused
    /// and existing records are never overwritten.
    fn insert(&self, record: ScoredReceipt) -> anyhow::Result<()>;

    /// Look up a scored receipt by id
    fn get(&self, id: &str) -> anyhow::Result<Option<ScoredReceipt>>;

    /// Number of stored receipts
    fn len(&self) -> anyhow::Result<usize>;

    /// Whether the store holds no receipts
    fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.len()? == 0)
    }
}
