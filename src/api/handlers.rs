//! Pure API handlers
//!
//! These handlers contain the request logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use std::sync::Arc;

use crate::adapters::{InMemoryReceiptStore, UuidGenerator};
use crate::core::models::{Receipt, ScoredReceipt};
use crate::core::ports::{IdGenerator, ReceiptStore};
use crate::core::services::process;

use super::error::ApiError;
use super::types::{PointsData, ProcessData};

/// Request handlers bound to a store and an id source
#[derive(Clone)]
pub struct ReceiptApi {
    store: Arc<dyn ReceiptStore>,
    ids: Arc<dyn IdGenerator>,
}

impl std::fmt::Debug for ReceiptApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReceiptApi").finish_non_exhaustive()
    }
}

impl Default for ReceiptApi {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryReceiptStore::new()), Arc::new(UuidGenerator))
    }
}

impl ReceiptApi {
    /// Create handlers over the given collaborators
    #[must_use]
    pub fn new(store: Arc<dyn ReceiptStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Validate, score and store a receipt
    ///
    /// Nothing is stored unless the receipt is both valid and scorable.
    pub fn process_receipt(&self, receipt: &Receipt) -> Result<ProcessData, ApiError> {
        let points = process(receipt)?;

        let id = self.ids.generate();
        let record = ScoredReceipt::new(id.clone(), receipt.clone(), points);
        self.store.insert(record).map_err(|e| ApiError::internal(e.to_string()))?;

        Ok(ProcessData { id })
    }

    /// Look up the points for a processed receipt
    pub fn get_points(&self, id: &str) -> Result<PointsData, ApiError> {
        match self.store.get(id) {
            Ok(Some(record)) => Ok(PointsData {
                points: record.points,
            }),
            Ok(None) => Err(ApiError::not_found(format!("No receipt found for id '{id}'"))),
            Err(e) => Err(ApiError::internal(e.to_string())),
        }
    }
}

/// Bind a JSON request body to a [`Receipt`]
///
/// Unknown fields are ignored; a missing field or a wrong JSON type is a
/// malformed payload.
pub fn parse_receipt(body: &str) -> Result<Receipt, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::malformed(format!("Invalid receipt JSON: {e}")))
}
