//! API request and response types
//!
//! Success bodies are bare objects (`{"id": ...}`, `{"points": ...}`);
//! failures are wrapped in [`ErrorBody`].

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiErrorData};

/// Response for a processed receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessData {
    /// Identifier assigned to the receipt
    pub id: String,
}

/// Response for a points lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsData {
    /// Points awarded to the receipt
    pub points: u64,
}

/// Error response envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error details
    pub error: ApiErrorData,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self { error: err.into() }
    }
}
