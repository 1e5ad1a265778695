//! Validate-then-score pipeline
//!
//! The single entry point callers use to turn a submitted receipt into points.

use thiserror::Error;

use crate::core::models::Receipt;

use super::scoring::{ScoreError, score};
use super::validator::{ValidationError, validate};

/// Why a receipt produced no score
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// The validator rejected the receipt
    #[error(transparent)]
    Rejected(#[from] ValidationError),

    /// The receipt was accepted but a field could not be parsed for scoring
    #[error(transparent)]
    Unscorable(#[from] ScoreError),
}

/// Validate a receipt and, if accepted, score it
pub fn process(receipt: &Receipt) -> Result<u64, ProcessError> {
    validate(receipt)?;
    Ok(score(receipt)?)
}
