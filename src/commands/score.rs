//! Offline scoring and validation of receipt files

use std::fs;
use std::path::Path;

use anyhow::Context as _;

use receipt_points::api::parse_receipt;
use receipt_points::core::models::Receipt;
use receipt_points::core::services::{self, ProcessError};
use receipt_points::output::{OutputMode, ScoreReport, ValidationReport};

/// Score a receipt file and print the breakdown
pub fn score(file: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let receipt = load_receipt(file)?;

    let breakdown = services::validate(&receipt)
        .map_err(ProcessError::from)
        .and_then(|()| services::score_breakdown(&receipt).map_err(ProcessError::from));

    match breakdown {
        Ok(breakdown) => {
            ScoreReport::new(&receipt.retailer, &breakdown).render(mode);
            Ok(())
        },
        Err(e) => {
            ValidationReport::failed(&e).render(mode);
            Err(e.into())
        },
    }
}

/// Validate a receipt file without scoring it
pub fn validate(file: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let receipt = load_receipt(file)?;

    match services::validate(&receipt) {
        Ok(()) => {
            ValidationReport::valid().render(mode);
            Ok(())
        },
        Err(e) => {
            ValidationReport::rejected(&e).render(mode);
            Err(e.into())
        },
    }
}

fn load_receipt(file: &Path) -> anyhow::Result<Receipt> {
    let body =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    log::debug!("Loaded receipt from {}", file.display());
    Ok(parse_receipt(&body)?)
}
