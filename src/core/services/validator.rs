//! Receipt validation
//!
//! Decides whether a submitted receipt is well-formed enough to be scored.
//! Checks run in field order and the first failure is reported.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::models::Receipt;

use super::fields::{parse_purchase_date, parse_purchase_time};

// `(?-u:...)` keeps `\w` and `\s` to their ASCII meaning.
static RETAILER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?-u:[\w\s&-])+$").expect("static pattern"));

static SHORT_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?-u:[\w\s-])+$").expect("static pattern"));

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("static pattern"));

/// Why a receipt was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Retailer name is empty or has characters outside letters, digits, `_`, whitespace, `-`, `&`
    #[error("invalid retailer name: '{0}'")]
    Retailer(String),

    /// Purchase date is not a real `YYYY-MM-DD` date
    #[error("invalid purchase date '{0}': expected YYYY-MM-DD")]
    PurchaseDate(String),

    /// Purchase time is not a 24-hour `HH:MM` time
    #[error("invalid purchase time '{0}': expected 24-hour HH:MM")]
    PurchaseTime(String),

    /// Receipt has no items
    #[error("invalid item list: a receipt needs at least one item")]
    NoItems,

    /// Item description is empty or has characters outside letters, digits, `_`, whitespace, `-`
    #[error("invalid short description for items[{index}]: '{value}'")]
    ShortDescription {
        /// Position of the item
        index: usize,
        /// The rejected description
        value: String,
    },

    /// Item price is not `<digits>.<two digits>`
    #[error("invalid price format for items[{index}]: '{value}'")]
    ItemPrice {
        /// Position of the item
        index: usize,
        /// The rejected price
        value: String,
    },

    /// Total is not `<digits>.<two digits>`
    #[error("invalid total format: '{0}'")]
    Total(String),
}

impl ValidationError {
    /// Wire name of the offending field, e.g. `items[2].price`
    #[must_use]
    pub fn field(&self) -> String {
        match self {
            Self::Retailer(_) => "retailer".to_string(),
            Self::PurchaseDate(_) => "purchaseDate".to_string(),
            Self::PurchaseTime(_) => "purchaseTime".to_string(),
            Self::NoItems => "items".to_string(),
            Self::ShortDescription { index, .. } => format!("items[{index}].shortDescription"),
            Self::ItemPrice { index, .. } => format!("items[{index}].price"),
            Self::Total(_) => "total".to_string(),
        }
    }
}

/// Validate a receipt
///
/// Pure; the result depends only on `receipt`.
pub fn validate(receipt: &Receipt) -> Result<(), ValidationError> {
    if !RETAILER.is_match(&receipt.retailer) {
        return Err(ValidationError::Retailer(receipt.retailer.clone()));
    }

    if parse_purchase_date(&receipt.purchase_date).is_none() {
        return Err(ValidationError::PurchaseDate(receipt.purchase_date.clone()));
    }

    if parse_purchase_time(&receipt.purchase_time).is_none() {
        return Err(ValidationError::PurchaseTime(receipt.purchase_time.clone()));
    }

    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    for (index, item) in receipt.items.iter().enumerate() {
        if !SHORT_DESCRIPTION.is_match(&item.short_description) {
            return Err(ValidationError::ShortDescription {
                index,
                value: item.short_description.clone(),
            });
        }
        if !AMOUNT.is_match(&item.price) {
            return Err(ValidationError::ItemPrice {
                index,
                value: item.price.clone(),
            });
        }
    }

    if !AMOUNT.is_match(&receipt.total) {
        return Err(ValidationError::Total(receipt.total.clone()));
    }

    Ok(())
}
