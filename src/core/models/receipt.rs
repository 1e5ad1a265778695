//! Receipt domain types
//!
//! Field values are kept exactly as submitted; the validator and the scoring
//! engine each parse what they need.

use serde::{Deserialize, Serialize};

/// A submitted purchase receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`
    pub purchase_date: String,
    /// Purchase time, 24-hour `HH:MM`
    pub purchase_time: String,
    /// Purchased line items, in receipt order
    pub items: Vec<Item>,
    /// Total amount paid, `<digits>.<two digits>`
    pub total: String,
}

/// One purchased product on a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Short product description
    pub short_description: String,
    /// Item price, `<digits>.<two digits>`
    pub price: String,
}

impl Item {
    /// Create a new line item
    #[must_use]
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A receipt that passed validation and was scored
///
/// Created exactly once, when the receipt is accepted. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredReceipt {
    /// Identifier assigned at acceptance
    pub id: String,
    /// The receipt as submitted
    pub receipt: Receipt,
    /// Points awarded
    pub points: u64,
}

impl ScoredReceipt {
    /// Create a new scored receipt
    #[must_use]
    pub const fn new(id: String, receipt: Receipt, points: u64) -> Self {
        Self {
            id,
            receipt,
            points,
        }
    }
}
