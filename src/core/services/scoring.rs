//! Scoring engine - awards points to a receipt
//!
//! Seven independent rules each contribute an additive term; the score is
//! their sum. The engine parses every field it needs itself and fails
//! instead of treating an unparseable value as zero.

use chrono::{Datelike, NaiveTime, Timelike};
use thiserror::Error;

use crate::core::models::{Cents, CentsParseError, Receipt};

use super::fields::{parse_purchase_date, parse_purchase_time};

/// A field the engine needed but could not parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Total is not a usable amount
    #[error("cannot score total '{value}': {source}")]
    Total {
        /// The raw total
        value: String,
        /// Why parsing failed
        source: CentsParseError,
    },

    /// A qualifying item price is not a usable amount
    #[error("cannot score items[{index}].price '{value}': {source}")]
    ItemPrice {
        /// Position of the item
        index: usize,
        /// The raw price
        value: String,
        /// Why parsing failed
        source: CentsParseError,
    },

    /// Purchase date is not a calendar date
    #[error("cannot score purchase date '{0}'")]
    PurchaseDate(String),

    /// Purchase time is not a wall-clock time
    #[error("cannot score purchase time '{0}'")]
    PurchaseTime(String),
}

/// The scoring rules, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// One point per ASCII letter or digit in the retailer name
    RetailerName,
    /// 50 points when the total has no cents
    RoundDollarTotal,
    /// 25 points when the total is a multiple of 0.25
    QuarterMultipleTotal,
    /// 5 points per two items
    ItemPairs,
    /// `ceil(price * 0.2)` for items whose trimmed description length is a multiple of 3
    ItemDescription,
    /// 6 points when the purchase day is odd
    OddPurchaseDay,
    /// 10 points for purchases from 14:00 up to (not including) 16:00
    AfternoonPurchase,
}

impl Rule {
    /// Every rule, in evaluation order
    pub const ALL: [Self; 7] = [
        Self::RetailerName,
        Self::RoundDollarTotal,
        Self::QuarterMultipleTotal,
        Self::ItemPairs,
        Self::ItemDescription,
        Self::OddPurchaseDay,
        Self::AfternoonPurchase,
    ];

    /// Stable machine name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RetailerName => "retailer_name",
            Self::RoundDollarTotal => "round_dollar_total",
            Self::QuarterMultipleTotal => "quarter_multiple_total",
            Self::ItemPairs => "item_pairs",
            Self::ItemDescription => "item_description",
            Self::OddPurchaseDay => "odd_purchase_day",
            Self::AfternoonPurchase => "afternoon_purchase",
        }
    }

    /// One-line human description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::RetailerName => "1 point per alphanumeric character in the retailer name",
            Self::RoundDollarTotal => "50 points if the total is a round dollar amount",
            Self::QuarterMultipleTotal => "25 points if the total is a multiple of 0.25",
            Self::ItemPairs => "5 points for every two items",
            Self::ItemDescription => {
                "price * 0.2 rounded up for each description whose trimmed length is a multiple of 3"
            },
            Self::OddPurchaseDay => "6 points if the purchase day is odd",
            Self::AfternoonPurchase => "10 points if purchased between 14:00 and 16:00",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points one rule contributed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContribution {
    /// The rule
    pub rule: Rule,
    /// Points it awarded
    pub points: u64,
}

/// Full result of scoring a receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Sum of all contributions
    pub total: u64,
    /// One entry per rule, in [`Rule::ALL`] order
    pub contributions: Vec<RuleContribution>,
}

impl ScoreBreakdown {
    /// Points awarded by a single rule
    #[must_use]
    pub fn points_for(&self, rule: Rule) -> u64 {
        self.contributions
            .iter()
            .find(|c| c.rule == rule)
            .map_or(0, |c| c.points)
    }
}

/// Score a receipt
///
/// Call only on receipts that passed [`validate`](super::validate); an
/// unparseable field still fails with [`ScoreError`] rather than scoring zero.
pub fn score(receipt: &Receipt) -> Result<u64, ScoreError> {
    score_breakdown(receipt).map(|b| b.total)
}

/// Score a receipt and report what each rule contributed
pub fn score_breakdown(receipt: &Receipt) -> Result<ScoreBreakdown, ScoreError> {
    let total: Cents = receipt.total.parse().map_err(|source| ScoreError::Total {
        value: receipt.total.clone(),
        source,
    })?;
    let date = parse_purchase_date(&receipt.purchase_date)
        .ok_or_else(|| ScoreError::PurchaseDate(receipt.purchase_date.clone()))?;
    let time = parse_purchase_time(&receipt.purchase_time)
        .ok_or_else(|| ScoreError::PurchaseTime(receipt.purchase_time.clone()))?;

    let contributions = vec![
        RuleContribution {
            rule: Rule::RetailerName,
            points: retailer_points(&receipt.retailer),
        },
        RuleContribution {
            rule: Rule::RoundDollarTotal,
            points: if total.is_round_dollar() { 50 } else { 0 },
        },
        RuleContribution {
            rule: Rule::QuarterMultipleTotal,
            points: if total.is_multiple_of_quarter() { 25 } else { 0 },
        },
        RuleContribution {
            rule: Rule::ItemPairs,
            points: (receipt.items.len() as u64 / 2) * 5,
        },
        RuleContribution {
            rule: Rule::ItemDescription,
            points: description_points(receipt)?,
        },
        RuleContribution {
            rule: Rule::OddPurchaseDay,
            points: if date.day() % 2 == 1 { 6 } else { 0 },
        },
        RuleContribution {
            rule: Rule::AfternoonPurchase,
            points: if is_afternoon(time) { 10 } else { 0 },
        },
    ];

    let total = contributions.iter().map(|c| c.points).sum();
    Ok(ScoreBreakdown {
        total,
        contributions,
    })
}

fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn description_points(receipt: &Receipt) -> Result<u64, ScoreError> {
    let mut points = 0;
    for (index, item) in receipt.items.iter().enumerate() {
        if item.short_description.trim().chars().count() % 3 != 0 {
            continue;
        }
        let price: Cents = item.price.parse().map_err(|source| ScoreError::ItemPrice {
            index,
            value: item.price.clone(),
            source,
        })?;
        points += price.fifth_dollars_ceil();
    }
    Ok(points)
}

fn is_afternoon(time: NaiveTime) -> bool {
    // 14:00 through 15:59
    matches!(time.hour(), 14 | 15)
}
