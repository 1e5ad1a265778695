//! Business logic services
//!
//! Pure functions over domain models. Nothing here performs I/O, holds state,
//! or logs.
//!
//! - [`validator`] - Decide whether a receipt is well-formed
//! - [`scoring`] - Award points to a receipt
//! - [`pipeline`] - Validate, then score

mod fields;
pub mod pipeline;
pub mod scoring;
pub mod validator;

pub use fields::{parse_purchase_date, parse_purchase_time};
pub use pipeline::{ProcessError, process};
pub use scoring::{Rule, RuleContribution, ScoreBreakdown, ScoreError, score, score_breakdown};
pub use validator::{ValidationError, validate};
