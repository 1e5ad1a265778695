//! Domain models for receipt-points
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Receipt`] - A submitted purchase receipt
//! - [`Item`] - One line item on a receipt
//! - [`ScoredReceipt`] - An accepted receipt with its id and points
//! - [`Cents`] - A currency amount in whole cents

mod cents;
mod receipt;

pub use cents::{Cents, CentsParseError};
pub use receipt::{Item, Receipt, ScoredReceipt};
