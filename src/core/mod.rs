//! Core domain logic for receipt-points
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Receipt, Item, ScoredReceipt, Cents)
//! - `services/` - Validation and scoring
//! - `ports/` - Trait definitions for storage and id generation

pub mod models;
pub mod ports;
pub mod services;
