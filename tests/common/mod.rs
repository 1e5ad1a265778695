//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - Receipt builders and published example receipts
//! - `mocks.rs` - Mock port implementations

pub mod fixtures;
