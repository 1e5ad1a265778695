//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the pure validation and scoring
//! core and the collaborators around it (storage, identifier generation).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The API layer depends only on these traits, never on concrete
//! implementations, so tests can swap in mocks and a durable store can be
//! added without touching request handling.

mod id_generator;
mod receipt_store;

pub use id_generator::IdGenerator;
pub use receipt_store::ReceiptStore;
