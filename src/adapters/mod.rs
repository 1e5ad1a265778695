//! Adapter implementations for port traits
//!
//! This module contains concrete implementations of the core ports:
//!
//! - `memory` - In-process receipt store
//! - `ids` - Random UUID identifier generator

pub mod ids;
pub mod memory;

pub use ids::UuidGenerator;
pub use memory::InMemoryReceiptStore;
