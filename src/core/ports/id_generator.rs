//! Identifier generator port

/// Source of opaque receipt identifiers
///
/// Every call must return a fresh id; collisions are treated as a store error.
pub trait IdGenerator: Send + Sync {
    /// Produce a new identifier
    fn generate(&self) -> String;
}
