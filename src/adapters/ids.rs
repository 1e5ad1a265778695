//! UUID-based identifier generator

use uuid::Uuid;

use crate::core::ports::IdGenerator;

/// Generates random (v4) UUIDs in hyphenated form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
