//! Random (v4) UUID generation.

use uuid::Uuid;

/// Generate `count` random v4 UUIDs, hyphenated lowercase.
pub fn generate(count: u32) -> Vec<String> {
    (0..count).map(|_| Uuid::new_v4().to_string()).collect()
}
