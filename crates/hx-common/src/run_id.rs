//! Identifiers for individual match runs.
//!
//! Every call through the API or CLI gets a fresh ULID so its log lines and
//! its response can be tied together. ULIDs sort by creation time.

use ulid::Ulid;

/// Fresh 26-character, time-ordered run id.
#[inline]
pub fn generate() -> String {
    Ulid::new().to_string()
}
