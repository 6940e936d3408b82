//! Identifier generation for boards, columns and tasks.
//!
//! Identifiers are opaque strings. They only need to be unique in practice
//! for the lifetime of a data file, not cryptographically unguessable.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

const RANDOM_DIGITS: usize = 11;

/// Source of fresh entity identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Millisecond timestamp followed by random digits, both base 36.
///
/// Ids sort roughly by creation time, which keeps data files readable.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIdGenerator;

impl IdGenerator for TimestampIdGenerator {
    fn generate(&self) -> String {
        let millis = Utc::now().timestamp_millis().max(0) as u128;
        let random = to_base36(Uuid::new_v4().as_u128());
        let suffix: String = random.chars().take(RANDOM_DIGITS).collect();
        format!("{}{}", to_base36(millis), suffix)
    }
}

/// Deterministic `prefix-N` ids, mostly for tests and fixtures.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
