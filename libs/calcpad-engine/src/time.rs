//! Clock abstraction for history timestamps
//!
//! The ledger stamps each entry through a `TimeProvider` so tests can pin
//! timestamps instead of reading the wall clock.

/// Time provider trait for history timestamps
pub trait TimeProvider: Send + Sync {
    /// Current timestamp in milliseconds since Unix epoch
    fn now_millis(&self) -> i64;
}

/// Wall-clock time provider
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Fixed time provider for deterministic tests
#[derive(Clone, Copy, Debug)]
pub struct FixedTimeProvider {
    timestamp_ms: i64,
}

impl FixedTimeProvider {
    /// Create a new fixed time provider with the given timestamp
    pub fn new(timestamp_ms: i64) -> Self {
        Self { timestamp_ms }
    }
}

impl TimeProvider for FixedTimeProvider {
    fn now_millis(&self) -> i64 {
        self.timestamp_ms
    }
}
