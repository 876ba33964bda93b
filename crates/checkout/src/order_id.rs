use chrono::{DateTime, Utc};

use orderflow_core::OrderId;

/// Produces identifiers for finalized orders.
pub trait OrderIdGenerator {
    fn generate(&self) -> OrderId;
}

impl<F> OrderIdGenerator for F
where
    F: Fn() -> OrderId,
{
    fn generate(&self) -> OrderId {
        self()
    }
}

/// `<prefix><unix seconds>`, e.g. `ORD1747958400`.
///
/// Two orders finalized within the same second get the same id; only suitable
/// for single-threaded, low-volume use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampOrderIdGenerator {
    prefix: String,
}

impl TimestampOrderIdGenerator {
    pub const DEFAULT_PREFIX: &'static str = "ORD";

    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Deterministic variant of `generate` for a given instant.
    pub fn generate_at(&self, at: DateTime<Utc>) -> OrderId {
        OrderId::new(format!("{}{}", self.prefix, at.timestamp()))
    }
}

impl Default for TimestampOrderIdGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX)
    }
}

impl OrderIdGenerator for TimestampOrderIdGenerator {
    fn generate(&self) -> OrderId {
        self.generate_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::Cell;

    #[test]
    fn timestamp_ids_use_prefix_and_unix_seconds() {
        let at = Utc.with_ymd_and_hms(2025, 5, 23, 0, 0, 0).unwrap();
        let id = TimestampOrderIdGenerator::default().generate_at(at);
        assert_eq!(id.as_str(), "ORD1747958400");
    }

    #[test]
    fn custom_prefix() {
        let generator = TimestampOrderIdGenerator::new("SHOP-");
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        assert_eq!(generator.prefix(), "SHOP-");
        assert_eq!(generator.generate_at(at).as_str(), "SHOP-1700000000");
    }

    #[test]
    fn generate_uses_current_time() {
        let before = Utc::now().timestamp();
        let id = TimestampOrderIdGenerator::default().generate();
        let after = Utc::now().timestamp();

        let seconds: i64 = id.as_str().trim_start_matches("ORD").parse().unwrap();
        assert!(before <= seconds && seconds <= after);
    }

    #[test]
    fn closures_are_generators() {
        let counter = Cell::new(0u32);
        let generator = || {
            counter.set(counter.get() + 1);
            OrderId::new(format!("TEST-{}", counter.get()))
        };
        assert_eq!(generator.generate().as_str(), "TEST-1");
        assert_eq!(generator.generate().as_str(), "TEST-2");
    }
}
