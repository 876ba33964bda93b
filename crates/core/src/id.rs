//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque strings supplied by callers (catalog codes, customer
//! numbers) or produced by the pipeline (order ids). Construction never fails;
//! blank identifiers are representable so that the validation stages can
//! reject them with a precise error.

use serde::{Deserialize, Serialize};

/// Identifier of a product (catalog code, e.g. `ITEM001`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a customer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

/// Identifier of a finalized order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// `true` when the identifier is empty or whitespace only.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_newtype!(ProductId);
impl_string_newtype!(CustomerId);
impl_string_newtype!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_ignores_whitespace() {
        assert!(ProductId::new("").is_blank());
        assert!(ProductId::new("   ").is_blank());
        assert!(!ProductId::new("ITEM001").is_blank());
    }

    #[test]
    fn display_is_the_raw_value() {
        let id = OrderId::new("ORD1700000000");
        assert_eq!(id.to_string(), "ORD1700000000");
        assert_eq!(id.as_str(), "ORD1700000000");
    }

    #[test]
    fn serializes_transparently() {
        let id = CustomerId::from("CUST100");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"CUST100\"");

        let back: CustomerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
