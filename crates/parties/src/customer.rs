use serde::{Deserialize, Serialize};

use orderflow_core::{CustomerId, Entity};

/// Customer placing an order.
///
/// Construction does not validate; `OrderValidator` rejects customers with a
/// blank id or email before anything else happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
}

impl Customer {
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Address used for order notifications.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_contact_details() {
        let customer = Customer::new("CUST100", "Ichiro Tanaka", "ichiro.tanaka@example.com");
        assert_eq!(customer.id().as_str(), "CUST100");
        assert_eq!(customer.name(), "Ichiro Tanaka");
        assert_eq!(customer.email(), "ichiro.tanaka@example.com");
        assert!(customer.has_email());
    }

    #[test]
    fn blank_email_is_representable() {
        let customer = Customer::new("CUST100", "Ichiro Tanaka", "  ");
        assert!(!customer.has_email());
    }

    #[test]
    fn deserializes_from_json() {
        let customer: Customer = serde_json::from_str(
            r#"{"id":"CUST200","name":"Hanako Sato","email":"hanako@example.com"}"#,
        )
        .unwrap();
        assert_eq!(customer.id().as_str(), "CUST200");
        assert_eq!(customer.email(), "hanako@example.com");
    }
}
