//! Customer-related types for the rental tracker

/// Customer identifier
pub type CustomerId = u32;

/// A registered customer
///
/// Immutable after creation. Ids are unique within a rental system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Customer {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_accessors() {
        let customer = Customer::new(1, "John Doe");
        assert_eq!(customer.id(), 1);
        assert_eq!(customer.name(), "John Doe");
    }
}
