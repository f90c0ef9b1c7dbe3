//! Customer registry

use std::collections::BTreeMap;

use rental_domain::model::Customer;
use rental_types::{CustomerId, Error, Result};

/// In-memory customer registry keyed by sequential ID
#[derive(Debug)]
pub struct CustomerRegistry {
    customers: BTreeMap<CustomerId, Customer>,
    next_id: CustomerId,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self {
            customers: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Register a customer. Name and phone are free text.
    pub fn add(&mut self, name: &str, phone: &str) -> &Customer {
        let id = self.next_id;
        self.next_id += 1;
        let customer = Customer {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
        };
        self.customers.insert(id, customer);
        &self.customers[&id]
    }

    pub fn get(&self, id: CustomerId) -> Result<&Customer> {
        self.customers.get(&id).ok_or(Error::CustomerNotFound(id))
    }

    pub fn contains(&self, id: CustomerId) -> bool {
        self.customers.contains_key(&id)
    }

    /// Insertion-ordered traversal
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }
}

impl Default for CustomerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_sequential_from_one() {
        let mut registry = CustomerRegistry::new();
        assert_eq!(registry.add("Alice", "555-1111").id, 1);
        assert_eq!(registry.add("Bob", "555-2222").id, 2);
    }

    #[test]
    fn test_iter_in_insertion_order() {
        let mut registry = CustomerRegistry::new();
        registry.add("Alice", "555-1111");
        registry.add("Bob", "555-2222");
        let names: Vec<&str> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_get_missing() {
        let registry = CustomerRegistry::new();
        assert!(matches!(registry.get(1), Err(Error::CustomerNotFound(1))));
    }
}
