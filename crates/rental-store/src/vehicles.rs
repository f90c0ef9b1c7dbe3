//! Vehicle registry

use std::collections::BTreeMap;

use rental_domain::model::Vehicle;
use rental_types::{Error, Result, VehicleId};

/// In-memory vehicle registry keyed by sequential ID
#[derive(Debug)]
pub struct VehicleRegistry {
    vehicles: BTreeMap<VehicleId, Vehicle>,
    next_id: VehicleId,
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self {
            vehicles: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Register a vehicle. The rate must be a finite, non-negative
    /// number; rejection leaves the registry untouched.
    pub fn add(&mut self, kind: &str, model: &str, rate_per_day: f64) -> Result<&Vehicle> {
        if !rate_per_day.is_finite() || rate_per_day < 0.0 {
            return Err(Error::InvalidInput(format!(
                "rate per day must be a non-negative number, got {rate_per_day}"
            )));
        }
        let id = self.next_id;
        self.next_id += 1;
        let vehicle = Vehicle {
            id,
            kind: kind.to_string(),
            model: model.to_string(),
            rate_per_day,
            available: true,
        };
        self.vehicles.insert(id, vehicle);
        Ok(&self.vehicles[&id])
    }

    /// Delete a vehicle record. The caller is responsible for checking
    /// that no active booking still references it.
    pub fn remove(&mut self, id: VehicleId) -> Result<Vehicle> {
        self.vehicles.remove(&id).ok_or(Error::VehicleNotFound(id))
    }

    pub fn get(&self, id: VehicleId) -> Result<&Vehicle> {
        self.vehicles.get(&id).ok_or(Error::VehicleNotFound(id))
    }

    pub fn get_mut(&mut self, id: VehicleId) -> Result<&mut Vehicle> {
        self.vehicles.get_mut(&id).ok_or(Error::VehicleNotFound(id))
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.vehicles.contains_key(&id)
    }

    /// Insertion-ordered traversal
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }
}

impl Default for VehicleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_sequential_from_one() {
        let mut registry = VehicleRegistry::new();
        let first = registry.add("Car", "Sedan", 50.0).unwrap().id;
        let second = registry.add("Bike", "Cruiser", 15.0).unwrap().id;
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut registry = VehicleRegistry::new();
        registry.add("Car", "Sedan", 50.0).unwrap();
        registry.remove(1).unwrap();
        let id = registry.add("Van", "Transit", 80.0).unwrap().id;
        assert_eq!(id, 2);
    }

    #[test]
    fn test_negative_rate_rejected_without_mutation() {
        let mut registry = VehicleRegistry::new();
        let err = registry.add("Car", "Sedan", -1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(registry.len(), 0);
        // The counter must not burn an ID on rejection
        assert_eq!(registry.add("Car", "Sedan", 50.0).unwrap().id, 1);
    }

    #[test]
    fn test_nan_rate_rejected() {
        let mut registry = VehicleRegistry::new();
        assert!(registry.add("Car", "Sedan", f64::NAN).is_err());
        assert!(registry.add("Car", "Sedan", f64::INFINITY).is_err());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_zero_rate_accepted() {
        let mut registry = VehicleRegistry::new();
        let vehicle = registry.add("Scooter", "Promo", 0.0).unwrap();
        assert!(vehicle.available);
    }

    #[test]
    fn test_iter_in_insertion_order() {
        let mut registry = VehicleRegistry::new();
        registry.add("Car", "Sedan", 50.0).unwrap();
        registry.add("Bike", "Cruiser", 15.0).unwrap();
        registry.add("Van", "Transit", 80.0).unwrap();
        let models: Vec<&str> = registry.iter().map(|v| v.model.as_str()).collect();
        assert_eq!(models, vec!["Sedan", "Cruiser", "Transit"]);
    }

    #[test]
    fn test_remove_missing() {
        let mut registry = VehicleRegistry::new();
        assert!(matches!(
            registry.remove(7),
            Err(Error::VehicleNotFound(7))
        ));
    }
}
