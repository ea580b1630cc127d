// src/core/parking_lot.rs

use crate::core::billing::Tariff;
use crate::core::models::{Car, Slot};

use log::{debug, info};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParkingError {
    #[error("Parking lot not created yet.")]
    NotCreated,
    #[error("Parking lot already created.")]
    AlreadyCreated,
    #[error("Invalid capacity")]
    InvalidCapacity,
    #[error("Invalid hours")]
    InvalidHours,
    #[error("Sorry, parking lot is full")]
    Full,
    #[error("Registration number {0} not found")]
    RegistrationNotFound(String),
}

/// Largest lot `create` will build.
pub const MAX_CAPACITY: usize = 1_000_000;

/// Result of a successful `leave`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub registration_number: String,
    pub slot_number: usize,
    pub charge: i64,
}

/// Owns the slot table. An empty table means the lot has not been created.
#[derive(Debug, Default)]
pub struct ParkingLot {
    slots: Vec<Slot>,
    occupied: usize,
    tariff: Tariff,
}

impl ParkingLot {
    pub fn new(tariff: Tariff) -> Self {
        Self {
            slots: Vec::new(),
            occupied: 0,
            tariff,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    pub fn is_created(&self) -> bool {
        !self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.occupied >= self.capacity()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn ensure_created(&self) -> Result<(), ParkingError> {
        if self.is_created() {
            Ok(())
        } else {
            Err(ParkingError::NotCreated)
        }
    }

    pub fn create(&mut self, capacity: usize) -> Result<usize, ParkingError> {
        if self.is_created() {
            return Err(ParkingError::AlreadyCreated);
        }
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(ParkingError::InvalidCapacity);
        }

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)
            .map_err(|_| ParkingError::InvalidCapacity)?;
        slots.extend((1..=capacity).map(Slot::new));
        self.slots = slots;
        self.occupied = 0;
        info!("Created parking lot with {} slots", capacity);
        Ok(capacity)
    }

    /// Parks in the lowest-numbered free slot and returns its number.
    /// Registrations already in the lot are not checked.
    pub fn park(&mut self, registration_number: &str) -> Result<usize, ParkingError> {
        self.ensure_created()?;
        if self.is_full() {
            debug!("Rejected {}: lot is full", registration_number);
            return Err(ParkingError::Full);
        }

        let slot = self.slots
            .iter_mut()
            .find(|slot| !slot.is_occupied())
            .ok_or(ParkingError::Full)?;
        slot.occupy(Car::new(registration_number))
            .map_err(|_| ParkingError::Full)?;
        self.occupied += 1;

        info!("Allocated slot {} to {}", slot.number(), registration_number);
        Ok(slot.number())
    }

    /// Frees the first slot (by number) holding `registration_number`.
    pub fn leave(&mut self, registration_number: &str, hours: i64) -> Result<Departure, ParkingError> {
        self.ensure_created()?;

        let charge = self.tariff.charge(hours).ok_or(ParkingError::InvalidHours)?;
        let slot = self.slots
            .iter_mut()
            .find(|slot| slot.holds(registration_number))
            .ok_or_else(|| ParkingError::RegistrationNotFound(registration_number.to_string()))?;
        slot.release();
        self.occupied -= 1;

        info!("Freed slot {} from {} after {} hours", slot.number(), registration_number, hours);
        Ok(Departure {
            registration_number: registration_number.to_string(),
            slot_number: slot.number(),
            charge,
        })
    }

    /// Occupied slots in ascending slot order.
    pub fn status(&self) -> Result<Vec<&Slot>, ParkingError> {
        self.ensure_created()?;
        Ok(self.slots.iter().filter(|slot| slot.is_occupied()).collect())
    }
}
