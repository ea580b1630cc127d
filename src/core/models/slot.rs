use serde::{Serialize, Deserialize};

use super::Car;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotStatus {
    Free,
    Occupied,
}

/// One numbered space in the lot. Numbers are 1-based and never change.
/// Parked duration is not tracked here; hours are supplied on `leave`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    number: usize,
    car: Option<Car>,
}

impl Slot {
    pub fn new(number: usize) -> Self {
        Self { number, car: None }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn car(&self) -> Option<&Car> {
        self.car.as_ref()
    }

    pub fn status(&self) -> SlotStatus {
        match self.car {
            Some(_) => SlotStatus::Occupied,
            None => SlotStatus::Free,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.status() == SlotStatus::Occupied
    }

    pub fn holds(&self, registration_number: &str) -> bool {
        self.car
            .as_ref()
            .map_or(false, |car| car.registration_matches(registration_number))
    }

    /// Free -> Occupied. Fails if the slot already holds a car.
    pub fn occupy(&mut self, car: Car) -> Result<(), &'static str> {
        if self.is_occupied() {
            return Err("Slot is already occupied");
        }
        self.car = Some(car);
        Ok(())
    }

    /// Occupied -> Free, handing back the car that was parked here.
    pub fn release(&mut self) -> Option<Car> {
        self.car.take()
    }
}
