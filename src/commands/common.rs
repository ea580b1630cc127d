use serde::{Deserialize, Serialize};
use itertools::Itertools;

use crate::core::parking_lot::{ParkingError, ParkingLot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params")]
pub enum Command {
    CreateParkingLot {
        capacity: usize,
    },
    Park {
        registration_number: String,
    },
    Leave {
        registration_number: String,
        hours: i64,
    },
    Status,
}

pub trait CommandExecutor {
    fn execute_command(&mut self, command: Command) -> Result<String, ParkingError>;
}

/// Renders a lot's occupancy the way `status` prints it.
pub fn format_status(parking_lot: &ParkingLot) -> Result<String, ParkingError> {
    let occupied = parking_lot.status()?;
    if occupied.is_empty() {
        return Ok("Parking lot is empty.".to_string());
    }

    let rows = occupied.iter()
        .filter_map(|slot| slot.car().map(|car| format!("{} {}", slot.number(), car.registration_number())))
        .join("\n");
    Ok(format!("Slot No. Registration No.\n{}", rows))
}

pub struct ParkingLotExecutor {
    parking_lot: ParkingLot,
    currency_symbol: String,
}

impl ParkingLotExecutor {
    pub fn new(parking_lot: ParkingLot, currency_symbol: impl Into<String>) -> Self {
        Self {
            parking_lot,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn parking_lot(&self) -> &ParkingLot {
        &self.parking_lot
    }
}

impl CommandExecutor for ParkingLotExecutor {
    fn execute_command(&mut self, command: Command) -> Result<String, ParkingError> {
        match command {
            Command::CreateParkingLot { capacity } => {
                let capacity = self.parking_lot.create(capacity)?;
                Ok(format!("Created a parking lot with {} slots", capacity))
            },
            Command::Park { registration_number } => {
                let slot_number = self.parking_lot.park(&registration_number)?;
                Ok(format!("Allocated slot number: {}", slot_number))
            },
            Command::Leave { registration_number, hours } => {
                let departure = self.parking_lot.leave(&registration_number, hours)?;
                Ok(format!(
                    "Registration number {} with Slot Number {} is free with Charge {}{}",
                    departure.registration_number,
                    departure.slot_number,
                    self.currency_symbol,
                    departure.charge
                ))
            },
            Command::Status => format_status(&self.parking_lot),
        }
    }
}
