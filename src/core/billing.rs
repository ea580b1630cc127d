// src/core/billing.rs

use serde::{Serialize, Deserialize};

use crate::app_config::AppConfig;

/// Flat charge up to `flat_rate_hours`, then `hourly_charge` per extra hour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    flat_rate_hours: i64,
    flat_charge: i64,
    hourly_charge: i64,
}

impl Tariff {
    pub fn new(flat_rate_hours: i64, flat_charge: i64, hourly_charge: i64) -> Self {
        Self {
            flat_rate_hours,
            flat_charge,
            hourly_charge,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.flat_rate_hours, config.flat_charge, config.hourly_charge)
    }

    /// Zero and negative durations fall inside the flat window.
    /// Returns `None` when the charge does not fit in an `i64`.
    pub fn charge(&self, hours: i64) -> Option<i64> {
        if hours <= self.flat_rate_hours {
            return Some(self.flat_charge);
        }
        hours.checked_sub(self.flat_rate_hours)
            .and_then(|extra| extra.checked_mul(self.hourly_charge))
            .and_then(|extra| extra.checked_add(self.flat_charge))
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::new(2, 10, 10)
    }
}
