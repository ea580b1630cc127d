use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    registration_number: String,
}

impl Car {
    pub fn new(registration_number: impl Into<String>) -> Self {
        Self {
            registration_number: registration_number.into(),
        }
    }

    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    pub fn registration_matches(&self, registration_number: &str) -> bool {
        self.registration_number == registration_number
    }
}
