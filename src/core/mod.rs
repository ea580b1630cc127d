pub mod billing;
pub mod file_system;
pub mod models;
pub mod parking_lot;
