// src/core/models/mod.rs

pub mod car;
pub mod slot;

pub use car::*;
pub use slot::*;
