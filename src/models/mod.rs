//! Domain model: vaccine products, site distributions and patient health records.

pub mod distribution;
pub mod enums;
pub mod health_record;
pub mod vaccine;

pub use distribution::VaccineDistribution;
pub use enums::AppointmentStatus;
pub use health_record::{DoseEntry, HealthRecord};
pub use vaccine::Vaccine;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Capacity exceeded for {collection}: limit is {limit}")]
    CapacityExceeded { collection: String, limit: usize },
}
