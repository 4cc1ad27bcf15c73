//! Domain entities - the core business objects.

mod vehicle;

pub use vehicle::{VehicleSnapshot, VehicleStatus};
