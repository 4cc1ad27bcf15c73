//! Database connection management and the vehicle repository.

mod connections;
pub mod entity;
mod vehicle_repo;

pub use connections::{DatabaseConfig, connect};
pub use vehicle_repo::SeaOrmVehicleRepository;
