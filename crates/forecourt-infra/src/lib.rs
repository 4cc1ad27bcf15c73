//! # Forecourt Infrastructure
//!
//! Concrete implementations of the ports defined in `forecourt-core`.
//! Currently one adapter: the SeaORM/PostgreSQL vehicle repository.

pub mod database;

pub use database::{DatabaseConfig, SeaOrmVehicleRepository, connect};
