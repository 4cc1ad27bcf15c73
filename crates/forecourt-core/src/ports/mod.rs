//! Ports are the trait boundaries the domain exposes to infrastructure.
//! Adapters (Postgres today, in-memory for tests and demos) implement
//! them without the core crate knowing which one is wired in.

mod repository;

pub use repository::VehicleRepository;
