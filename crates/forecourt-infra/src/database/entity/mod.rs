//! SeaORM entities backing the inventory schema.

pub mod vehicle;
