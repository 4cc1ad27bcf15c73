//! # Forecourt Core
//!
//! The domain layer of the Forecourt inventory viewer.
//! This crate contains the vehicle model, the marketing content generator,
//! and the access policy - pure business logic with zero infrastructure
//! dependencies.

pub mod content;
pub mod domain;
pub mod error;
pub mod policy;
pub mod ports;

pub use error::DomainError;
