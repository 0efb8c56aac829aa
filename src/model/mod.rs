//! Domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary so services never depend on database row shapes.

pub mod group;
pub mod historial;
pub mod request;
pub mod role;
