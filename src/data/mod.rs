//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts and updates are performed through these repositories.
//!
//! Absence is reported as `Ok(None)` rather than an error so the service layer decides
//! how a missing record surfaces to callers.

pub mod group;
pub mod historial;
pub mod member;
pub mod request;

#[cfg(test)]
mod test;
