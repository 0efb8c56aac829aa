//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between
//! callers and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing the request lifecycle and enrollment capacity rules
//! - **Orchestration**: Coordinating strategy dispatch, repository calls and notifications
//! - **Domain Models**: Working with domain models rather than entity models
//!
//! - `request` - Request lifecycle entry point
//! - `query` - Role-scoped request visibility
//! - `answer` - Per-type effects of accepting a request
//! - `capacity` - Occupancy threshold notifications

pub mod answer;
pub mod capacity;
pub mod query;
pub mod request;

#[cfg(test)]
mod test;
