//! Enrollment request resolution engine.
//!
//! This crate manages student requests to join, cancel, or swap their enrollment in course
//! groups. It decides which requests a caller may see based on their role and applies the
//! business effect of answering a request: group capacity adjustments, enrollment historial
//! updates, and capacity threshold notifications.
//!
//! # Architecture
//!
//! The crate follows a layered architecture with clear separation of concerns:
//!
//! - **Service Layer** (`service/`) - Request lifecycle, query and answer strategy dispatch,
//!   capacity notifications
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and status classification
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared long-lived resources (database pool, capacity notifier)
//! - **Startup** (`startup`) - Tracing, database connection, migrations and state assembly
//!
//! # Request Flow
//!
//! 1. **Caller** invokes an operation on `RequestService`
//! 2. **Service** resolves a query or answer strategy from the caller role or request type
//! 3. **Strategy** reads and mutates groups and historial entries through repositories
//! 4. **Service** commits the request status and runs the capacity notifier
//! 5. **Data** converts entities to domain models returned to the caller

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
