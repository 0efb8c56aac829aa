//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let group = factory::create_group(&db).await?;
//!     let request = factory::request::RequestFactory::new(&db)
//!         .join(&group.group_code)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `course_group` - Create course group entities
//! - `historial` - Create enrollment history entries
//! - `member` - Create faculty member entities
//! - `request` - Create request entities
//! - `helpers` - Shared ID generation

pub mod course_group;
pub mod helpers;
pub mod historial;
pub mod member;
pub mod request;

// Re-export commonly used factory functions for concise usage
pub use course_group::create_group;
pub use historial::create_historial;
pub use member::create_member;
pub use request::create_request;
