//! Request factory for creating test request entities.
//!
//! This module provides factory methods for inserting requests with sensible defaults.
//! Convenience setters configure the type and group fields together so the created
//! request is consistent for its kind.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{RequestStatus, RequestType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test requests with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::request::RequestFactory;
///
/// let request = RequestFactory::new(&db)
///     .student_id("student-1")
///     .swap("MATH-101-1", "MATH-101-2")
///     .faculty_id("sciences")
///     .build()
///     .await?;
/// ```
pub struct RequestFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    student_id: String,
    request_type: RequestType,
    origin_group: Option<String>,
    destination_group: Option<String>,
    status: RequestStatus,
    faculty_id: Option<String>,
    description: String,
    created_at: DateTime<Utc>,
}

impl<'a> RequestFactory<'a> {
    /// Creates a new RequestFactory with default values.
    ///
    /// Defaults:
    /// - id: `"request_{id}"` where id is auto-incremented
    /// - student_id: `"student_{id}"`
    /// - request_type: `RequestType::Exceptional` with no groups
    /// - status: `RequestStatus::Pending`
    /// - faculty_id: `None`
    /// - description: `"Request {id}"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RequestFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("request_{}", id),
            student_id: format!("student_{}", id),
            request_type: RequestType::Exceptional,
            origin_group: None,
            destination_group: None,
            status: RequestStatus::Pending,
            faculty_id: None,
            description: format!("Request {}", id),
            created_at: Utc::now(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the student who filed the request.
    pub fn student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = student_id.into();
        self
    }

    /// Configures a JOIN request into the destination group.
    ///
    /// # Arguments
    /// - `destination` - Code of the group to join
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn join(mut self, destination: impl Into<String>) -> Self {
        self.request_type = RequestType::Join;
        self.origin_group = None;
        self.destination_group = Some(destination.into());
        self
    }

    /// Configures a CANCELLATION request leaving the origin group.
    ///
    /// # Arguments
    /// - `origin` - Code of the group to leave
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn cancellation(mut self, origin: impl Into<String>) -> Self {
        self.request_type = RequestType::Cancellation;
        self.origin_group = Some(origin.into());
        self.destination_group = None;
        self
    }

    /// Configures a SWAP request from the origin to the destination group.
    ///
    /// # Arguments
    /// - `origin` - Code of the group to leave
    /// - `destination` - Code of the group to join
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn swap(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.request_type = RequestType::Swap;
        self.origin_group = Some(origin.into());
        self.destination_group = Some(destination.into());
        self
    }

    /// Configures an EXCEPTIONAL request with no groups.
    pub fn exceptional(mut self) -> Self {
        self.request_type = RequestType::Exceptional;
        self.origin_group = None;
        self.destination_group = None;
        self
    }

    /// Sets the current lifecycle status.
    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// Assigns the request to a faculty.
    pub fn faculty_id(mut self, faculty_id: impl Into<String>) -> Self {
        self.faculty_id = Some(faculty_id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the creation timestamp.
    ///
    /// `updated_at` is set to the same instant.
    ///
    /// # Arguments
    /// - `created_at` - Creation timestamp
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the request entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::request::Model)` - Created request entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::request::Model, DbErr> {
        entity::request::ActiveModel {
            id: ActiveValue::Set(self.id),
            student_id: ActiveValue::Set(self.student_id),
            request_type: ActiveValue::Set(self.request_type),
            origin_group: ActiveValue::Set(self.origin_group),
            destination_group: ActiveValue::Set(self.destination_group),
            status: ActiveValue::Set(self.status),
            faculty_id: ActiveValue::Set(self.faculty_id),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending EXCEPTIONAL request with default values.
///
/// Shorthand for `RequestFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::request::Model)` - Created request entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_request(db: &DatabaseConnection) -> Result<entity::request::Model, DbErr> {
    RequestFactory::new(db).build().await
}
