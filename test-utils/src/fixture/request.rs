//! Request fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::{
    request,
    sea_orm_active_enums::{RequestStatus, RequestType},
};

/// Default test request ID.
pub const DEFAULT_ID: &str = "request-1";

/// Default test student ID.
pub const DEFAULT_STUDENT_ID: &str = "student-1";

/// Default destination group for the default JOIN request.
pub const DEFAULT_DESTINATION_GROUP: &str = "CS-101-1";

/// Fixed creation timestamp so fixtures compare equal across runs.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a pending JOIN request entity model with default values.
///
/// # Default Values
/// - id: `"request-1"`
/// - student_id: `"student-1"`
/// - request_type: `RequestType::Join`
/// - destination_group: `"CS-101-1"`
/// - status: `RequestStatus::Pending`
/// - created_at / updated_at: 2026-03-01 09:00 UTC
///
/// # Returns
/// - `request::Model` - In-memory request entity
pub fn entity() -> request::Model {
    request::Model {
        id: DEFAULT_ID.to_string(),
        student_id: DEFAULT_STUDENT_ID.to_string(),
        request_type: RequestType::Join,
        origin_group: None,
        destination_group: Some(DEFAULT_DESTINATION_GROUP.to_string()),
        status: RequestStatus::Pending,
        faculty_id: None,
        description: String::new(),
        created_at: default_created_at(),
        updated_at: default_created_at(),
    }
}

/// Creates a request entity builder for customization.
///
/// # Returns
/// - `RequestEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> RequestEntityBuilder {
    RequestEntityBuilder::default()
}

/// Builder for creating customized request entity models.
pub struct RequestEntityBuilder {
    entity: request::Model,
}

impl Default for RequestEntityBuilder {
    fn default() -> Self {
        Self { entity: entity() }
    }
}

impl RequestEntityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.entity.id = id.into();
        self
    }

    /// Sets the request type together with its group fields.
    ///
    /// # Arguments
    /// - `request_type` - Kind of change requested
    /// - `origin_group` - Group left, if any
    /// - `destination_group` - Group entered, if any
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn kind(
        mut self,
        request_type: RequestType,
        origin_group: Option<&str>,
        destination_group: Option<&str>,
    ) -> Self {
        self.entity.request_type = request_type;
        self.entity.origin_group = origin_group.map(str::to_string);
        self.entity.destination_group = destination_group.map(str::to_string);
        self
    }

    pub fn status(mut self, status: RequestStatus) -> Self {
        self.entity.status = status;
        self
    }

    pub fn faculty_id(mut self, faculty_id: impl Into<String>) -> Self {
        self.entity.faculty_id = Some(faculty_id.into());
        self
    }

    /// Builds and returns the request entity model.
    ///
    /// # Returns
    /// - `request::Model` - Request entity with configured values
    pub fn build(self) -> request::Model {
        self.entity
    }
}
