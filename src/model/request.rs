//! Domain models for enrollment requests.
//!
//! Defines the request domain model, the parameters used to create one, the decision
//! applied when answering, and the lifecycle rules governing status changes.

use chrono::{DateTime, Utc};

use crate::error::AppError;

pub use entity::sea_orm_active_enums::{RequestStatus, RequestType};

/// A student's ask to join, cancel, or swap group enrollment.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Opaque identifier generated at creation.
    pub id: String,
    /// ID of the student who filed the request.
    pub student_id: String,
    /// Kind of change requested.
    pub request_type: RequestType,
    /// Group the student leaves. Absent for joins.
    pub origin_group: Option<String>,
    /// Group the student enters. Absent for cancellations.
    pub destination_group: Option<String>,
    /// Current lifecycle status.
    pub status: RequestStatus,
    /// Faculty whose administrative staff own the request.
    pub faculty_id: Option<String>,
    /// Free text provided by the student.
    pub description: String,
    /// Timestamp when the request was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last status change, never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Request {
    /// Converts an entity model to a request domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Request` - The converted request domain model
    pub fn from_entity(entity: entity::request::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            request_type: entity.request_type,
            origin_group: entity.origin_group,
            destination_group: entity.destination_group,
            status: entity.status,
            faculty_id: entity.faculty_id,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Returns the origin group code or a `BadRequest` naming the missing field.
    pub fn require_origin(&self) -> Result<&str, AppError> {
        self.origin_group.as_deref().ok_or_else(|| {
            AppError::BadRequest(format!("Request {} has no origin group", self.id))
        })
    }

    /// Returns the destination group code or a `BadRequest` naming the missing field.
    pub fn require_destination(&self) -> Result<&str, AppError> {
        self.destination_group.as_deref().ok_or_else(|| {
            AppError::BadRequest(format!("Request {} has no destination group", self.id))
        })
    }
}

/// Parameters for filing a new request.
///
/// Status, identifier and timestamps are assigned by the service on creation.
#[derive(Debug, Clone)]
pub struct CreateRequestParams {
    /// ID of the student filing the request.
    pub student_id: String,
    /// Kind of change requested.
    pub request_type: RequestType,
    /// Group the student leaves (required for cancellations and swaps).
    pub origin_group: Option<String>,
    /// Group the student enters (required for joins and swaps).
    pub destination_group: Option<String>,
    /// Faculty whose staff should handle the request.
    pub faculty_id: Option<String>,
    /// Free text provided by the student.
    pub description: String,
}

impl CreateRequestParams {
    /// Checks that the request carries the groups its type needs.
    ///
    /// # Returns
    /// - `Ok(())` - The group fields match the request type
    /// - `Err(AppError::BadRequest)` - A required group is missing or the student is blank
    pub fn validate(&self) -> Result<(), AppError> {
        if self.student_id.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Request must name a student".to_string(),
            ));
        }

        let needs_origin = matches!(
            self.request_type,
            RequestType::Cancellation | RequestType::Swap
        );
        let needs_destination = matches!(self.request_type, RequestType::Join | RequestType::Swap);

        if needs_origin && self.origin_group.is_none() {
            return Err(AppError::BadRequest(format!(
                "{:?} request requires an origin group",
                self.request_type
            )));
        }
        if needs_destination && self.destination_group.is_none() {
            return Err(AppError::BadRequest(format!(
                "{:?} request requires a destination group",
                self.request_type
            )));
        }

        Ok(())
    }
}

/// Decision taken when answering an open request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerDecision {
    Accept,
    Reject,
}

impl AnswerDecision {
    /// Status the request ends in once the decision is committed.
    pub fn resulting_status(self) -> RequestStatus {
        match self {
            Self::Accept => RequestStatus::Accepted,
            Self::Reject => RequestStatus::Rejected,
        }
    }
}

/// Aggregate request counts by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestStats {
    pub total: u64,
    pub pending: u64,
    /// Requests in `ACCEPTED` status.
    pub approved: u64,
    pub rejected: u64,
}

/// Lifecycle rules for request statuses.
///
/// PENDING moves to IN_REVIEW or WAITING, which may alternate, and every open status
/// may end as ACCEPTED, REJECTED or CANCELLED. Terminal statuses never change and
/// nothing returns to PENDING.
pub trait RequestStatusExt {
    /// Whether the status is final.
    fn is_terminal(self) -> bool;

    /// Whether an answer strategy may run against a request in this status.
    fn is_answerable(self) -> bool;

    /// Whether moving from this status to `next` is a legal forward transition.
    fn can_transition_to(self, next: RequestStatus) -> bool;
}

impl RequestStatusExt for RequestStatus {
    fn is_terminal(self) -> bool {
        matches!(
            self,
            RequestStatus::Accepted | RequestStatus::Rejected | RequestStatus::Cancelled
        )
    }

    fn is_answerable(self) -> bool {
        matches!(
            self,
            RequestStatus::Pending | RequestStatus::InReview | RequestStatus::Waiting
        )
    }

    fn can_transition_to(self, next: RequestStatus) -> bool {
        self.is_answerable() && next != RequestStatus::Pending && self != next
    }
}
