//! Error types and status classification.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and classifies each
//! variant into the HTTP-equivalent status a transport layer should surface, along with
//! whether the failed operation is safe to retry.

pub mod capacity;
pub mod config;

use http::StatusCode;
use thiserror::Error;

use crate::{
    error::config::ConfigError,
    model::request::{RequestStatus, RequestType},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Business rule
/// violations carry enough context for the caller to explain the failure, while downstream
/// failures that happen in the middle of answering a request are wrapped in
/// `AnswerProcessing` so callers know side effects may have been partially applied.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// The caller role has no query strategy.
    ///
    /// Results in 400 Bad Request.
    #[error("Unsupported role: {0}")]
    UnsupportedRole(String),

    /// The request type has no answer strategy.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid request type for answering: {0:?}")]
    InvalidRequestType(RequestType),

    /// The request lifecycle does not allow the attempted transition.
    ///
    /// Raised when answering a request that is no longer open, or when moving a
    /// request backwards or out of a terminal status. Results in 409 Conflict.
    #[error("Request {request_id} cannot move from {from:?} to {to:?}")]
    InvalidState {
        request_id: String,
        from: RequestStatus,
        to: RequestStatus,
    },

    /// The group has no free seats.
    ///
    /// Raised before any mutation is applied. Results in 409 Conflict and is never
    /// retried automatically.
    #[error("Group {group_code} is full")]
    GroupFull { group_code: String },

    /// The group has no enrolled students left to remove.
    ///
    /// Raised before any mutation is applied. Results in 409 Conflict.
    #[error("Group {group_code} has no enrolled students")]
    GroupEmpty { group_code: String },

    /// A conditional update found the record changed since it was read.
    ///
    /// Results in 409 Conflict. The whole operation is safe to retry.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected downstream failure while applying an answer.
    ///
    /// Results in 500 Internal Server Error. Not retried automatically since part of
    /// the answer's side effects may already have been applied.
    ///
    /// # Fields
    /// - `context` - The step of the answer that failed
    /// - `source` - The underlying database failure
    #[error("Failed to process answer ({context}): {source}")]
    AnswerProcessing {
        context: String,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl AppError {
    /// Wraps a database failure raised while applying an answer.
    ///
    /// # Arguments
    /// - `context` - Short description of the step that failed
    /// - `source` - The underlying database error
    ///
    /// # Returns
    /// - `AppError::AnswerProcessing` carrying both
    pub fn processing(context: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::AnswerProcessing {
            context: context.into(),
            source,
        }
    }

    /// Maps the error to the status code a transport layer should respond with.
    ///
    /// # Returns
    /// - 400 Bad Request - For malformed input, unsupported roles and request types
    /// - 404 Not Found - For missing requests, groups or members
    /// - 409 Conflict - For lifecycle, capacity and concurrent-update violations
    /// - 500 Internal Server Error - For configuration, database and answer processing failures
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::UnsupportedRole(_) | Self::InvalidRequestType(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidState { .. }
            | Self::GroupFull { .. }
            | Self::GroupEmpty { .. }
            | Self::Conflict(_) => StatusCode::CONFLICT,
            Self::ConfigErr(_) | Self::DbErr(_) | Self::AnswerProcessing { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether repeating the whole operation may succeed.
    ///
    /// Only stale conditional updates qualify; every other failure is either permanent
    /// or may have left partial side effects behind.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_business_errors_as_conflict() {
        let full = AppError::GroupFull {
            group_code: "G1".to_string(),
        };
        assert_eq!(full.status_code(), StatusCode::CONFLICT);
        assert!(!full.is_retryable());

        let conflict = AppError::Conflict("stale".to_string());
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
        assert!(conflict.is_retryable());
    }

    #[test]
    fn classifies_input_errors_as_bad_request() {
        assert_eq!(
            AppError::UnsupportedRole("GUEST".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidRequestType(RequestType::Exceptional).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn answer_processing_is_not_retryable() {
        let err = AppError::processing(
            "update group",
            sea_orm::DbErr::Custom("connection reset".to_string()),
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("update group"));
    }
}
