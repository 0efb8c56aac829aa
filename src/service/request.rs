//! Request service orchestrating the request lifecycle.
//!
//! This module provides the `RequestService`, the entry point callers use to list, file,
//! move and answer requests. It selects query strategies from the caller role and answer
//! strategies from the request type, enforces the status lifecycle, and runs the capacity
//! notifier on every group an answer touched.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::request::RequestRepository,
    error::AppError,
    model::{
        request::{
            AnswerDecision, CreateRequestParams, Request, RequestStats, RequestStatus,
            RequestStatusExt,
        },
        role::Role,
    },
    service::{
        answer::{AnswerOutcome, AnswerStrategy},
        capacity::CapacityNotifier,
        query::QueryStrategy,
    },
};

/// Service providing the request lifecycle operations.
///
/// Borrows the database connection and the capacity notifier assembled at startup;
/// constructing it is cheap, so callers create one per operation.
pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a CapacityNotifier,
}

impl<'a> RequestService<'a> {
    /// Creates a new RequestService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `notifier` - Capacity notifier run after answers mutate groups
    ///
    /// # Returns
    /// - `RequestService` - New service instance
    pub fn new(db: &'a DatabaseConnection, notifier: &'a CapacityNotifier) -> Self {
        Self { db, notifier }
    }

    /// Gets the requests visible to a caller, most recent first.
    ///
    /// # Arguments
    /// - `role` - Caller role name (`STUDENT`, `ADMINISTRATIVE` or `ADMINISTRATOR`)
    /// - `user_id` - ID of the caller
    ///
    /// # Returns
    /// - `Ok(Vec<Request>)` - Visible requests sorted by creation time descending
    /// - `Err(AppError::UnsupportedRole)` - Role name not recognised
    /// - `Err(AppError::NotFound)` - Administrative caller is not a registered member
    pub async fn fetch_requests(
        &self,
        role: &str,
        user_id: &str,
    ) -> Result<Vec<Request>, AppError> {
        let role: Role = role.parse()?;

        let mut requests = QueryStrategy::for_role(role).query(self.db, user_id).await?;
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(requests)
    }

    /// Gets a single request by ID.
    ///
    /// # Returns
    /// - `Ok(Request)` - Request found
    /// - `Err(AppError::NotFound)` - No request with that ID
    pub async fn get_request(&self, id: &str) -> Result<Request, AppError> {
        RequestRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Files a new request in PENDING status.
    ///
    /// # Arguments
    /// - `params` - Student, type, groups, faculty and description
    ///
    /// # Returns
    /// - `Ok(Request)` - The created request with generated ID and timestamps
    /// - `Err(AppError::BadRequest)` - Groups do not match the request type
    pub async fn create_request(&self, params: CreateRequestParams) -> Result<Request, AppError> {
        params.validate()?;

        let request = RequestRepository::new(self.db)
            .create(Uuid::new_v4().to_string(), params, Utc::now())
            .await?;

        tracing::info!(
            "Created {:?} request {} for student {}",
            request.request_type,
            request.id,
            request.student_id
        );

        Ok(request)
    }

    /// Moves a request to a new status.
    ///
    /// Setting the status a request already has is a no-op returning the request as is,
    /// so repeating a cancellation succeeds. Any other change must be a forward
    /// transition of the lifecycle. ACCEPTED and REJECTED are only reached through
    /// `respond_to_request`, which applies the answer's effects.
    ///
    /// # Arguments
    /// - `id` - Request ID
    /// - `status` - Target status
    ///
    /// # Returns
    /// - `Ok(Request)` - The request in its target status
    /// - `Err(AppError::NotFound)` - No request with that ID
    /// - `Err(AppError::InvalidState)` - Transition not allowed from the current status
    /// - `Err(AppError::BadRequest)` - Target status must be reached by answering
    pub async fn update_request_status(
        &self,
        id: &str,
        status: RequestStatus,
    ) -> Result<Request, AppError> {
        let request = self.get_request(id).await?;

        if request.status == status {
            return Ok(request);
        }

        if matches!(status, RequestStatus::Accepted | RequestStatus::Rejected) {
            return Err(AppError::BadRequest(format!(
                "Request {} must be answered to become {:?}",
                id, status
            )));
        }

        if !request.status.can_transition_to(status) {
            return Err(AppError::InvalidState {
                request_id: request.id,
                from: request.status,
                to: status,
            });
        }

        let updated = RequestRepository::new(self.db)
            .update_status_if(
                id,
                request.status,
                status,
                Utc::now().max(request.created_at),
            )
            .await?
            .ok_or_else(|| {
                AppError::Conflict(format!("Request {} changed while being updated", id))
            })?;

        tracing::info!(
            "Request {} moved from {:?} to {:?}",
            id,
            request.status,
            updated.status
        );

        Ok(updated)
    }

    /// Answers an open request.
    ///
    /// Accepting runs the answer strategy for the request type; rejecting has no side
    /// effects. The status change is committed only after the strategy succeeded, and only
    /// if no one else answered the request in the meantime. Groups touched by the answer
    /// are then checked against the capacity threshold.
    ///
    /// # Arguments
    /// - `id` - Request ID
    /// - `decision` - Accept or reject
    ///
    /// # Returns
    /// - `Ok(Request)` - The request in ACCEPTED or REJECTED status
    /// - `Err(AppError::NotFound)` - Request or one of its groups does not exist
    /// - `Err(AppError::InvalidState)` - Request is no longer open
    /// - `Err(AppError::InvalidRequestType)` - Accepted type has no automatic effect
    /// - `Err(AppError::GroupFull)` / `Err(AppError::GroupEmpty)` - Capacity rule violated
    /// - `Err(AppError::Conflict)` - A group or the request changed concurrently
    /// - `Err(AppError::AnswerProcessing)` - Database failure while applying the answer
    pub async fn respond_to_request(
        &self,
        id: &str,
        decision: AnswerDecision,
    ) -> Result<Request, AppError> {
        let request = self.get_request(id).await?;
        let target = decision.resulting_status();

        if !request.status.is_answerable() {
            return Err(AppError::InvalidState {
                request_id: request.id,
                from: request.status,
                to: target,
            });
        }

        let outcome = match decision {
            AnswerDecision::Accept => {
                AnswerStrategy::resolve(request.request_type)?
                    .answer(self.db, &request)
                    .await?
            }
            AnswerDecision::Reject => AnswerOutcome::default(),
        };

        let answered = RequestRepository::new(self.db)
            .update_status_if(
                id,
                request.status,
                target,
                Utc::now().max(request.created_at),
            )
            .await?
            .ok_or_else(|| {
                AppError::Conflict(format!("Request {} was answered concurrently", id))
            })?;

        tracing::info!("Request {} answered as {:?}", id, answered.status);

        for group in &outcome.touched_groups {
            self.notifier.check_and_notify(group);
        }

        Ok(answered)
    }

    /// Gets aggregate request counts.
    ///
    /// # Returns
    /// - `Ok(RequestStats)` - Total, pending, accepted and rejected counts
    /// - `Err(AppError::DbErr)` - Database error during count
    pub async fn get_request_stats(&self) -> Result<RequestStats, AppError> {
        let repo = RequestRepository::new(self.db);

        Ok(RequestStats {
            total: repo.count().await?,
            pending: repo.count_by_status(RequestStatus::Pending).await?,
            approved: repo.count_by_status(RequestStatus::Accepted).await?,
            rejected: repo.count_by_status(RequestStatus::Rejected).await?,
        })
    }
}
