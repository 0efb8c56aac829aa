//! Role-scoped request visibility.
//!
//! Each caller role maps to one `QueryStrategy` variant selecting the requests that role
//! works from. Strategies return requests in their repository order; the request service
//! applies the final most-recent-first ordering.

use sea_orm::DatabaseConnection;

use crate::{
    data::{member::MemberRepository, request::RequestRepository},
    error::AppError,
    model::{
        request::{Request, RequestStatus, RequestType},
        role::Role,
    },
};

/// Strategy deciding which requests a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStrategy {
    /// Requests filed by the caller.
    Student,
    /// Every pending request followed by the caller's faculty queue.
    Administrative,
    /// The escalation queue of exceptional requests.
    Administrator,
}

impl QueryStrategy {
    /// Selects the strategy for a caller role.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Student => Self::Student,
            Role::Administrative => Self::Administrative,
            Role::Administrator => Self::Administrator,
        }
    }

    /// Fetches the requests visible to a caller.
    ///
    /// The administrative view concatenates all pending requests with every request owned
    /// by the caller's faculty. A pending request owned by that faculty therefore appears
    /// twice; the duplicate is kept so staff see it in both queues.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `user_id` - ID of the caller
    ///
    /// # Returns
    /// - `Ok(Vec<Request>)` - Requests visible to the caller
    /// - `Err(AppError::NotFound)` - Administrative caller is not a registered member
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn query(
        &self,
        db: &DatabaseConnection,
        user_id: &str,
    ) -> Result<Vec<Request>, AppError> {
        let repo = RequestRepository::new(db);

        match self {
            Self::Student => Ok(repo.find_by_student(user_id).await?),
            Self::Administrative => {
                let faculty_id = MemberRepository::new(db)
                    .get_faculty(user_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Member {} not found", user_id)))?;

                let mut requests = repo.find_by_status(RequestStatus::Pending).await?;
                requests.extend(repo.find_owned_by_faculty(&faculty_id).await?);

                Ok(requests)
            }
            Self::Administrator => Ok(repo.find_by_type(RequestType::Exceptional).await?),
        }
    }
}
