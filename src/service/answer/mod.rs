//! Answer strategies applying the effect of accepted requests.
//!
//! Each request type that changes enrollment has its own strategy: joins fill a seat in
//! the destination group, cancellations free a seat in the origin group, and swaps do
//! both. Every strategy checks capacity before mutating anything, changes enrollment
//! counts through conditional updates, and records the outcome in the student's
//! historial. Strategies report the groups they mutated so the caller can run capacity
//! checks on them.
//!
//! - `join` - Enroll the student in the destination group
//! - `cancellation` - Remove the student from the origin group
//! - `swap` - Move the student from the origin group to the destination group

pub mod cancellation;
pub mod join;
pub mod swap;

use sea_orm::DatabaseConnection;

use crate::{
    data::{group::GroupRepository, historial::HistorialRepository},
    error::AppError,
    model::{
        group::Group,
        historial::HistorialStatus,
        request::{Request, RequestType},
    },
};

use self::{cancellation::CancellationStrategy, join::JoinStrategy, swap::SwapStrategy};

/// Groups mutated while applying an answer, in the state they were left in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnswerOutcome {
    pub touched_groups: Vec<Group>,
}

/// Strategy applying the effect of an accepted request, selected by request type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerStrategy {
    Join(JoinStrategy),
    Cancellation(CancellationStrategy),
    Swap(SwapStrategy),
}

impl AnswerStrategy {
    /// Selects the strategy for a request type.
    ///
    /// # Returns
    /// - `Ok(AnswerStrategy)` - For joins, cancellations and swaps
    /// - `Err(AppError::InvalidRequestType)` - For types without an automatic effect
    pub fn resolve(request_type: RequestType) -> Result<Self, AppError> {
        match request_type {
            RequestType::Join => Ok(Self::Join(JoinStrategy)),
            RequestType::Cancellation => Ok(Self::Cancellation(CancellationStrategy)),
            RequestType::Swap => Ok(Self::Swap(SwapStrategy)),
            RequestType::Exceptional => Err(AppError::InvalidRequestType(request_type)),
        }
    }

    /// Applies the strategy's effect for a request.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `request` - The request being accepted
    ///
    /// # Returns
    /// - `Ok(AnswerOutcome)` - Groups mutated by the answer
    /// - `Err(AppError)` - Business rule violation, stale read, or wrapped database failure
    pub async fn answer(
        &self,
        db: &DatabaseConnection,
        request: &Request,
    ) -> Result<AnswerOutcome, AppError> {
        let groups = GroupRepository::new(db);
        let historial = HistorialRepository::new(db);

        tracing::debug!("Answering request {} with {:?}", request.id, self);

        match self {
            Self::Join(strategy) => strategy.answer(&groups, &historial, request).await,
            Self::Cancellation(strategy) => strategy.answer(&groups, &historial, request).await,
            Self::Swap(strategy) => strategy.answer(&groups, &historial, request).await,
        }
    }
}

/// Loads a group by code, mapping absence to `NotFound`.
async fn load_group(groups: &GroupRepository<'_>, group_code: &str) -> Result<Group, AppError> {
    groups
        .get_by_code(group_code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Group {} not found", group_code)))
}

/// Moves a group's enrollment count from the value read in `group` to `enrolled`.
///
/// # Returns
/// - `Ok(Group)` - The group after the update
/// - `Err(AppError::Conflict)` - The group changed since it was read
/// - `Err(AppError::AnswerProcessing)` - Database failure during the update
async fn apply_enrollment(
    groups: &GroupRepository<'_>,
    group: &Group,
    enrolled: i32,
) -> Result<Group, AppError> {
    groups
        .update_enrolled(&group.group_code, group.enrolled, enrolled)
        .await
        .map_err(|e| AppError::processing(format!("update group {}", group.group_code), e))?
        .ok_or_else(|| {
            AppError::Conflict(format!(
                "Group {} changed while the request was being answered",
                group.group_code
            ))
        })
}

/// Supersedes the existing historial entry for a student and group.
///
/// A missing entry is an unexpected inconsistency and is wrapped as `AnswerProcessing`.
async fn supersede_historial(
    historial: &HistorialRepository<'_>,
    student_id: &str,
    group_code: &str,
    status: HistorialStatus,
) -> Result<(), AppError> {
    let context = || format!("mark historial of {} in {} as {:?}", student_id, group_code, status);

    match historial.update_status(student_id, group_code, status).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(AppError::processing(
            context(),
            sea_orm::DbErr::RecordNotFound(format!(
                "Historial entry for student {} in group {} not found",
                student_id, group_code
            )),
        )),
        Err(e) => Err(AppError::processing(context(), e)),
    }
}

/// Reverts a group this answer already moved back to the count it was read with.
///
/// Runs when a later step of the answer fails. A failed revert is logged since the
/// original error is what the caller receives.
async fn restore_group(groups: &GroupRepository<'_>, moved: &Group, enrolled: i32) {
    match groups
        .update_enrolled(&moved.group_code, moved.enrolled, enrolled)
        .await
    {
        Ok(Some(_)) => tracing::info!(
            "Restored group {} enrollment to {} after failed answer",
            moved.group_code,
            enrolled
        ),
        Ok(None) => tracing::error!(
            "Could not restore group {} after failed answer: group changed concurrently",
            moved.group_code
        ),
        Err(e) => tracing::error!(
            "Could not restore group {} after failed answer: {}",
            moved.group_code,
            e
        ),
    }
}

/// Records the student as ON_GOING in a group, reusing an existing entry for the pair.
async fn record_on_going(
    historial: &HistorialRepository<'_>,
    student_id: &str,
    group_code: &str,
) -> Result<(), AppError> {
    let add_err = match historial
        .add(student_id, group_code, HistorialStatus::OnGoing)
        .await
    {
        Ok(_) => return Ok(()),
        Err(e) => e,
    };

    tracing::debug!(
        "Historial entry for {} in {} not added ({}), updating existing entry",
        student_id,
        group_code,
        add_err
    );

    let context = || format!("record historial of {} in {}", student_id, group_code);

    match historial
        .update_status(student_id, group_code, HistorialStatus::OnGoing)
        .await
    {
        Ok(Some(_)) => Ok(()),
        // Nothing to fall back to, so the add failure was not a duplicate.
        Ok(None) => Err(AppError::processing(context(), add_err)),
        Err(e) => Err(AppError::processing(context(), e)),
    }
}

/// Fails with `AnswerProcessing` unless the student has a historial entry in the group.
///
/// Checked before any group is written so a missing entry leaves enrollment untouched.
async fn require_historial(
    historial: &HistorialRepository<'_>,
    student_id: &str,
    group_code: &str,
) -> Result<(), AppError> {
    let context = || format!("find historial of {} in {}", student_id, group_code);

    match historial.find(student_id, group_code).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(AppError::processing(
            context(),
            sea_orm::DbErr::RecordNotFound(format!(
                "Historial entry for student {} in group {} not found",
                student_id, group_code
            )),
        )),
        Err(e) => Err(AppError::processing(context(), e)),
    }
}
