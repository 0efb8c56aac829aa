use crate::{
    data::{group::GroupRepository, historial::HistorialRepository},
    error::AppError,
    model::{historial::HistorialStatus, request::Request},
};

use super::{
    apply_enrollment, load_group, require_historial, restore_group, supersede_historial,
    AnswerOutcome,
};

/// Removes the student from the origin group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CancellationStrategy;

impl CancellationStrategy {
    /// Frees one seat in the origin group and marks the student's entry as CANCELLED.
    ///
    /// The student's entry in the origin group must exist before the seat is freed. If
    /// marking it fails anyway, the seat is taken back before the error is returned.
    ///
    /// # Returns
    /// - `Ok(AnswerOutcome)` - The origin group after the seat was freed
    /// - `Err(AppError::GroupEmpty)` - Nobody is enrolled; nothing was changed
    /// - `Err(AppError::NotFound)` - Origin group does not exist
    /// - `Err(AppError::Conflict)` - Origin changed since it was read
    /// - `Err(AppError::AnswerProcessing)` - No historial entry to cancel, or database failure
    pub async fn answer(
        &self,
        groups: &GroupRepository<'_>,
        historial: &HistorialRepository<'_>,
        request: &Request,
    ) -> Result<AnswerOutcome, AppError> {
        let origin_code = request.require_origin()?;
        let origin = load_group(groups, origin_code).await?;

        let enrolled = origin.enrollment_after_leave()?;
        require_historial(historial, &request.student_id, origin_code).await?;

        let origin_after = apply_enrollment(groups, &origin, enrolled).await?;

        if let Err(e) = supersede_historial(
            historial,
            &request.student_id,
            origin_code,
            HistorialStatus::Cancelled,
        )
        .await
        {
            restore_group(groups, &origin_after, origin.enrolled).await;
            return Err(e);
        }

        Ok(AnswerOutcome {
            touched_groups: vec![origin_after],
        })
    }
}
