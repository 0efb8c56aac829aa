use crate::{
    data::{group::GroupRepository, historial::HistorialRepository},
    error::AppError,
    model::request::Request,
};

use super::{apply_enrollment, load_group, record_on_going, restore_group, AnswerOutcome};

/// Enrolls the student in the destination group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoinStrategy;

impl JoinStrategy {
    /// Fills one seat in the destination group and records the student as ON_GOING.
    ///
    /// If the student already has a historial entry for the group, that entry is moved
    /// back to ON_GOING instead of adding a duplicate. If the historial cannot be
    /// written, the seat is released again before the error is returned.
    ///
    /// # Returns
    /// - `Ok(AnswerOutcome)` - The destination group after enrollment
    /// - `Err(AppError::GroupFull)` - No seat left; nothing was changed
    /// - `Err(AppError::NotFound)` - Destination group does not exist
    /// - `Err(AppError::Conflict)` - Destination changed since it was read
    /// - `Err(AppError::AnswerProcessing)` - Database failure while updating
    pub async fn answer(
        &self,
        groups: &GroupRepository<'_>,
        historial: &HistorialRepository<'_>,
        request: &Request,
    ) -> Result<AnswerOutcome, AppError> {
        let destination_code = request.require_destination()?;
        let destination = load_group(groups, destination_code).await?;

        let enrolled = destination.enrollment_after_join()?;
        let destination_after = apply_enrollment(groups, &destination, enrolled).await?;

        if let Err(e) = record_on_going(historial, &request.student_id, destination_code).await {
            restore_group(groups, &destination_after, destination.enrolled).await;
            return Err(e);
        }

        Ok(AnswerOutcome {
            touched_groups: vec![destination_after],
        })
    }
}
