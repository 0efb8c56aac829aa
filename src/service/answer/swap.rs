use crate::{
    data::{group::GroupRepository, historial::HistorialRepository},
    error::AppError,
    model::{group::Group, historial::HistorialStatus, request::Request},
};

use super::{
    apply_enrollment, load_group, record_on_going, require_historial, restore_group,
    supersede_historial, AnswerOutcome,
};

/// Moves the student from the origin group to the destination group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwapStrategy;

impl SwapStrategy {
    /// Frees a seat in the origin group and fills one in the destination group.
    ///
    /// Both capacity checks and the student's origin entry are verified before anything
    /// is written. The destination is recorded as ON_GOING, reusing an earlier entry when
    /// the student swaps back into a group they left, and the origin entry becomes
    /// SWAPPED.
    ///
    /// # Returns
    /// - `Ok(AnswerOutcome)` - Origin and destination groups after the swap
    /// - `Err(AppError::GroupFull)` - Destination has no seat; nothing was changed
    /// - `Err(AppError::GroupEmpty)` - Origin has nobody enrolled; nothing was changed
    /// - `Err(AppError::NotFound)` - Either group does not exist
    /// - `Err(AppError::BadRequest)` - Origin and destination are the same group
    /// - `Err(AppError::Conflict)` - A group changed since it was read; nothing was kept
    /// - `Err(AppError::AnswerProcessing)` - No origin entry, or database failure
    pub async fn answer(
        &self,
        groups: &GroupRepository<'_>,
        historial: &HistorialRepository<'_>,
        request: &Request,
    ) -> Result<AnswerOutcome, AppError> {
        let origin_code = request.require_origin()?;
        let destination_code = request.require_destination()?;

        if origin_code == destination_code {
            return Err(AppError::BadRequest(format!(
                "Request {} swaps group {} with itself",
                request.id, origin_code
            )));
        }

        let origin = load_group(groups, origin_code).await?;
        let destination = load_group(groups, destination_code).await?;

        destination.enrollment_after_join()?;
        origin.enrollment_after_leave()?;
        require_historial(historial, &request.student_id, origin_code).await?;

        Self::move_student(groups, historial, &request.student_id, &origin, &destination).await
    }

    /// Writes the swap for groups as they were read.
    ///
    /// The two enrollment updates are separate conditional statements. Any failure after
    /// a group moved reverts the groups already moved before the error is returned.
    async fn move_student(
        groups: &GroupRepository<'_>,
        historial: &HistorialRepository<'_>,
        student_id: &str,
        origin: &Group,
        destination: &Group,
    ) -> Result<AnswerOutcome, AppError> {
        let origin_enrolled = origin.enrollment_after_leave()?;
        let destination_enrolled = destination.enrollment_after_join()?;

        let origin_after = apply_enrollment(groups, origin, origin_enrolled).await?;
        let destination_after =
            match apply_enrollment(groups, destination, destination_enrolled).await {
                Ok(group) => group,
                Err(e) => {
                    restore_group(groups, &origin_after, origin.enrolled).await;
                    return Err(e);
                }
            };

        let recorded = async {
            record_on_going(historial, student_id, &destination.group_code).await?;
            supersede_historial(
                historial,
                student_id,
                &origin.group_code,
                HistorialStatus::Swapped,
            )
            .await
        }
        .await;

        if let Err(e) = recorded {
            restore_group(groups, &destination_after, destination.enrolled).await;
            restore_group(groups, &origin_after, origin.enrolled).await;
            return Err(e);
        }

        Ok(AnswerOutcome {
            touched_groups: vec![origin_after, destination_after],
        })
    }
}
