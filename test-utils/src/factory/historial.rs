//! Historial factory for creating enrollment history entries.
//!
//! Entries reference a course group by code, so the group must exist first.

use chrono::Utc;
use entity::sea_orm_active_enums::HistorialStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test historial entries.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::historial::HistorialFactory;
///
/// let entry = HistorialFactory::new(&db, "student-1", &group.group_code)
///     .status(HistorialStatus::Cancelled)
///     .build()
///     .await?;
/// ```
pub struct HistorialFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: String,
    group_code: String,
    status: HistorialStatus,
}

impl<'a> HistorialFactory<'a> {
    /// Creates a new HistorialFactory for a student in a group.
    ///
    /// Defaults:
    /// - status: `HistorialStatus::OnGoing`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `student_id` - Student the entry belongs to
    /// - `group_code` - Code of an existing course group
    ///
    /// # Returns
    /// - `HistorialFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        student_id: impl Into<String>,
        group_code: impl Into<String>,
    ) -> Self {
        Self {
            db,
            student_id: student_id.into(),
            group_code: group_code.into(),
            status: HistorialStatus::OnGoing,
        }
    }

    pub fn status(mut self, status: HistorialStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the historial entry into the database.
    ///
    /// # Returns
    /// - `Ok(entity::historial::Model)` - Created historial entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::historial::Model, DbErr> {
        entity::historial::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            group_code: ActiveValue::Set(self.group_code),
            status: ActiveValue::Set(self.status),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an ON_GOING historial entry for a student in a group.
///
/// # Arguments
/// - `db` - Database connection
/// - `student_id` - Student the entry belongs to
/// - `group_code` - Code of an existing course group
///
/// # Returns
/// - `Ok(entity::historial::Model)` - Created historial entry
/// - `Err(DbErr)` - Database error during insert
pub async fn create_historial(
    db: &DatabaseConnection,
    student_id: impl Into<String>,
    group_code: impl Into<String>,
) -> Result<entity::historial::Model, DbErr> {
    HistorialFactory::new(db, student_id, group_code)
        .build()
        .await
}
