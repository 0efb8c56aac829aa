//! Domain models for a student's enrollment historial.

use chrono::{DateTime, Utc};

pub use entity::sea_orm_active_enums::HistorialStatus;

/// Enrollment status of a student in a group, keyed by `(student_id, group_code)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Historial {
    pub student_id: String,
    pub group_code: String,
    pub status: HistorialStatus,
    /// When the entry was created or last superseded.
    pub updated_at: DateTime<Utc>,
}

impl Historial {
    pub fn from_entity(entity: entity::historial::Model) -> Self {
        Self {
            student_id: entity.student_id,
            group_code: entity.group_code,
            status: entity.status,
            updated_at: entity.updated_at,
        }
    }
}
