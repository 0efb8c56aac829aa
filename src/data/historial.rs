//! Historial data repository for database operations.
//!
//! This module provides the `HistorialRepository`, the record of each student's
//! enrollment status per group. Entries are keyed by `(student_id, group_code)` so a pair
//! holds at most one entry; later changes supersede it through `update_status`.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::historial::{Historial, HistorialStatus};

/// Repository providing database operations for enrollment historial entries.
pub struct HistorialRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HistorialRepository<'a> {
    /// Creates a new HistorialRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `HistorialRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a new historial entry for a student and group.
    ///
    /// Fails if an entry already exists for the pair, since the pair is the primary key.
    ///
    /// # Arguments
    /// - `student_id` - ID of the student
    /// - `group_code` - Code of the group
    /// - `status` - Enrollment status to record
    ///
    /// # Returns
    /// - `Ok(Historial)` - The created entry
    /// - `Err(DbErr)` - Entry already exists, group missing, or other database error
    pub async fn add(
        &self,
        student_id: &str,
        group_code: &str,
        status: HistorialStatus,
    ) -> Result<Historial, DbErr> {
        let entity = entity::historial::ActiveModel {
            student_id: ActiveValue::Set(student_id.to_string()),
            group_code: ActiveValue::Set(group_code.to_string()),
            status: ActiveValue::Set(status),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Historial::from_entity(entity))
    }

    /// Replaces the status of the existing entry for a student and group.
    ///
    /// # Arguments
    /// - `student_id` - ID of the student
    /// - `group_code` - Code of the group
    /// - `status` - New enrollment status
    ///
    /// # Returns
    /// - `Ok(Some(Historial))` - The updated entry
    /// - `Ok(None)` - No entry exists for the pair
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        student_id: &str,
        group_code: &str,
        status: HistorialStatus,
    ) -> Result<Option<Historial>, DbErr> {
        let Some(entity) = entity::prelude::Historial::find_by_id((
            student_id.to_string(),
            group_code.to_string(),
        ))
        .one(self.db)
        .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::historial::ActiveModel = entity.into();
        active_model.status = ActiveValue::Set(status);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(Historial::from_entity(updated)))
    }

    /// Finds the entry for a student and group.
    ///
    /// # Returns
    /// - `Ok(Some(Historial))` - Entry found
    /// - `Ok(None)` - No entry for the pair
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(
        &self,
        student_id: &str,
        group_code: &str,
    ) -> Result<Option<Historial>, DbErr> {
        let entity = entity::prelude::Historial::find_by_id((
            student_id.to_string(),
            group_code.to_string(),
        ))
        .one(self.db)
        .await?;

        Ok(entity.map(Historial::from_entity))
    }
}
