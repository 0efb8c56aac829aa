//! Group data repository for database operations.
//!
//! This module provides the `GroupRepository` for reading course groups and adjusting
//! their enrollment count. Enrollment updates are conditional on the count the caller
//! last read, so concurrent answers on the same group cannot overwrite each other.

use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::group::Group;

/// Repository providing database operations for course groups.
pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    /// Creates a new GroupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GroupRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a group by its code.
    ///
    /// # Arguments
    /// - `group_code` - Unique code of the group
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - Group found
    /// - `Ok(None)` - No group with that code
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_code(&self, group_code: &str) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::CourseGroup::find_by_id(group_code.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Sets a group's enrollment count if it still holds the expected value.
    ///
    /// Performs a compare-and-swap on the `enrolled` column; every other column is left
    /// unchanged. Callers are responsible for checking the capacity bounds of `enrolled`
    /// before calling.
    ///
    /// # Arguments
    /// - `group_code` - Code of the group to update
    /// - `expected` - Enrollment count the caller read before deciding on the update
    /// - `enrolled` - New enrollment count
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - The updated group
    /// - `Ok(None)` - The group is missing or its count no longer matches `expected`
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_enrolled(
        &self,
        group_code: &str,
        expected: i32,
        enrolled: i32,
    ) -> Result<Option<Group>, DbErr> {
        let result = entity::prelude::CourseGroup::update_many()
            .col_expr(entity::course_group::Column::Enrolled, Expr::value(enrolled))
            .filter(entity::course_group::Column::GroupCode.eq(group_code))
            .filter(entity::course_group::Column::Enrolled.eq(expected))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_code(group_code).await
    }
}
