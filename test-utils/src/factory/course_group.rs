//! Course group factory for creating test group entities.
//!
//! This module provides factory methods for inserting course groups with sensible
//! defaults. Capacity and enrollment are the fields tests usually override.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test course groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::course_group::CourseGroupFactory;
///
/// let group = CourseGroupFactory::new(&db)
///     .group_code("MATH-101-1")
///     .max_capacity(5)
///     .enrolled(4)
///     .build()
///     .await?;
/// ```
pub struct CourseGroupFactory<'a> {
    db: &'a DatabaseConnection,
    group_code: String,
    professor_id: String,
    is_lab: bool,
    group_num: i32,
    max_capacity: i32,
    enrolled: i32,
}

impl<'a> CourseGroupFactory<'a> {
    /// Creates a new CourseGroupFactory with default values.
    ///
    /// Defaults:
    /// - group_code: `"GROUP-{id}"` where id is auto-incremented
    /// - professor_id: `"professor_{id}"`
    /// - is_lab: `false`
    /// - group_num: `1`
    /// - max_capacity: `30`
    /// - enrolled: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CourseGroupFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            group_code: format!("GROUP-{}", id),
            professor_id: format!("professor_{}", id),
            is_lab: false,
            group_num: 1,
            max_capacity: 30,
            enrolled: 0,
        }
    }

    /// Sets the group code.
    ///
    /// # Arguments
    /// - `group_code` - Unique code identifying the group
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn group_code(mut self, group_code: impl Into<String>) -> Self {
        self.group_code = group_code.into();
        self
    }

    /// Marks the group as a lab section.
    pub fn lab(mut self, is_lab: bool) -> Self {
        self.is_lab = is_lab;
        self
    }

    /// Sets the group number within its course.
    pub fn group_num(mut self, group_num: i32) -> Self {
        self.group_num = group_num;
        self
    }

    /// Sets the seat limit.
    ///
    /// # Arguments
    /// - `max_capacity` - Maximum number of enrolled students
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn max_capacity(mut self, max_capacity: i32) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Sets the number of students already enrolled.
    ///
    /// # Arguments
    /// - `enrolled` - Current enrollment count
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn enrolled(mut self, enrolled: i32) -> Self {
        self.enrolled = enrolled;
        self
    }

    /// Builds and inserts the course group entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course_group::Model)` - Created group entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course_group::Model, DbErr> {
        entity::course_group::ActiveModel {
            group_code: ActiveValue::Set(self.group_code),
            professor_id: ActiveValue::Set(self.professor_id),
            is_lab: ActiveValue::Set(self.is_lab),
            group_num: ActiveValue::Set(self.group_num),
            max_capacity: ActiveValue::Set(self.max_capacity),
            enrolled: ActiveValue::Set(self.enrolled),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course group with default values.
///
/// Shorthand for `CourseGroupFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::course_group::Model)` - Created group entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::course_group::Model, DbErr> {
    CourseGroupFactory::new(db).build().await
}

/// Creates a course group holding `enrolled` of `max_capacity` seats.
///
/// # Arguments
/// - `db` - Database connection
/// - `enrolled` - Current enrollment count
/// - `max_capacity` - Seat limit
///
/// # Returns
/// - `Ok(entity::course_group::Model)` - Created group entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_group_with_occupancy(
    db: &DatabaseConnection,
    enrolled: i32,
    max_capacity: i32,
) -> Result<entity::course_group::Model, DbErr> {
    CourseGroupFactory::new(db)
        .enrolled(enrolled)
        .max_capacity(max_capacity)
        .build()
        .await
}
