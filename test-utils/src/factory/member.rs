//! Member factory for creating faculty member entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member::MemberFactory;
///
/// let member = MemberFactory::new(&db)
///     .user_id("staff-1")
///     .faculty_id("engineering")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    faculty_id: String,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `"member_{id}"` where id is auto-incremented
    /// - faculty_id: `"faculty_{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `MemberFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: format!("member_{}", id),
            faculty_id: format!("faculty_{}", id),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn faculty_id(mut self, faculty_id: impl Into<String>) -> Self {
        self.faculty_id = faculty_id.into();
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            faculty_id: ActiveValue::Set(self.faculty_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member of the given faculty.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the staff user
/// - `faculty_id` - Faculty the user belongs to
///
/// # Returns
/// - `Ok(entity::member::Model)` - Created member entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_member(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    faculty_id: impl Into<String>,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db)
        .user_id(user_id)
        .faculty_id(faculty_id)
        .build()
        .await
}
