//! Member lookup resolving administrative staff to their faculty.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the faculty a user belongs to.
    ///
    /// # Returns
    /// - `Ok(Some(faculty_id))` - User is a known member
    /// - `Ok(None)` - User is not registered as a member
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_faculty(&self, user_id: &str) -> Result<Option<String>, DbErr> {
        let member = entity::prelude::Member::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(member.map(|m| m.faculty_id))
    }
}
