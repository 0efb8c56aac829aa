//! Domain models for course groups.

use crate::error::AppError;

/// A scheduled course section with bounded capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Unique code identifying the group.
    pub group_code: String,
    /// ID of the professor teaching the group.
    pub professor_id: String,
    /// Whether the group is a laboratory section.
    pub is_lab: bool,
    /// Section number within the course.
    pub group_num: i32,
    /// Maximum number of students allowed.
    pub max_capacity: i32,
    /// Number of students currently enrolled.
    pub enrolled: i32,
}

impl Group {
    /// Converts an entity model to a group domain model at the repository boundary.
    pub fn from_entity(entity: entity::course_group::Model) -> Self {
        Self {
            group_code: entity.group_code,
            professor_id: entity.professor_id,
            is_lab: entity.is_lab,
            group_num: entity.group_num,
            max_capacity: entity.max_capacity,
            enrolled: entity.enrolled,
        }
    }

    /// Whether no seat is left in the group.
    pub fn is_full(&self) -> bool {
        self.enrolled >= self.max_capacity
    }

    /// Occupancy as a percentage of maximum capacity.
    ///
    /// Groups with no capacity report 0 rather than dividing by zero.
    pub fn occupancy_percent(&self) -> f64 {
        if self.max_capacity <= 0 {
            return 0.0;
        }

        f64::from(self.enrolled) / f64::from(self.max_capacity) * 100.0
    }

    /// Computes the enrollment count after adding one student.
    ///
    /// # Returns
    /// - `Ok(i32)` - The new enrollment count
    /// - `Err(AppError::GroupFull)` - The group has no free seat
    pub fn enrollment_after_join(&self) -> Result<i32, AppError> {
        if self.is_full() {
            return Err(AppError::GroupFull {
                group_code: self.group_code.clone(),
            });
        }

        Ok(self.enrolled + 1)
    }

    /// Computes the enrollment count after removing one student.
    ///
    /// # Returns
    /// - `Ok(i32)` - The new enrollment count
    /// - `Err(AppError::GroupEmpty)` - Nobody is enrolled in the group
    pub fn enrollment_after_leave(&self) -> Result<i32, AppError> {
        if self.enrolled <= 0 {
            return Err(AppError::GroupEmpty {
                group_code: self.group_code.clone(),
            });
        }

        Ok(self.enrolled - 1)
    }
}
