//! Course group fixtures for creating in-memory test data.

use entity::course_group;

/// Default test group code.
pub const DEFAULT_GROUP_CODE: &str = "CS-101-1";

/// Default test professor ID.
pub const DEFAULT_PROFESSOR_ID: &str = "professor-1";

/// Default seat limit.
pub const DEFAULT_MAX_CAPACITY: i32 = 30;

/// Creates a course group entity model with default values.
///
/// # Default Values
/// - group_code: `"CS-101-1"`
/// - professor_id: `"professor-1"`
/// - is_lab: `false`
/// - group_num: `1`
/// - max_capacity: `30`
/// - enrolled: `0`
///
/// # Returns
/// - `course_group::Model` - In-memory course group entity
pub fn entity() -> course_group::Model {
    course_group::Model {
        group_code: DEFAULT_GROUP_CODE.to_string(),
        professor_id: DEFAULT_PROFESSOR_ID.to_string(),
        is_lab: false,
        group_num: 1,
        max_capacity: DEFAULT_MAX_CAPACITY,
        enrolled: 0,
    }
}

/// Creates a course group entity builder for customization.
///
/// # Returns
/// - `CourseGroupEntityBuilder` - Builder instance with default values
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let group = fixture::course_group::entity_builder()
///     .max_capacity(10)
///     .enrolled(9)
///     .build();
/// ```
pub fn entity_builder() -> CourseGroupEntityBuilder {
    CourseGroupEntityBuilder::default()
}

/// Builder for creating customized course group entity models.
pub struct CourseGroupEntityBuilder {
    entity: course_group::Model,
}

impl Default for CourseGroupEntityBuilder {
    fn default() -> Self {
        Self { entity: entity() }
    }
}

impl CourseGroupEntityBuilder {
    /// Sets the group code.
    ///
    /// # Arguments
    /// - `group_code` - Unique code identifying the group
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn group_code(mut self, group_code: impl Into<String>) -> Self {
        self.entity.group_code = group_code.into();
        self
    }

    pub fn lab(mut self, is_lab: bool) -> Self {
        self.entity.is_lab = is_lab;
        self
    }

    /// Sets the seat limit.
    ///
    /// # Arguments
    /// - `max_capacity` - Maximum number of enrolled students
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn max_capacity(mut self, max_capacity: i32) -> Self {
        self.entity.max_capacity = max_capacity;
        self
    }

    /// Sets the current enrollment count.
    ///
    /// # Arguments
    /// - `enrolled` - Number of students enrolled
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn enrolled(mut self, enrolled: i32) -> Self {
        self.entity.enrolled = enrolled;
        self
    }

    /// Builds and returns the course group entity model.
    ///
    /// # Returns
    /// - `course_group::Model` - Course group entity with configured values
    pub fn build(self) -> course_group::Model {
        self.entity
    }
}
