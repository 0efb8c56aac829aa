pub use super::course_group::Entity as CourseGroup;
pub use super::historial::Entity as Historial;
pub use super::member::Entity as Member;
pub use super::request::Entity as Request;
