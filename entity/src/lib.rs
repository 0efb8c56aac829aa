//! SeaORM entity models for the enrollment request schema.

pub mod prelude;

pub mod course_group;
pub mod historial;
pub mod member;
pub mod request;
pub mod sea_orm_active_enums;
