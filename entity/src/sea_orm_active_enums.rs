use sea_orm::entity::prelude::*;

/// Kind of change a student asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum RequestType {
    #[sea_orm(string_value = "JOIN")]
    Join,
    #[sea_orm(string_value = "CANCELLATION")]
    Cancellation,
    #[sea_orm(string_value = "SWAP")]
    Swap,
    /// Escalated case handled by top-level administrators.
    #[sea_orm(string_value = "EXCEPTIONAL")]
    Exceptional,
}

/// Lifecycle status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum RequestStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
    #[sea_orm(string_value = "IN_REVIEW")]
    InReview,
    #[sea_orm(string_value = "WAITING")]
    Waiting,
}

/// Enrollment status recorded in a student's historial for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum HistorialStatus {
    #[sea_orm(string_value = "ON_GOING")]
    OnGoing,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
    #[sea_orm(string_value = "SWAPPED")]
    Swapped,
}
