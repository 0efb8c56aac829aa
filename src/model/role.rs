//! Caller roles used to scope request visibility.

use std::str::FromStr;

use crate::error::AppError;

/// Role of the user asking to see requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A student, who only sees their own requests.
    Student,
    /// Department staff handling their faculty's queue.
    Administrative,
    /// Top-level administrator handling escalated requests.
    Administrator,
}

impl FromStr for Role {
    type Err = AppError;

    /// Parses a role name case-insensitively.
    ///
    /// # Returns
    /// - `Ok(Role)` - For `STUDENT`, `ADMINISTRATIVE` or `ADMINISTRATOR`
    /// - `Err(AppError::UnsupportedRole)` - For any other value
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "STUDENT" => Ok(Self::Student),
            "ADMINISTRATIVE" => Ok(Self::Administrative),
            "ADMINISTRATOR" => Ok(Self::Administrator),
            _ => Err(AppError::UnsupportedRole(value.to_string())),
        }
    }
}
