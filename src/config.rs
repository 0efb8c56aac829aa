use crate::error::{config::ConfigError, AppError};

/// Occupancy percentage at which groups trigger a capacity notification.
pub const DEFAULT_CAPACITY_ALERT_THRESHOLD: f64 = 90.0;

pub struct Config {
    pub database_url: String,

    /// Occupancy percentage (0-100) at or above which capacity observers are notified.
    pub capacity_alert_threshold: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            capacity_alert_threshold: match std::env::var("CAPACITY_ALERT_THRESHOLD") {
                Ok(value) => parse_threshold(&value)?,
                Err(_) => DEFAULT_CAPACITY_ALERT_THRESHOLD,
            },
        })
    }
}

/// Parses a capacity alert threshold, accepting only percentages within `0..=100`.
fn parse_threshold(value: &str) -> Result<f64, ConfigError> {
    let invalid = || ConfigError::InvalidEnvVar {
        name: "CAPACITY_ALERT_THRESHOLD".to_string(),
        value: value.to_string(),
    };

    let threshold = value.trim().parse::<f64>().map_err(|_| invalid())?;
    if !(0.0..=100.0).contains(&threshold) {
        return Err(invalid());
    }

    Ok(threshold)
}
