use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::Config,
    error::AppError,
    service::capacity::{CapacityNotifier, LoggingObserver, MessageCollector},
    state::AppState,
};

/// Installs the global tracing subscriber.
///
/// Log levels are read from `RUST_LOG`, defaulting to `info`. Calling this more than once
/// keeps the first subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the capacity notifier with the observers registered for the process lifetime.
///
/// # Arguments
/// - `config` - Application configuration containing the capacity alert threshold
/// - `collector` - Message collector kept by the caller to read collected alerts
///
/// # Returns
/// - `CapacityNotifier` - Notifier with logging and message-collecting observers
pub fn build_capacity_notifier(config: &Config, collector: MessageCollector) -> CapacityNotifier {
    CapacityNotifier::new(config.capacity_alert_threshold)
        .with_observer(LoggingObserver)
        .with_observer(collector)
}

/// Assembles the application state from the environment.
///
/// Loads `.env` if present, reads configuration, installs tracing, connects to the
/// database and registers capacity observers.
///
/// # Returns
/// - `Ok(AppState)` - Ready state, including the collected capacity alerts
/// - `Err(AppError)` - Missing configuration or database failure
pub async fn bootstrap() -> Result<AppState, AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    init_tracing();

    let db = connect_to_database(&config).await?;

    let collector = MessageCollector::new();
    let notifier = build_capacity_notifier(&config, collector.clone());

    tracing::info!(
        "Enrollment engine ready (capacity alert threshold {:.1}%)",
        notifier.threshold_percent()
    );

    Ok(AppState::new(db, notifier, collector))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_logging_and_collecting_observers() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            capacity_alert_threshold: 75.0,
        };

        let notifier = build_capacity_notifier(&config, MessageCollector::new());

        assert_eq!(notifier.threshold_percent(), 75.0);
        assert_eq!(notifier.observer_count(), 2);
    }
}
