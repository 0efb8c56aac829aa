//! Application state shared across all callers.
//!
//! This module defines the `AppState` struct which holds the long-lived resources the
//! request service borrows. The state is assembled once during startup and cloned
//! cheaply wherever it is needed.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::service::{
    capacity::{CapacityNotifier, MessageCollector},
    request::RequestService,
};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<CapacityNotifier>` is a reference-counted pointer
/// - `MessageCollector` shares its message buffer between clones
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Capacity notifier with its observers registered at startup.
    pub capacity_notifier: Arc<CapacityNotifier>,

    /// Capacity alerts collected by the notifier's message-collecting observer.
    pub capacity_alerts: MessageCollector,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `capacity_notifier` - Notifier run after answers mutate groups
    /// - `capacity_alerts` - Collector registered with `capacity_notifier`
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        capacity_notifier: CapacityNotifier,
        capacity_alerts: MessageCollector,
    ) -> Self {
        Self {
            db,
            capacity_notifier: Arc::new(capacity_notifier),
            capacity_alerts,
        }
    }

    /// Creates a request service borrowing this state's resources.
    pub fn request_service(&self) -> RequestService<'_> {
        RequestService::new(&self.db, &self.capacity_notifier)
    }
}
