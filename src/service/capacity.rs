//! Capacity notifier for groups approaching their seat limit.
//!
//! This module provides the `CapacityNotifier`, which is run against every group an
//! answered request mutated. When a group's occupancy reaches the configured threshold
//! each registered `CapacityObserver` is invoked. Observers are isolated from one another:
//! an observer that fails or panics is logged and skipped, and the triggering mutation is
//! never affected.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use crate::{
    config::DEFAULT_CAPACITY_ALERT_THRESHOLD, error::capacity::ObserverError, model::group::Group,
};

/// Receiver of capacity threshold notifications.
pub trait CapacityObserver: Send + Sync {
    /// Name used when logging failures of this observer.
    fn name(&self) -> &str;

    /// Handles a group whose occupancy reached the threshold.
    ///
    /// # Arguments
    /// - `group` - The group after its mutation
    /// - `occupancy_percent` - Occupancy of the group as a percentage of capacity
    fn on_threshold_reached(
        &self,
        group: &Group,
        occupancy_percent: f64,
    ) -> Result<(), ObserverError>;
}

/// Outcome of a single capacity check.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NotificationReport {
    /// Occupancy of the checked group as a percentage of capacity.
    pub occupancy_percent: f64,
    /// Whether occupancy reached the threshold.
    pub triggered: bool,
    /// Observers that handled the notification successfully.
    pub notified: usize,
    /// Observers that returned an error or panicked.
    pub failed: usize,
}

/// Notifies registered observers when group occupancy reaches a threshold.
///
/// Built once at startup with its observers and shared through application state.
pub struct CapacityNotifier {
    threshold_percent: f64,
    observers: Vec<Box<dyn CapacityObserver>>,
}

impl CapacityNotifier {
    /// Creates a notifier with no observers.
    ///
    /// # Arguments
    /// - `threshold_percent` - Occupancy percentage at or above which observers fire
    pub fn new(threshold_percent: f64) -> Self {
        Self {
            threshold_percent,
            observers: Vec::new(),
        }
    }

    /// Registers an observer, returning the notifier for chaining.
    pub fn with_observer(mut self, observer: impl CapacityObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Occupancy percentage at or above which observers fire.
    pub fn threshold_percent(&self) -> f64 {
        self.threshold_percent
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Checks a group's occupancy and notifies every observer if it reached the threshold.
    ///
    /// Each observer runs independently. Errors and panics are logged, counted in the
    /// report, and do not prevent the remaining observers from running.
    ///
    /// # Arguments
    /// - `group` - The group to check, as it stands after its mutation
    ///
    /// # Returns
    /// - `NotificationReport` - Occupancy and how many observers succeeded or failed
    pub fn check_and_notify(&self, group: &Group) -> NotificationReport {
        let occupancy_percent = group.occupancy_percent();

        if occupancy_percent < self.threshold_percent {
            return NotificationReport {
                occupancy_percent,
                ..Default::default()
            };
        }

        let mut report = NotificationReport {
            occupancy_percent,
            triggered: true,
            ..Default::default()
        };

        for observer in &self.observers {
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                observer.on_threshold_reached(group, occupancy_percent)
            }));

            match outcome {
                Ok(Ok(())) => report.notified += 1,
                Ok(Err(e)) => {
                    report.failed += 1;
                    tracing::warn!(
                        "Capacity observer {} failed for group {}: {}",
                        observer.name(),
                        group.group_code,
                        e
                    );
                }
                Err(_) => {
                    report.failed += 1;
                    tracing::error!(
                        "Capacity observer {} panicked for group {}",
                        observer.name(),
                        group.group_code
                    );
                }
            }
        }

        report
    }
}

impl Default for CapacityNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY_ALERT_THRESHOLD)
    }
}

/// Observer writing capacity alerts to the application log.
pub struct LoggingObserver;

impl CapacityObserver for LoggingObserver {
    fn name(&self) -> &str {
        "logging"
    }

    fn on_threshold_reached(
        &self,
        group: &Group,
        occupancy_percent: f64,
    ) -> Result<(), ObserverError> {
        tracing::warn!(
            "Group {} is at {:.1}% capacity ({}/{})",
            group.group_code,
            occupancy_percent,
            group.enrolled,
            group.max_capacity
        );
        Ok(())
    }
}

/// Observer collecting capacity alert messages in memory.
///
/// Clones share the same message buffer, so a clone can be registered with the notifier
/// while another is kept to read the collected messages.
#[derive(Clone, Default)]
pub struct MessageCollector {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every message collected so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl CapacityObserver for MessageCollector {
    fn name(&self) -> &str {
        "message-collector"
    }

    fn on_threshold_reached(
        &self,
        group: &Group,
        occupancy_percent: f64,
    ) -> Result<(), ObserverError> {
        let mut messages = self
            .messages
            .lock()
            .map_err(|e| ObserverError::StateUnavailable {
                observer: self.name().to_string(),
                reason: e.to_string(),
            })?;

        messages.push(format!(
            "Group {} reached {:.1}% capacity ({}/{})",
            group.group_code, occupancy_percent, group.enrolled, group.max_capacity
        ));

        Ok(())
    }
}
