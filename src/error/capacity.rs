use thiserror::Error;

/// Failure raised by a capacity observer while handling a notification.
///
/// Observer failures are isolated by the capacity notifier: they are logged and counted
/// but never abort sibling observers or the mutation that triggered the check.
#[derive(Error, Debug)]
pub enum ObserverError {
    /// The observer's internal state could not be accessed.
    #[error("Observer '{observer}' state unavailable: {reason}")]
    StateUnavailable { observer: String, reason: String },

    /// The observer could not deliver or record the notification.
    #[error("Observer '{observer}' failed to handle notification: {reason}")]
    Delivery { observer: String, reason: String },
}
