//! Recording notifier for tests and local runs.

use super::domain::Notification;
use super::notifier::{NotificationResult, Notifier};
use std::sync::{Arc, RwLock};

/// Thread-safe notifier that records everything it is asked to deliver.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates an empty recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every notification delivered so far, oldest first.
    ///
    /// Returns an empty list when the record lock is poisoned; recorded
    /// notifications are diagnostics, not state.
    #[must_use]
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .read()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent notification, if any.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.sent
            .read()
            .ok()
            .and_then(|sent| sent.last().cloned())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) -> NotificationResult<()> {
        if let Ok(mut sent) = self.sent.write() {
            sent.push(notification);
        }
        Ok(())
    }
}
