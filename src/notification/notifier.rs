//! Notifier port and notification errors.

use super::domain::Notification;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Port for delivering notifications to the user.
///
/// Delivery is fire-and-forget from the caller's point of view: a failed
/// delivery never rolls back the operation it reports on.
pub trait Notifier: Send + Sync {
    /// Delivers a notification.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Sink`] when the delivery channel fails.
    fn notify(&self, notification: Notification) -> NotificationResult<()>;
}

/// Errors raised while building or delivering notifications.
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// No template with the requested name exists in the catalog.
    #[error("unknown notification template: {0}")]
    UnknownTemplate(String),

    /// Template rendering failed.
    #[error("rendering notification template '{name}' failed: {reason}")]
    TemplateRender {
        /// The template that failed to render.
        name: String,
        /// Description of the rendering failure.
        reason: String,
    },

    /// The delivery channel failed.
    #[error("notification sink error: {0}")]
    Sink(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationError {
    /// Wraps a delivery-channel failure.
    pub fn sink(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Sink(Arc::new(err))
    }
}
