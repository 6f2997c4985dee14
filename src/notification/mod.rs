//! User-facing notifications for Lapidary.
//!
//! Services report every accepted or refused operation through the
//! [`Notifier`] port. Message bodies are rendered from a catalog of
//! built-in `minijinja` templates so wording lives in one place rather
//! than being scattered through the services.

mod domain;
mod memory;
mod notifier;
mod templates;

pub use domain::{Notification, NotificationKind};
pub use memory::RecordingNotifier;
pub use notifier::{NotificationError, NotificationResult, Notifier};
pub use templates::TemplateCatalog;
