//! Built-in notification message templates.
//!
//! Each template pairs a fixed title with a `minijinja` body template.
//! Services render notifications by template name with a small context
//! map, keeping user-facing wording out of orchestration code.

use super::domain::{Notification, NotificationKind};
use super::notifier::NotificationError;
use minijinja::Environment;
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct MessageTemplate {
    kind: NotificationKind,
    title: &'static str,
    body: &'static str,
}

/// Catalog of the built-in notification templates.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: HashMap<&'static str, MessageTemplate>,
}

impl TemplateCatalog {
    /// Template name for a committed packet reassignment.
    pub const REASSIGNMENT_COMPLETED: &'static str = "reassignment_completed";
    /// Template name for a refused packet reassignment.
    pub const REASSIGNMENT_REJECTED: &'static str = "reassignment_rejected";
    /// Template name for a recorded packet entry.
    pub const PACKET_ENTRY_RECORDED: &'static str = "packet_entry_recorded";
    /// Template name for a refused packet entry.
    pub const PACKET_ENTRY_REJECTED: &'static str = "packet_entry_rejected";
    /// Template name for a created laser lot.
    pub const LOT_CREATED: &'static str = "lot_created";
    /// Template name for a refused laser lot.
    pub const LOT_REJECTED: &'static str = "lot_rejected";
    /// Template name for a returned laser lot.
    pub const LOT_RETURNED: &'static str = "lot_returned";
    /// Template name for a refused lot return.
    pub const RETURN_REJECTED: &'static str = "return_rejected";
    /// Template name for a persisted default sender.
    pub const DEFAULT_SENDER_SAVED: &'static str = "default_sender_saved";
    /// Template name for a rule-driven machine assignment.
    pub const MACHINE_ASSIGNED: &'static str = "machine_assigned";

    /// Creates the catalog of built-in templates.
    #[must_use]
    pub fn new() -> Self {
        let templates = HashMap::from([
            (
                Self::REASSIGNMENT_COMPLETED,
                MessageTemplate {
                    kind: NotificationKind::Success,
                    title: "Packets Reassigned Successfully",
                    body: "{{ quantity }} packets transferred from {{ from }} to {{ to }}",
                },
            ),
            (
                Self::REASSIGNMENT_REJECTED,
                MessageTemplate {
                    kind: NotificationKind::Error,
                    title: "Reassignment Rejected",
                    body: "{{ reason }}",
                },
            ),
            (
                Self::PACKET_ENTRY_RECORDED,
                MessageTemplate {
                    kind: NotificationKind::Success,
                    title: "Packet Added Successfully",
                    body: "{{ quantity }} packets added to lot {{ lot }}",
                },
            ),
            (
                Self::PACKET_ENTRY_REJECTED,
                MessageTemplate {
                    kind: NotificationKind::Error,
                    title: "Packet Entry Rejected",
                    body: "{{ reason }}",
                },
            ),
            (
                Self::LOT_CREATED,
                MessageTemplate {
                    kind: NotificationKind::Success,
                    title: "Laser Lot Created Successfully",
                    body: "Lot {{ lot }} created with {{ quantity }} packets",
                },
            ),
            (
                Self::LOT_REJECTED,
                MessageTemplate {
                    kind: NotificationKind::Error,
                    title: "Laser Lot Rejected",
                    body: "{{ reason }}",
                },
            ),
            (
                Self::LOT_RETURNED,
                MessageTemplate {
                    kind: NotificationKind::Success,
                    title: "Lot Returned Successfully",
                    body: "Lot {{ lot }} has been marked as returned",
                },
            ),
            (
                Self::RETURN_REJECTED,
                MessageTemplate {
                    kind: NotificationKind::Error,
                    title: "Lot Return Rejected",
                    body: "{{ reason }}",
                },
            ),
            (
                Self::DEFAULT_SENDER_SAVED,
                MessageTemplate {
                    kind: NotificationKind::Success,
                    title: "Default Sender Saved",
                    body: "{{ sender }} will be auto-filled in future entries",
                },
            ),
            (
                Self::MACHINE_ASSIGNED,
                MessageTemplate {
                    kind: NotificationKind::Success,
                    title: "Smart Assignment",
                    body: "Machine {{ machine }} auto-selected for {{ trigger }}",
                },
            ),
        ]);
        Self { templates }
    }

    /// Renders a notification from a named template and context values.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::UnknownTemplate`] when no template has
    /// the given name, or [`NotificationError::TemplateRender`] when the
    /// body template fails to render against the supplied context.
    pub fn render(
        &self,
        name: &str,
        context: &Map<String, Value>,
    ) -> Result<Notification, NotificationError> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| NotificationError::UnknownTemplate(name.to_owned()))?;
        let body = render_body(name, template.body, context)?;
        Ok(Notification::new(template.kind, template.title, body))
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn render_body(
    name: &str,
    template: &str,
    context: &Map<String, Value>,
) -> Result<String, NotificationError> {
    let environment = Environment::new();
    environment
        .render_str(template, context)
        .map_err(|error| NotificationError::TemplateRender {
            name: name.to_owned(),
            reason: error.to_string(),
        })
}
