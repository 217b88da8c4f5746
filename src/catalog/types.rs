//! Event descriptor types.

use serde::Serialize;

use super::schema::Shape;

/// App ids of the optional companion apps that produce gated events.
pub const APP_FORMS: &str = "forms";
pub const APP_TABLES: &str = "tables";
pub const APP_CALENDAR: &str = "calendar";

/// One entry in the event catalog.
///
/// Descriptors are compiled-in constants; nothing mutates them at runtime.
/// On the wire the canonical type is exposed as `path` and the payload
/// schema as `parameters`, matching what webhook consumers expect.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EventDescriptor {
    /// Unique short identifier, e.g. `"FormSubmittedEvent"`.
    pub name: &'static str,

    /// Human-readable description of when the event fires.
    pub description: &'static str,

    /// Fully-qualified type identifier of the producing module. Opaque:
    /// echoed to consumers, never parsed.
    #[serde(rename = "path")]
    pub canonical_type: &'static str,

    /// Companion app that must be installed for this event to be
    /// producible. `None` marks host-platform events that are always
    /// available.
    #[serde(skip)]
    pub required_app: Option<&'static str>,

    /// Descriptive payload shape.
    #[serde(rename = "parameters")]
    pub payload: Shape,
}
