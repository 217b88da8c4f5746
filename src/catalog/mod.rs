//! Webhook event catalog.
//!
//! The catalog is a static table of [`EventDescriptor`]s; [`EventCatalog`]
//! filters it by which companion apps the injected probe reports installed.

pub mod events;
pub mod schema;
mod service;
mod types;

pub use events::CATALOG;
pub use service::EventCatalog;
pub use types::{APP_CALENDAR, APP_FORMS, APP_TABLES, EventDescriptor};
