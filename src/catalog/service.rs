//! Catalog filtering service.

use std::sync::Arc;

use tracing::warn;

use crate::probe::AvailabilityProbe;

use super::events::CATALOG;
use super::types::EventDescriptor;

/// Lists the events available for webhook registration in this deployment.
///
/// Holds only the injected availability probe; the catalog itself is a
/// compiled-in constant. Listing is read-only and deterministic for a fixed
/// set of installed apps.
#[derive(Clone)]
pub struct EventCatalog {
    probe: Arc<dyn AvailabilityProbe>,
}

impl EventCatalog {
    pub fn new(probe: Arc<dyn AvailabilityProbe>) -> Self {
        Self { probe }
    }

    /// Return the catalog entries whose producing app is installed, in
    /// declaration order.
    ///
    /// A failing probe only drops its own descriptor: partial results beat
    /// a failed listing for a discovery endpoint.
    pub fn list(&self) -> Vec<&'static EventDescriptor> {
        CATALOG
            .iter()
            .filter(|descriptor| match descriptor.required_app {
                None => true,
                Some(app) => match self.probe.is_available(app) {
                    Ok(available) => available,
                    Err(e) => {
                        warn!(
                            app = %app,
                            event = %descriptor.name,
                            error = %e,
                            "availability probe failed; omitting event"
                        );
                        false
                    }
                },
            })
            .collect()
    }

    /// Total number of catalogued events, installed or not.
    pub fn size(&self) -> usize {
        CATALOG.len()
    }
}

impl std::fmt::Debug for EventCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventCatalog")
            .field("size", &CATALOG.len())
            .finish()
    }
}
