//! Application state shared across all handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::EventCatalog;
use crate::config::Config;
use crate::probe::{AppDirProbe, AvailabilityProbe, FixedProbe};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap. Everything here is an
/// immutable snapshot taken at startup; requests never mutate it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// The event catalog with its injected availability probe.
    catalog: EventCatalog,

    /// Apps directory backing the filesystem probe. `None` when
    /// availability is pinned via `AVAILABLE_APPS`, in which case the
    /// health check has no directory to verify.
    apps_dir: Option<PathBuf>,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// `AVAILABLE_APPS` pins availability to an explicit set; otherwise the
    /// apps directory on disk is probed per request.
    pub fn new(config: &Config) -> Self {
        match &config.available_apps {
            Some(apps) => Self::with_probe(Arc::new(FixedProbe::new(apps.iter().cloned())), None),
            None => Self::with_probe(
                Arc::new(AppDirProbe::new(&config.apps_dir)),
                Some(config.apps_dir.clone()),
            ),
        }
    }

    /// Create application state with an explicit probe.
    pub fn with_probe(probe: Arc<dyn AvailabilityProbe>, apps_dir: Option<PathBuf>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                catalog: EventCatalog::new(probe),
                apps_dir,
            }),
        }
    }

    /// Get the event catalog.
    pub fn catalog(&self) -> &EventCatalog {
        &self.inner.catalog
    }

    /// Get the apps directory path, when filesystem probing is in effect.
    pub fn apps_dir(&self) -> Option<&Path> {
        self.inner.apps_dir.as_deref()
    }

    /// Check that the apps directory is readable. Trivially true when
    /// availability is pinned and no directory is consulted.
    pub fn apps_dir_healthy(&self) -> bool {
        match &self.inner.apps_dir {
            Some(dir) => std::fs::read_dir(dir).is_ok(),
            None => true,
        }
    }
}
