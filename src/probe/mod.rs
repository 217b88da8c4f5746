//! Companion app availability probes.
//!
//! The catalog service never inspects the environment itself; it asks an
//! injected [`AvailabilityProbe`]. Production uses [`AppDirProbe`] against
//! the platform's apps directory; an `AVAILABLE_APPS` override and the test
//! suite use [`FixedProbe`].

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// A boolean capability check: is the named companion app installed?
///
/// Implementations must be idempotent and side-effect-free per request.
/// Errors mean the probe itself could not be evaluated; callers treat that
/// as "not available" rather than failing the listing.
pub trait AvailabilityProbe: Send + Sync {
    fn is_available(&self, app_id: &str) -> Result<bool>;
}

/// Probes the host platform's apps directory on disk.
///
/// An app counts as installed when `<apps_dir>/<app_id>/appinfo` exists,
/// the layout the platform uses for every installed app.
#[derive(Debug)]
pub struct AppDirProbe {
    apps_dir: PathBuf,
}

impl AppDirProbe {
    pub fn new(apps_dir: impl Into<PathBuf>) -> Self {
        Self {
            apps_dir: apps_dir.into(),
        }
    }
}

impl AvailabilityProbe for AppDirProbe {
    fn is_available(&self, app_id: &str) -> Result<bool> {
        let marker = self.apps_dir.join(app_id).join("appinfo");

        match std::fs::metadata(&marker) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("failed to probe {}", marker.display())),
        }
    }
}

/// Reports availability from an explicit set of app ids.
#[derive(Debug, Default)]
pub struct FixedProbe {
    available: HashSet<String>,
}

impl FixedProbe {
    pub fn new<I, S>(apps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: apps.into_iter().map(Into::into).collect(),
        }
    }
}

impl AvailabilityProbe for FixedProbe {
    fn is_available(&self, app_id: &str) -> Result<bool> {
        Ok(self.available.contains(app_id))
    }
}
