//! Projector configuration.
//!
//! The 1000-marker ceiling is a practical limit of the embedded map page
//! (marker placement degrades badly past it), not an engineering
//! constraint, so it lives in config rather than as a literal at call
//! sites.

use serde::{Deserialize, Serialize};

/// Default marker ceiling of the embedded map page.
pub const DEFAULT_MAX_MARKERS: usize = 1000;

/// Tunable limits for the marker projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectorConfig {
    /// Maximum number of markers one projection may place.
    #[serde(default = "default_max_markers")]
    pub max_markers: usize,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            max_markers: DEFAULT_MAX_MARKERS,
        }
    }
}

impl ProjectorConfig {
    /// Parses a TOML config override, e.g. `max_markers = 500`.
    ///
    /// # Errors
    ///
    /// Returns a `toml` deserialization error if the document is malformed.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

const fn default_max_markers() -> usize {
    DEFAULT_MAX_MARKERS
}
