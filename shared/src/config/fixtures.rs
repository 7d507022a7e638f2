//! Property fixture configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the in-memory property fixture mapping is seeded from.
///
/// With no path the mapping starts empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// JSON file keyed by property id, as in `properties.json`
    pub properties_path: Option<PathBuf>,
}

impl FixtureConfig {
    pub fn with_properties_path(path: impl Into<PathBuf>) -> Self {
        Self {
            properties_path: Some(path.into()),
        }
    }
}
