use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::scoring::{AuthenticityDescriptors, RawContentMetrics};

/// Load content metrics from a `.json` or YAML file.
pub fn load_metrics(path: &Path) -> Result<RawContentMetrics> {
    load(path, "metrics")
}

/// Load audio, filter and content descriptors from a `.json` or YAML file.
pub fn load_descriptors(path: &Path) -> Result<AuthenticityDescriptors> {
    load(path, "descriptors")
}

fn load<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file at {}", what, path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    debug!(path = %path.display(), json = is_json, "loading {}", what);

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}: invalid JSON in {}", what, path.display()))
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse {}: invalid YAML in {}", what, path.display()))
    }
}
