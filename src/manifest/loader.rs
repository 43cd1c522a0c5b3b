//! Manifest loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::manifest::schema::Manifest;
use crate::manifest::validation::{validate_manifest, ValidationError};

/// Error type for manifest loading.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate a route manifest from a TOML file.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = fs::read_to_string(path)?;
    parse_manifest(&content)
}

/// Parse and validate a route manifest from TOML text.
pub fn parse_manifest(content: &str) -> Result<Manifest, ManifestError> {
    let manifest: Manifest = toml::from_str(content)?;

    validate_manifest(&manifest.routes).map_err(ManifestError::Validation)?;

    tracing::debug!(top_level = manifest.routes.len(), "route manifest loaded");
    Ok(manifest)
}
