//! Manifest validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check entry shape: index entries carry no path and no children
//! - Check path segments are non-empty with no leading/trailing slash
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the parsed manifest
//! - Runs before component names are resolved

use thiserror::Error;

use crate::manifest::schema::ManifestEntry;

/// A single semantic defect found in a manifest.
///
/// `at` is a breadcrumb into the manifest, e.g. `routes[1].children[0]`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{at}: index entries cannot carry a path")]
    IndexWithPath { at: String },

    #[error("{at}: index entries cannot have children")]
    IndexWithChildren { at: String },

    #[error("{at}: path must be a non-empty segment")]
    EmptyPath { at: String },

    #[error("{at}: path {path:?} must not start or end with '/'")]
    SlashedPath { at: String, path: String },
}

/// Validate a manifest entry tree, collecting every defect.
pub fn validate_manifest(entries: &[ManifestEntry]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    validate_level(entries, "routes", &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_level(entries: &[ManifestEntry], at: &str, errors: &mut Vec<ValidationError>) {
    for (position, entry) in entries.iter().enumerate() {
        let here = format!("{at}[{position}]");

        if entry.index {
            if entry.path.is_some() {
                errors.push(ValidationError::IndexWithPath { at: here.clone() });
            }
            if !entry.children.is_empty() {
                errors.push(ValidationError::IndexWithChildren { at: here.clone() });
            }
        }

        if let Some(path) = &entry.path {
            if path.is_empty() {
                errors.push(ValidationError::EmptyPath { at: here.clone() });
            } else if path.starts_with('/') || path.ends_with('/') {
                errors.push(ValidationError::SlashedPath {
                    at: here.clone(),
                    path: path.clone(),
                });
            }
        }

        validate_level(&entry.children, &format!("{here}.children"), errors);
    }
}
