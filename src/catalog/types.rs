//! Catalog entry and error definitions.

use std::collections::BTreeSet;

use thiserror::Error;

/// One library as published by the catalog: its current version and the
/// relative paths of every asset file in that release. Immutable once
/// fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Library name as known to the catalog.
    pub library: String,

    /// Catalog-assigned version string. Opaque; only spliced into URLs.
    pub version: String,

    /// Relative asset paths within the release.
    pub files: BTreeSet<String>,
}

/// Errors that can occur while resolving library assets.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The remote query failed or did not return a well-formed payload.
    #[error("catalog unavailable for '{library}': {reason}")]
    Unavailable { library: String, reason: String },

    /// The payload parsed but the expected version/file fields are absent.
    #[error("catalog payload for '{library}' is missing '{field}'")]
    Shape {
        library: String,
        field: &'static str,
    },
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::Shape {
            library: "jquery".to_string(),
            field: "version",
        };
        assert_eq!(
            err.to_string(),
            "catalog payload for 'jquery' is missing 'version'"
        );
    }
}
