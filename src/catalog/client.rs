//! Catalog query client for the cdnjs API.
//!
//! # Responsibilities
//! - Query `https://api.cdnjs.com/libraries/{name}?fields=assets`
//! - Map transport and payload failures onto the catalog error taxonomy
//! - Expose the query behind a trait so tests can inject fixtures

use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::catalog::types::{CatalogEntry, CatalogError, CatalogResult};

/// Query interface for a versioned-asset catalog.
///
/// One call resolves one library. Implementations must be side-effect free
/// from the caller's perspective; the pipeline issues its calls strictly
/// sequentially and aborts on the first error.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Resolve the published version and asset file list of `library`.
    async fn fetch_library_assets(&self, library: &str) -> CatalogResult<CatalogEntry>;
}

/// Catalog client backed by the public cdnjs API.
#[derive(Clone)]
pub struct CdnjsClient {
    http: reqwest::Client,
    base_url: Url,
}

/// cdnjs wire format: `assets` is a list of per-release objects, newest
/// first. Fields are optional here so absence maps to a shape error rather
/// than a deserialization failure.
#[derive(Debug, Deserialize)]
struct LibraryPayload {
    #[serde(default)]
    assets: Vec<ReleaseAssets>,
}

#[derive(Debug, Deserialize)]
struct ReleaseAssets {
    version: Option<String>,
    files: Option<Vec<String>>,
}

impl CdnjsClient {
    /// Default API endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.cdnjs.com/libraries/";

    /// Default per-request timeout.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a client against the public cdnjs endpoint.
    pub fn new() -> CatalogResult<Self> {
        // DEFAULT_BASE_URL is a valid URL; parse cannot fail here.
        let base_url = Url::parse(Self::DEFAULT_BASE_URL).map_err(|e| CatalogError::Unavailable {
            library: String::new(),
            reason: e.to_string(),
        })?;
        Self::with_base_url(base_url)
    }

    /// Create a client against a custom endpoint (mirrors, test servers).
    pub fn with_base_url(base_url: Url) -> CatalogResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CatalogError::Unavailable {
                library: String::new(),
                reason: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl CatalogClient for CdnjsClient {
    async fn fetch_library_assets(&self, library: &str) -> CatalogResult<CatalogEntry> {
        let url = self
            .base_url
            .join(library)
            .map_err(|e| CatalogError::Unavailable {
                library: library.to_string(),
                reason: format!("invalid library name: {}", e),
            })?;

        tracing::debug!(library, url = %url, "querying catalog");

        let response = self
            .http
            .get(url)
            .query(&[("fields", "assets")])
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable {
                library: library.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Unavailable {
                library: library.to_string(),
                reason: format!("catalog returned HTTP {}", status),
            });
        }

        let payload: LibraryPayload =
            response.json().await.map_err(|e| CatalogError::Unavailable {
                library: library.to_string(),
                reason: format!("malformed payload: {}", e),
            })?;

        entry_from_payload(library, payload)
    }
}

/// Extract the newest release from a parsed payload.
fn entry_from_payload(library: &str, payload: LibraryPayload) -> CatalogResult<CatalogEntry> {
    let release = payload
        .assets
        .into_iter()
        .next()
        .ok_or(CatalogError::Shape {
            library: library.to_string(),
            field: "assets",
        })?;

    let version = release.version.ok_or(CatalogError::Shape {
        library: library.to_string(),
        field: "version",
    })?;
    let files = release.files.ok_or(CatalogError::Shape {
        library: library.to_string(),
        field: "files",
    })?;

    Ok(CatalogEntry {
        library: library.to_string(),
        version,
        files: files.into_iter().collect::<BTreeSet<_>>(),
    })
}

impl std::fmt::Debug for CdnjsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CdnjsClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &Self::REQUEST_TIMEOUT)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> LibraryPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_well_formed_payload() {
        let payload = parse(
            r#"{"assets":[{"version":"9.15.10","files":["highlight.min.js","languages/python.min.js"]}]}"#,
        );
        let entry = entry_from_payload("highlight.js", payload).unwrap();
        assert_eq!(entry.version, "9.15.10");
        assert!(entry.files.contains("languages/python.min.js"));
    }

    #[test]
    fn test_takes_newest_release() {
        let payload = parse(
            r#"{"assets":[{"version":"3.4.1","files":["jquery.min.js"]},{"version":"3.4.0","files":["jquery.min.js"]}]}"#,
        );
        let entry = entry_from_payload("jquery", payload).unwrap();
        assert_eq!(entry.version, "3.4.1");
    }

    #[test]
    fn test_empty_assets_is_shape_error() {
        let payload = parse(r#"{"assets":[]}"#);
        let err = entry_from_payload("jquery", payload).unwrap_err();
        assert!(matches!(err, CatalogError::Shape { field: "assets", .. }));
    }

    #[test]
    fn test_missing_version_is_shape_error() {
        let payload = parse(r#"{"assets":[{"files":["jquery.min.js"]}]}"#);
        let err = entry_from_payload("jquery", payload).unwrap_err();
        assert!(matches!(err, CatalogError::Shape { field: "version", .. }));
    }

    #[test]
    fn test_missing_files_is_shape_error() {
        let payload = parse(r#"{"assets":[{"version":"3.4.1"}]}"#);
        let err = entry_from_payload("jquery", payload).unwrap_err();
        assert!(matches!(err, CatalogError::Shape { field: "files", .. }));
    }
}
