//! Shared fixture catalog for integration tests.

use std::collections::HashMap;

use async_trait::async_trait;

use nginx_source_viewer::catalog::{CatalogClient, CatalogEntry, CatalogError, CatalogResult};

/// In-memory catalog standing in for the cdnjs API.
pub struct FixtureCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl FixtureCatalog {
    /// A catalog hosting the three libraries with a realistic asset spread:
    /// python and cpp languages, and four styles including `default`.
    pub fn stock() -> Self {
        let mut fixture = Self {
            entries: HashMap::new(),
        };
        fixture.insert("jquery", "3.4.1", &["jquery.min.js", "jquery.js"]);
        fixture.insert(
            "highlight.js",
            "9.15.10",
            &[
                "highlight.min.js",
                "languages/python.min.js",
                "languages/cpp.min.js",
                "styles/default.min.css",
                "styles/idea.min.css",
                "styles/dracula.min.css",
                "styles/a11y-dark.min.css",
            ],
        );
        fixture.insert(
            "highlightjs-line-numbers.js",
            "2.7.0",
            &["highlightjs-line-numbers.min.js"],
        );
        fixture
    }

    /// Replace the highlight engine's asset file list.
    pub fn with_highlight_files(mut self, files: &[&str]) -> Self {
        self.insert("highlight.js", "9.15.10", files);
        self
    }

    fn insert(&mut self, library: &str, version: &str, files: &[&str]) {
        self.entries.insert(
            library.to_string(),
            CatalogEntry {
                library: library.to_string(),
                version: version.to_string(),
                files: files.iter().map(|f| f.to_string()).collect(),
            },
        );
    }
}

#[async_trait]
impl CatalogClient for FixtureCatalog {
    async fn fetch_library_assets(&self, library: &str) -> CatalogResult<CatalogEntry> {
        self.entries
            .get(library)
            .cloned()
            .ok_or_else(|| CatalogError::Unavailable {
                library: library.to_string(),
                reason: "not in fixture".to_string(),
            })
    }
}
