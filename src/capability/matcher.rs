//! Derives hosted languages/styles from a catalog entry and computes what
//! the caller asked for that the catalog cannot serve.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::catalog::types::CatalogEntry;

/// Asset path affixes the highlight engine publishes its per-language and
/// per-style files under.
const LANGUAGE_PREFIX: &str = "languages/";
const LANGUAGE_SUFFIX: &str = ".min.js";
const STYLE_PREFIX: &str = "styles/";
const STYLE_SUFFIX: &str = ".min.css";

/// The style identifier that must lead a derived style list.
const DEFAULT_STYLE: &str = "default";

/// Languages and styles the catalog can actually serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet {
    pub languages: BTreeSet<String>,
    pub styles: BTreeSet<String>,
}

impl CapabilitySet {
    /// Derive capabilities from the highlight engine's asset file list.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            languages: strip_affixes(&entry.files, LANGUAGE_PREFIX, LANGUAGE_SUFFIX),
            styles: strip_affixes(&entry.files, STYLE_PREFIX, STYLE_SUFFIX),
        }
    }

    /// The style list used when the caller supplies none: every hosted
    /// style, lexicographically sorted, with `default` moved to the front
    /// so it is the initial active style.
    pub fn default_style_list(&self) -> Vec<String> {
        let mut styles: Vec<String> = self
            .styles
            .iter()
            .filter(|s| s.as_str() != DEFAULT_STYLE)
            .cloned()
            .collect();
        if self.styles.contains(DEFAULT_STYLE) {
            styles.insert(0, DEFAULT_STYLE.to_string());
        }
        styles
    }
}

fn strip_affixes(files: &BTreeSet<String>, prefix: &str, suffix: &str) -> BTreeSet<String> {
    files
        .iter()
        .filter_map(|path| {
            path.strip_prefix(prefix)
                .and_then(|rest| rest.strip_suffix(suffix))
        })
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}

/// Requested-but-unavailable languages and styles.
///
/// Used for diagnostic comments and to filter which routing rules are
/// emitted; a missing entry is never routed and never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub missing_languages: BTreeSet<String>,
    pub missing_styles: BTreeSet<String>,
}

impl Resolution {
    /// Compute the missing sets and log a warning per non-empty axis.
    pub fn resolve(
        languages: &IndexMap<String, String>,
        styles: &[String],
        capabilities: &CapabilitySet,
    ) -> Self {
        let missing_languages: BTreeSet<String> = languages
            .keys()
            .filter(|tag| !capabilities.languages.contains(*tag))
            .cloned()
            .collect();
        let missing_styles: BTreeSet<String> = styles
            .iter()
            .filter(|style| !capabilities.styles.contains(*style))
            .cloned()
            .collect();

        if !missing_languages.is_empty() {
            tracing::warn!(missing = ?missing_languages, "requested languages not hosted by the catalog");
        }
        if !missing_styles.is_empty() {
            tracing::warn!(missing = ?missing_styles, "requested styles not hosted by the catalog");
        }

        Self {
            missing_languages,
            missing_styles,
        }
    }
}
