//! Document assembly and literal-safety guards.

use thiserror::Error;

use crate::catalog::types::CatalogEntry;
use crate::document::minify::minify;
use crate::document::template::{placeholder, DocumentTemplate, ScriptRef};

/// nginx variables the document is allowed to reference. The server
/// substitutes them per request inside the `return 200 '…'` literal; any
/// other `$name` would expand to something unintended (or nothing).
const ALLOWED_VARIABLES: [&str; 2] = ["uri", "lang"];

/// The assembled, minified viewer page.
///
/// Invariants (enforced at construction): contains no single quote and no
/// nginx variable outside [`ALLOWED_VARIABLES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    html: String,
}

impl GeneratedDocument {
    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

impl std::fmt::Display for GeneratedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.html)
    }
}

/// The template produced content that cannot be embedded in a
/// single-quoted nginx string literal. Always a template defect, never an
/// input problem.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A `'` would terminate the literal early.
    #[error("unsafe literal: single quote at byte {offset} of the assembled document")]
    SingleQuote { offset: usize },

    /// A `$name` outside the allowed set would be expanded by nginx.
    #[error("unsafe literal: unexpected nginx variable '${name}' in the assembled document")]
    UnexpectedVariable { name: String },
}

/// Assemble and minify the viewer document.
///
/// Guards run on the substituted document before minification, so a defect
/// is reported against recognisable template text.
pub fn assemble(
    template: &DocumentTemplate,
    jquery: &CatalogEntry,
    highlight: &CatalogEntry,
    line_numbers: &CatalogEntry,
    styles: &[String],
) -> Result<GeneratedDocument, DocumentError> {
    let scripts = [
        ScriptRef {
            library: &jquery.library,
            version: &jquery.version,
            file: "jquery.min.js",
        },
        ScriptRef {
            library: &highlight.library,
            version: &highlight.version,
            file: "highlight.min.js",
        },
        ScriptRef {
            library: &line_numbers.library,
            version: &line_numbers.version,
            file: "highlightjs-line-numbers.min.js",
        },
    ];
    let script_tags = scripts
        .iter()
        .map(|s| s.tag())
        .collect::<Vec<_>>()
        .join("\n    ");

    // Compact JSON ([...] with no spaces) keeps the array literal small.
    let style_array =
        serde_json::to_string(styles).unwrap_or_else(|_| "[]".to_string());

    let html = template
        .html
        .replace(placeholder::CSS, &template.css)
        .replace(placeholder::SCRIPTS, &script_tags)
        .replace(placeholder::HIGHLIGHT_VERSION, &highlight.version)
        .replace(placeholder::STYLES, &style_array)
        .replace(placeholder::JS, &template.js);

    check_literal_safety(&html)?;

    let minified = minify(&html);
    tracing::debug!(
        before = html.len(),
        after = minified.len(),
        "minified viewer document"
    );

    Ok(GeneratedDocument { html: minified })
}

/// Reject documents that cannot survive single-quoted embedding.
fn check_literal_safety(html: &str) -> Result<(), DocumentError> {
    if let Some(offset) = html.find('\'') {
        return Err(DocumentError::SingleQuote { offset });
    }

    let bytes = html.as_bytes();
    let mut i = 0;
    while let Some(pos) = html[i..].find('$') {
        let start = i + pos + 1;
        let mut end = start;
        while end < bytes.len()
            && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_')
        {
            end += 1;
        }
        let name = &html[start..end];
        if !ALLOWED_VARIABLES.contains(&name) {
            return Err(DocumentError::UnexpectedVariable {
                name: name.to_string(),
            });
        }
        i = end;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn entry(library: &str, version: &str) -> CatalogEntry {
        CatalogEntry {
            library: library.to_string(),
            version: version.to_string(),
            files: BTreeSet::new(),
        }
    }

    fn styles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_assemble_substitutes_everything() {
        let doc = assemble(
            &DocumentTemplate::default(),
            &entry("jquery", "3.4.1"),
            &entry("highlight.js", "9.15.10"),
            &entry("highlightjs-line-numbers.js", "2.7.0"),
            &styles(&["default", "idea"]),
        )
        .unwrap();

        let html = doc.as_str();
        assert!(html.contains("jquery/3.4.1/jquery.min.js"));
        assert!(html.contains("highlight.js/9.15.10/highlight.min.js"));
        assert!(html.contains("highlightjs-line-numbers.js/2.7.0/highlightjs-line-numbers.min.js"));
        assert!(html.contains("STYLES=[\"default\",\"idea\"]"));
        // Per-request nginx variables survive untouched.
        assert!(html.contains("languages/$lang.min.js"));
        assert!(html.contains("$uri?raw=1"));
        assert!(!html.contains("{{"), "unsubstituted placeholder left behind");
    }

    #[test]
    fn test_single_quote_is_rejected() {
        let mut template = DocumentTemplate::default();
        template.css.push_str(".x{content:\"it's\"}");
        let err = assemble(
            &template,
            &entry("jquery", "1"),
            &entry("highlight.js", "1"),
            &entry("highlightjs-line-numbers.js", "1"),
            &styles(&["default"]),
        )
        .unwrap_err();
        assert!(matches!(err, DocumentError::SingleQuote { .. }));
    }

    #[test]
    fn test_stray_variable_is_rejected() {
        let mut template = DocumentTemplate::default();
        template.html = template.html.replace("$uri", "$request_uri");
        let err = assemble(
            &template,
            &entry("jquery", "1"),
            &entry("highlight.js", "1"),
            &entry("highlightjs-line-numbers.js", "1"),
            &styles(&["default"]),
        )
        .unwrap_err();
        match err {
            DocumentError::UnexpectedVariable { name } => assert_eq!(name, "request_uri"),
            other => panic!("expected UnexpectedVariable, got {:?}", other),
        }
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let run = || {
            assemble(
                &DocumentTemplate::default(),
                &entry("jquery", "3.4.1"),
                &entry("highlight.js", "9.15.10"),
                &entry("highlightjs-line-numbers.js", "2.7.0"),
                &styles(&["default", "idea"]),
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }
}
