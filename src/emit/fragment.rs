//! Renders the final nginx configuration fragment.
//!
//! Output layout, in order:
//! 1. Diagnostic comments (requested and missing languages/styles)
//! 2. One `location ~* …` rule per requested-and-available language
//! 3. The shared `@highlight` handler returning the inlined document
//!
//! Rule order follows the language map's insertion order. nginx evaluates
//! regex locations sequentially, so the first matching rule serves the
//! request; this is the caller's override mechanism for overlapping
//! patterns.

use indexmap::IndexMap;

use crate::capability::matcher::Resolution;
use crate::document::assembler::GeneratedDocument;

/// Render the complete fragment.
pub fn emit_fragment(
    languages: &IndexMap<String, String>,
    styles: &[String],
    resolution: &Resolution,
    document: &GeneratedDocument,
) -> String {
    let mut lines: Vec<String> = vec![
        "# nginx-source-viewer".to_string(),
        "# -------------------".to_string(),
        format!("# Requested languages: {}", join_languages(languages.iter())),
        format!("# Requested styles: {}", styles.join(", ")),
        format!(
            "# Missing languages: {}",
            none_if_empty(join_languages(
                languages
                    .iter()
                    .filter(|(tag, _)| resolution.missing_languages.contains(*tag)),
            ))
        ),
        format!(
            "# Missing styles: {}",
            none_if_empty(
                resolution
                    .missing_styles
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        ),
    ];

    for (tag, pattern) in languages {
        if resolution.missing_languages.contains(tag) {
            continue;
        }
        lines.push(format!(
            "location ~* {} {{ if ($arg_raw) {{break;}} set $lang {}; try_files @highlight @highlight; }}",
            pattern, tag
        ));
    }

    lines.push("location @highlight {".to_string());
    lines.push("    if (!-f $request_filename) {".to_string());
    lines.push("        return 404;".to_string());
    lines.push("    }".to_string());
    lines.push("    charset UTF-8;".to_string());
    lines.push("    override_charset on;".to_string());
    lines.push("    source_charset UTF-8;".to_string());
    lines.push("    default_type text/html;".to_string());
    lines.push("    add_header Content-Type text/html;".to_string());
    lines.push(format!("    return 200 '{}';", document));
    lines.push("}".to_string());

    lines.join("\n")
}

fn join_languages<'a>(entries: impl Iterator<Item = (&'a String, &'a String)>) -> String {
    entries
        .map(|(tag, pattern)| format!("{}: {}", tag, pattern))
        .collect::<Vec<_>>()
        .join(", ")
}

fn none_if_empty(value: String) -> String {
    if value.is_empty() {
        "None".to_string()
    } else {
        value
    }
}
