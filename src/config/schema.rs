//! Configuration schema definitions.
//!
//! The schema is deliberately small: a language map and an optional style
//! list. Everything else the generator needs comes from the catalog.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Caller-supplied configuration for one generation run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Language tag → nginx location regex over request paths.
    ///
    /// Insertion order is preserved through to the emitted fragment; when
    /// two patterns both match a path, the earlier entry wins.
    pub languages: IndexMap<String, String>,

    /// Ordered, unique style identifiers. The first entry is the style the
    /// viewer starts with. `None` means "every style the catalog hosts,
    /// sorted, with `default` first".
    pub styles: Option<Vec<String>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        // Languages whose highlight.js tag equals the file extension.
        let plain = ["tcl", "sql", "gradle", "groovy", "java", "lua", "properties", "scala"];
        let mut languages: IndexMap<String, String> = plain
            .iter()
            .map(|ext| (ext.to_string(), format!(r"\.({})$", ext)))
            .collect();

        // Tags that cover more than one extension, or extensionless files.
        let special = [
            ("python", r"\.(py)$"),
            ("cpp", r"\.(c|cpp|h|hpp)$"),
            ("vhdl", r"\.(vhdl?)$"),
            ("bash", r"\.(sh)$"),
            ("makefile", r"\.?(make|makefile)$"),
            ("markdown", r"\.(md|markdown)$"),
            ("dos", r"\.(bat)$"),
            ("gcode", r"\.(g|gcode)$"),
            ("verilog", r"\.(v|verilog)$"),
            ("kotlin", r"\.(kt)$"),
            ("matlab", r"\.(m)$"),
            ("openscad", r"\.(scad)$"),
            ("powershell", r"\.(ps)$"),
            ("tex", r"\.(latex|tex)$"),
            ("dockerfile", r"\.?(dockerfile)$"),
        ];
        for (tag, pattern) in special {
            languages.insert(tag.to_string(), pattern.to_string());
        }

        Self {
            languages,
            styles: None,
        }
    }
}
