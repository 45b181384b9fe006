//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject values that would corrupt the emitted fragment (quotes,
//!   newlines, braces inside config lines)
//! - Detect duplicate style identifiers
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GeneratorConfig → Result<(), Vec<ValidationError>>
//! - Runs before any catalog query is made

use std::collections::BTreeSet;

use thiserror::Error;

use crate::config::schema::GeneratorConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A language entry has an empty tag.
    #[error("language entry with empty tag")]
    EmptyLanguageTag,

    /// A language entry has an empty pattern.
    #[error("language '{tag}' has an empty pattern")]
    EmptyPattern { tag: String },

    /// A language tag contains characters that would break a config line.
    #[error("language tag '{tag}' contains an unsafe character ({what})")]
    UnsafeLanguageTag { tag: String, what: &'static str },

    /// A language pattern contains characters that would break a config line.
    #[error("pattern for '{tag}' contains an unsafe character ({what})")]
    UnsafePattern { tag: String, what: &'static str },

    /// A style identifier appears more than once.
    #[error("style '{style}' is listed more than once")]
    DuplicateStyle { style: String },

    /// A style identifier is empty or contains unsafe characters.
    #[error("style '{style}' is not a valid identifier")]
    InvalidStyle { style: String },
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GeneratorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (tag, pattern) in &config.languages {
        if tag.is_empty() {
            errors.push(ValidationError::EmptyLanguageTag);
            continue;
        }
        if let Some(what) = unsafe_token(tag) {
            errors.push(ValidationError::UnsafeLanguageTag {
                tag: tag.clone(),
                what,
            });
        }
        if pattern.is_empty() {
            errors.push(ValidationError::EmptyPattern { tag: tag.clone() });
        } else if let Some(what) = unsafe_pattern(pattern) {
            errors.push(ValidationError::UnsafePattern {
                tag: tag.clone(),
                what,
            });
        }
    }

    if let Some(styles) = &config.styles {
        let mut seen = BTreeSet::new();
        for style in styles {
            if style.is_empty() || unsafe_token(style).is_some() {
                errors.push(ValidationError::InvalidStyle {
                    style: style.clone(),
                });
                continue;
            }
            if !seen.insert(style.clone()) {
                errors.push(ValidationError::DuplicateStyle {
                    style: style.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Tags and style ids end up inside config lines and a JSON literal; they
/// must be single-line tokens without quotes or whitespace.
fn unsafe_token(value: &str) -> Option<&'static str> {
    if value.contains('\'') || value.contains('"') {
        Some("quote")
    } else if value.contains(char::is_whitespace) {
        Some("whitespace")
    } else if value.contains('{') || value.contains('}') {
        Some("brace")
    } else {
        None
    }
}

/// Patterns are spliced verbatim into `location ~* <pattern> { … }`; quotes,
/// newlines and braces would terminate the line or the block early.
fn unsafe_pattern(pattern: &str) -> Option<&'static str> {
    if pattern.contains('\'') || pattern.contains('"') {
        Some("quote")
    } else if pattern.contains('\n') || pattern.contains(char::is_whitespace) {
        Some("whitespace")
    } else if pattern.contains('{') || pattern.contains('}') {
        Some("brace")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn config_with(languages: &[(&str, &str)], styles: Option<&[&str]>) -> GeneratorConfig {
        GeneratorConfig {
            languages: languages
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<IndexMap<_, _>>(),
            styles: styles.map(|s| s.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GeneratorConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = config_with(
            &[("", r"\.(py)$"), ("cpp", ""), ("lua", "\\.(lua)$")],
            Some(&["idea", "idea", ""]),
        );
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptyLanguageTag));
        assert!(errors.contains(&ValidationError::EmptyPattern {
            tag: "cpp".to_string()
        }));
        assert!(errors.contains(&ValidationError::DuplicateStyle {
            style: "idea".to_string()
        }));
    }

    #[test]
    fn test_rejects_quote_in_pattern() {
        let config = config_with(&[("python", r"\.(py')$")], None);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnsafePattern {
                tag: "python".to_string(),
                what: "quote"
            }]
        );
    }

    #[test]
    fn test_rejects_brace_quantifier_pattern() {
        // nginx itself requires quoting for such patterns; quoting is not
        // supported inside the emitted one-line rules.
        let config = config_with(&[("gcode", r"\.g{1,2}$")], None);
        assert!(validate_config(&config).is_err());
    }
}
