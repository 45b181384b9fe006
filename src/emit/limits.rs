//! Hard size ceiling for the inlined document.

use thiserror::Error;

/// Maximum length nginx accepts for a single configuration directive line.
pub const MAX_DIRECTIVE_LEN: usize = 4096;

/// Bytes reserved for the directive syntax around the document literal:
/// the `return 200 '` prefix, the closing `';`, and indentation. Coupled
/// to the exact line shape written by `fragment.rs`; keep the two in sync
/// if that syntax ever changes.
pub const RESERVED_OVERHEAD: usize = 20;

/// The document must be strictly shorter than this.
pub const MAX_DOCUMENT_LEN: usize = MAX_DIRECTIVE_LEN - RESERVED_OVERHEAD;

/// The minified document cannot fit in one directive line. nginx would
/// refuse to start on such a config, so generation fails instead.
#[derive(Debug, Error)]
#[error(
    "generated document is {actual} bytes; it must be under {limit} bytes to fit an inline nginx return literal"
)]
pub struct SizeError {
    pub actual: usize,
    pub limit: usize,
}

/// Enforce the ceiling on a minified document.
pub fn check_size(html: &str) -> Result<(), SizeError> {
    if html.len() >= MAX_DOCUMENT_LEN {
        return Err(SizeError {
            actual: html.len(),
            limit: MAX_DOCUMENT_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_ceiling_passes() {
        assert!(check_size(&"x".repeat(MAX_DOCUMENT_LEN - 1)).is_ok());
    }

    #[test]
    fn test_at_ceiling_fails() {
        // The bound is strict: exactly 4076 bytes is already too long.
        let err = check_size(&"x".repeat(MAX_DOCUMENT_LEN)).unwrap_err();
        assert_eq!(err.actual, 4076);
        assert_eq!(err.limit, 4076);
    }

    #[test]
    fn test_length_is_bytes_not_chars() {
        let s = "é".repeat(MAX_DOCUMENT_LEN / 2); // 2 bytes per char
        assert!(check_size(&s).is_err());
    }
}
