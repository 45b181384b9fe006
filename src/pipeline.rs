//! Generation pipeline.
//!
//! Resolves the three client libraries, matches capabilities, assembles the
//! viewer document and emits the fragment — strictly in that order, since
//! each stage depends on the previous stage's validated output. Any failure
//! aborts the run before a single byte of output exists.

use thiserror::Error;

use crate::capability::matcher::{CapabilitySet, Resolution};
use crate::catalog::client::CatalogClient;
use crate::catalog::types::CatalogError;
use crate::config::schema::GeneratorConfig;
use crate::document::assembler::{assemble, DocumentError};
use crate::document::template::DocumentTemplate;
use crate::emit::fragment::emit_fragment;
use crate::emit::limits::{check_size, SizeError};

/// The DOM-utility library.
pub const LIB_JQUERY: &str = "jquery";
/// The syntax-highlighting engine; also the source of capability data.
pub const LIB_HIGHLIGHT: &str = "highlight.js";
/// The line-numbering plugin.
pub const LIB_LINE_NUMBERS: &str = "highlightjs-line-numbers.js";

/// Fatal generation failures. None are recoverable within a run; there is
/// no partial output.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Upstream catalog data problem (unreachable or malformed).
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The template produced content incompatible with the single-quoted
    /// literal syntax.
    #[error(transparent)]
    UnsafeLiteral(#[from] DocumentError),

    /// The minified document breaches the directive length ceiling.
    #[error(transparent)]
    ConfigTooLarge(#[from] SizeError),
}

/// Result type for generation.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Run the full pipeline and return the configuration fragment.
///
/// Deterministic: identical configuration and catalog state yield
/// byte-identical output.
pub async fn generate(
    config: &GeneratorConfig,
    template: &DocumentTemplate,
    catalog: &dyn CatalogClient,
) -> GenerateResult<String> {
    let jquery = catalog.fetch_library_assets(LIB_JQUERY).await?;
    let highlight = catalog.fetch_library_assets(LIB_HIGHLIGHT).await?;
    let line_numbers = catalog.fetch_library_assets(LIB_LINE_NUMBERS).await?;

    tracing::info!(
        jquery = %jquery.version,
        highlight = %highlight.version,
        line_numbers = %line_numbers.version,
        "resolved library versions"
    );

    let capabilities = CapabilitySet::from_entry(&highlight);
    tracing::info!(
        languages = capabilities.languages.len(),
        styles = capabilities.styles.len(),
        "catalog capabilities"
    );

    let styles = match &config.styles {
        Some(styles) => styles.clone(),
        None => capabilities.default_style_list(),
    };

    let resolution = Resolution::resolve(&config.languages, &styles, &capabilities);

    let document = assemble(template, &jquery, &highlight, &line_numbers, &styles)?;
    check_size(document.as_str())?;

    Ok(emit_fragment(
        &config.languages,
        &styles,
        &resolution,
        &document,
    ))
}
