//! Catalog subsystem (asset resolution).
//!
//! # Data Flow
//! ```text
//! library name ("jquery", "highlight.js", …)
//!     → client.rs (query the cdnjs API, one GET per library)
//!     → types.rs (CatalogEntry: version + asset file set)
//!     → consumed by the capability matcher and document assembler
//! ```
//!
//! # Design Decisions
//! - The query surface is a trait so tests can substitute a fixture and
//!   never touch the network
//! - No retry policy here; callers decide whether a failed run is re-run
//! - Asset paths are kept in a BTreeSet so every derived iteration is
//!   deterministic

pub mod client;
pub mod types;

pub use client::{CatalogClient, CdnjsClient};
pub use types::{CatalogEntry, CatalogError, CatalogResult};
