//! Capability matching.
//!
//! # Data Flow
//! ```text
//! highlight engine CatalogEntry (asset paths)
//!     → matcher.rs (strip directory/extension affixes)
//!     → CapabilitySet (languages/styles the catalog actually hosts)
//!     → Resolution (requested − possible, per axis)
//! ```
//!
//! # Design Decisions
//! - Deterministic: all derived sets iterate in sorted order
//! - Missing languages/styles are diagnostics, never fatal
//! - First match wins downstream, so nothing here reorders the request

pub mod matcher;

pub use matcher::{CapabilitySet, Resolution};
