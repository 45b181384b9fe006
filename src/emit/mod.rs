//! Fragment emission.
//!
//! # Data Flow
//! ```text
//! GeneratedDocument
//!     → limits.rs (hard ceiling for an inline return literal)
//!     → fragment.rs (comments + per-language rules + shared handler)
//!     → ConfigFragment text (UTF-8, ready for `include`)
//! ```
//!
//! # Design Decisions
//! - Rules are emitted in language insertion order; nginx evaluates
//!   location regexes sequentially, so first match wins and earlier
//!   entries override later ones
//! - The size ceiling is checked here at generation time because breaching
//!   it only surfaces as an nginx startup failure at deploy time

pub mod fragment;
pub mod limits;

pub use fragment::emit_fragment;
pub use limits::{check_size, SizeError, MAX_DIRECTIVE_LEN, RESERVED_OVERHEAD};
