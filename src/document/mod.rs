//! Viewer document assembly.
//!
//! # Data Flow
//! ```text
//! DocumentTemplate (skeleton + inlined CSS/JS)
//!   + resolved library versions
//!   + final style list
//!     → assembler.rs (substitute, guard the literal invariants)
//!     → minify.rs (strip comments, collapse whitespace, drop quotes)
//!     → GeneratedDocument (immutable, ready for embedding)
//! ```
//!
//! # Design Decisions
//! - The template is an explicit value passed in, not module-global state;
//!   assembly is a pure function of its inputs
//! - The document must survive embedding in a single-quoted nginx literal:
//!   no `'` anywhere, and no `$variable` other than `$uri`/`$lang`
//! - Literal guards run before minification and before any size check

pub mod assembler;
pub mod minify;
pub mod template;

pub use assembler::{assemble, DocumentError, GeneratedDocument};
pub use template::DocumentTemplate;
