//! Generator configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or built-in defaults
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GeneratorConfig (validated, immutable)
//!     → consumed once by the generation pipeline
//! ```
//!
//! # Design Decisions
//! - Language order is insertion order and is load-bearing: emitted
//!   location rules follow it, and nginx evaluates them first-match-wins
//! - An absent style list means "derive from the catalog", not "no styles"
//! - Validation separates syntactic (serde) from semantic checks and
//!   returns all semantic errors, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::GeneratorConfig;
pub use validation::{validate_config, ValidationError};
