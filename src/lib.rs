//! nginx source-viewer config generator.
//!
//! Build-time generator for an nginx configuration fragment that serves
//! syntax-highlighted source views. The fragment routes requests by file
//! extension to a shared internal location whose response body is one
//! self-contained, minified HTML page; the page pulls highlight.js assets
//! from the cdnjs CDN at view time.
//!
//! # Pipeline Overview
//!
//! ```text
//!  GeneratorConfig (languages, styles)
//!       │
//!       ▼
//!  ┌──────────┐   one query per library    ┌─────────────────┐
//!  │ catalog  │───────────────────────────▶│  CatalogEntry ×3 │
//!  └──────────┘                            └────────┬────────┘
//!                                                   │
//!       highlight.js asset paths                    ▼
//!  ┌────────────┐                          ┌─────────────────┐
//!  │ capability │── possible − requested ─▶│   Resolution    │
//!  └────────────┘                          └────────┬────────┘
//!                                                   │
//!       versions + style list                       ▼
//!  ┌────────────┐   substitute, guard,     ┌─────────────────┐
//!  │  document  │── minify ───────────────▶│GeneratedDocument│
//!  └────────────┘                          └────────┬────────┘
//!                                                   │ size guard
//!                                                   ▼
//!  ┌────────────┐   comments + rules +     ┌─────────────────┐
//!  │    emit    │── handler block ────────▶│ ConfigFragment  │
//!  └────────────┘                          └─────────────────┘
//! ```
//!
//! Data flows strictly one direction; no stage mutates another stage's
//! output. A run either produces one complete fragment or fails with a
//! [`pipeline::GenerateError`] before producing anything.

pub mod capability;
pub mod catalog;
pub mod config;
pub mod document;
pub mod emit;
pub mod pipeline;

pub use catalog::{CatalogClient, CatalogEntry, CatalogError, CdnjsClient};
pub use config::GeneratorConfig;
pub use document::DocumentTemplate;
pub use pipeline::{generate, GenerateError};
