//! Core extraction engine.
//!
//! ```text
//! source text ──parse──▶ Module ──extract──▶ Extraction ──merge──▶ catalog
//! ```
//!
//! - `parsers`: swc-based parsing of JS/JSX/TS/TSX files
//! - `extract`: call-site and default-export extraction
//! - `merge`: deep merge of extracted data into an existing catalog
//! - `catalog`: permissive loading and pretty writing of catalog files
//!
//! Nothing here reads configuration; the `migrate` module wires it together.

pub mod catalog;
pub mod extract;
pub mod merge;
pub mod parsers;

pub use catalog::{CatalogLoad, CatalogRecovery, load_catalog, save_catalog};
pub use extract::{Extraction, ExtractionStrategy, extract_module};
pub use merge::merge_deep;
pub use parsers::{ParseDiagnostic, ParsedSource, parse_source};
