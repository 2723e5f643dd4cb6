//! Source file parsing.
//!
//! - `source`: JS/JSX/TS/TSX parser (uses swc for AST generation)

pub mod source;

pub use source::{ParseDiagnostic, ParsedSource, parse_source};
