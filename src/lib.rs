//! glot-migrate - move translation text out of JS/TS source files
//!
//! glot-migrate is a CLI tool and library that finds the translatable text in a
//! single JavaScript or TypeScript file, either `t('key') || 'Default'` calls under
//! a `useTranslations('namespace')` hook or a default-exported object literal,
//! deep-merges it into a JSON catalog and replaces the source file with a marker.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (parse, extract, merge, catalog I/O)
//! - `logging`: Diagnostic logging setup
//! - `mcp`: Model Context Protocol server implementation
//! - `migrate`: Per-file migration orchestration

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod mcp;
pub mod migrate;
