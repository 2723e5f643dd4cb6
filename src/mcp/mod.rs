//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes migration to AI coding agents over stdio.
//!
//! ## Module Structure
//!
//! - `server`: MCP server and tool handlers
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{GlotMigrateServer, run_server};
