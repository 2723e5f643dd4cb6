use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glot_migrate::{config::Config, mcp::GlotMigrateServer};
use serde_json::Value;
use tempfile::TempDir;


/// Test fixture for MCP integration tests
///
/// Manages a temporary project with source files and a messages/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("messages"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Write a source file relative to the project root
    pub fn write_source(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write source file: {}", path.display()))?;
        Ok(())
    }

    /// Write a locale JSON file to messages/<locale>.json
    pub fn write_locale_file(&self, locale: &str, content: &Value) -> Result<()> {
        let path = self.locale_path(locale);
        let json_str = serde_json::to_string_pretty(content)
            .with_context(|| format!("Failed to serialize JSON for locale: {}", locale))?;
        fs::write(&path, format!("{}\n", json_str))
            .with_context(|| format!("Failed to write locale file: {}", path.display()))?;
        Ok(())
    }

    /// Read a locale JSON file from messages/<locale>.json
    pub fn read_locale_file(&self, locale: &str) -> Result<Value> {
        let path = self.locale_path(locale);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read locale file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from: {}", path.display()))
    }

    pub fn read_source(&self, relative_path: &str) -> Result<String> {
        let path = self.project_root.join(relative_path);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read source file: {}", path.display()))
    }

    /// Absolute path of messages/<locale>.json
    pub fn locale_path(&self, locale: &str) -> PathBuf {
        self.project_root
            .join("messages")
            .join(format!("{}.json", locale))
    }

    /// Absolute path of a project file as a string (for MCP parameters)
    pub fn path(&self, relative_path: &str) -> String {
        self.project_root
            .join(relative_path)
            .to_string_lossy()
            .to_string()
    }

    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

/// Server with default settings
pub fn default_server() -> GlotMigrateServer {
    GlotMigrateServer::new(Config::default())
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    let text = extract_tool_result_text(result);
    serde_json::from_str(&text).expect("Tool result should be valid JSON")
}

/// Extract the text of a successful CallToolResult
pub fn extract_tool_result_text(result: &rmcp::model::CallToolResult) -> String {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }
    first_text(result)
}

/// Extract the text of a failed CallToolResult
pub fn extract_tool_error_text(result: &rmcp::model::CallToolResult) -> String {
    assert_eq!(result.is_error, Some(true), "Tool call should fail: {:?}", result);
    first_text(result)
}

fn first_text(result: &rmcp::model::CallToolResult) -> String {
    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let text_content = result.content[0]
        .as_text()
        .expect("Tool result content should be text");

    text_content.text.clone()
}
