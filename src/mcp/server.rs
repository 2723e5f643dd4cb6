use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{config::Config, migrate::Migrator};

use super::types::{MigrateFileParams, PreviewExtractionParams, PreviewResult};

#[derive(Clone)]
pub struct GlotMigrateServer {
    migrator: Migrator,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl GlotMigrateServer {
    pub fn new(config: Config) -> Self {
        Self {
            migrator: Migrator::new(config),
            tool_router: Self::tool_router(),
        }
    }

    /// Migrate one source file into a catalog
    #[tool(
        description = "Extract translation text from a JS/TS source file, deep-merge it into a JSON catalog, and replace the source file with a migration marker. Returns a one-line summary."
    )]
    pub async fn migrate_file(
        &self,
        params: Parameters<MigrateFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let source = Path::new(&params.0.source_path);
        let target = Path::new(&params.0.target_path);

        match self.migrator.migrate(source, target) {
            Ok(report) => Ok(CallToolResult::success(vec![Content::text(report.summary())])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!("{:#}", e))])),
        }
    }

    /// Show what migrate_file would extract
    #[tool(
        description = "Show the entries migrate_file would extract from a source file and which strategy found them. Writes nothing."
    )]
    pub async fn preview_extraction(
        &self,
        params: Parameters<PreviewExtractionParams>,
    ) -> Result<CallToolResult, McpError> {
        let source = Path::new(&params.0.source_path);

        let preview = match self.migrator.preview(source) {
            Ok(preview) => preview,
            Err(e) => {
                return Ok(CallToolResult::error(vec![Content::text(format!("{:#}", e))]));
            }
        };

        let extraction = preview.extraction;
        let result = PreviewResult {
            strategy: extraction.strategy,
            entry_count: extraction.len(),
            entries: extraction.entries,
        };

        let json_str = serde_json::to_string_pretty(&result).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }
}

#[tool_handler]
impl ServerHandler for GlotMigrateServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "glot-migrate moves hard-coded translation text out of JS/TS source files into JSON catalogs.\n\n\
                 Available tools:\n\
                 1. preview_extraction - Show what would be extracted from a file (no writes)\n\
                 2. migrate_file - Merge a file's text into a catalog and replace the file with a marker\n\n\
                 Extraction looks for t('key') calls under useTranslations('namespace') first,\n\
                 then falls back to the file's default-exported object literal.\n\
                 Run preview_extraction before migrate_file: migrating overwrites the source file."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server(config: Config) -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = GlotMigrateServer::new(config);
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
