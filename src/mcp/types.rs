use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::ExtractionStrategy;

// ============================================================
// migrate_file
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MigrateFileParams {
    /// Path of the source file to migrate (.js, .jsx, .ts, .tsx)
    pub source_path: String,
    /// Path of the JSON catalog to merge into; created if missing
    pub target_path: String,
}

// ============================================================
// preview_extraction
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewExtractionParams {
    /// Path of the source file to inspect
    pub source_path: String,
}

/// Result of preview_extraction
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResult {
    pub strategy: ExtractionStrategy,
    pub entry_count: usize,
    pub entries: Map<String, Value>,
}
