//! Migration of one source file into a catalog.
//!
//! A migration runs in order:
//!
//! 1. read and parse the source file (fatal on failure, nothing written);
//! 2. extract translation data (see `core::extract`);
//! 3. if nothing was extracted, stop and leave every file untouched;
//! 4. load the existing catalog permissively, deep-merge, write it once;
//! 5. unless disabled, replace the source file with a migration marker.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::Config;
use crate::core::{
    Extraction, ExtractionStrategy, extract_module, load_catalog, merge_deep, parse_source,
    save_catalog,
};

/// Prefix of the text written into a migrated source file.
pub const MIGRATION_MARKER_PREFIX: &str = "MIGRATED TO ";

/// What happened to the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceRewrite {
    /// Replaced with the migration marker.
    Rewritten,
    /// Left unchanged because replacement is disabled.
    Disabled,
    /// Left unchanged because nothing was extracted.
    Skipped,
}

/// Outcome of a migration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    pub source_path: PathBuf,
    /// Absolute path of the catalog, or the path as given when nothing was
    /// extracted.
    pub target_path: PathBuf,
    pub strategy: ExtractionStrategy,
    /// Number of top-level entries merged into the catalog.
    pub entry_count: usize,
    pub source_rewrite: SourceRewrite,
    /// Why the existing catalog was ignored, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_recovery: Option<String>,
    /// Syntax errors the parser recovered from.
    pub parse_diagnostics: usize,
}

impl MigrationReport {
    /// True when nothing was extracted and no file was touched.
    pub fn is_noop(&self) -> bool {
        self.strategy == ExtractionStrategy::Nothing
    }

    /// Short human-readable status line.
    pub fn summary(&self) -> String {
        if self.is_noop() {
            return format!(
                "No extractable data found in {}; nothing was written",
                self.source_path.display()
            );
        }

        let entries = if self.entry_count == 1 { "entry" } else { "entries" };
        let source = match self.source_rewrite {
            SourceRewrite::Rewritten => "source file replaced with migration marker",
            SourceRewrite::Disabled => "source file left unchanged (replacement disabled)",
            SourceRewrite::Skipped => "source file left unchanged",
        };
        let mut summary = format!(
            "Merged {} {} into {} ({}); {}",
            self.entry_count,
            entries,
            self.target_path.display(),
            self.strategy,
            source
        );
        if let Some(recovery) = &self.catalog_recovery {
            summary.push_str(&format!(
                " (warning: existing catalog {} and was replaced)",
                recovery
            ));
        }
        summary
    }
}

/// Extraction of a single file without any writes.
#[derive(Debug)]
pub struct SourceExtraction {
    pub extraction: Extraction,
    pub parse_diagnostics: usize,
}

/// Drives extraction, merge and persistence for one source file at a time.
#[derive(Debug, Clone, Default)]
pub struct Migrator {
    config: Config,
}

impl Migrator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read, parse and extract `source_path` without writing anything.
    pub fn preview(&self, source_path: &Path) -> Result<SourceExtraction> {
        let code = fs::read_to_string(source_path)
            .with_context(|| format!("Failed to read source file: {}", source_path.display()))?;

        let file_name = source_path.to_string_lossy();
        let parsed = parse_source(code, &file_name)
            .with_context(|| format!("Failed to parse source file: {}", source_path.display()))?;

        for diagnostic in &parsed.diagnostics {
            tracing::debug!(
                path = %source_path.display(),
                line = diagnostic.line,
                "recovered from syntax error: {}",
                diagnostic.message
            );
        }

        let extraction = extract_module(&parsed.module);
        tracing::debug!(
            path = %source_path.display(),
            strategy = %extraction.strategy,
            entries = extraction.len(),
            "extracted source file"
        );

        Ok(SourceExtraction {
            extraction,
            parse_diagnostics: parsed.diagnostics.len(),
        })
    }

    /// Migrate `source_path` into the catalog at `target_path`.
    pub fn migrate(&self, source_path: &Path, target_path: &Path) -> Result<MigrationReport> {
        let extracted = self.preview(source_path)?;
        self.apply(source_path, target_path, extracted)
    }

    /// Write an extraction obtained from `preview` of `source_path`.
    pub fn apply(
        &self,
        source_path: &Path,
        target_path: &Path,
        extracted: SourceExtraction,
    ) -> Result<MigrationReport> {
        let SourceExtraction {
            extraction,
            parse_diagnostics,
        } = extracted;

        let mut report = MigrationReport {
            source_path: source_path.to_path_buf(),
            target_path: target_path.to_path_buf(),
            strategy: extraction.strategy,
            entry_count: extraction.len(),
            source_rewrite: SourceRewrite::Skipped,
            catalog_recovery: None,
            parse_diagnostics,
        };

        if extraction.is_empty() {
            return Ok(report);
        }

        report.target_path = resolve_target(target_path)?;

        let existing = load_catalog(&report.target_path);
        report.catalog_recovery = existing.recovery.map(|recovery| recovery.to_string());

        let merged = merge_deep(existing.catalog, extraction.entries);
        save_catalog(&report.target_path, &merged).with_context(|| {
            format!("Failed to write catalog: {}", report.target_path.display())
        })?;

        if !self.config.replace_source {
            report.source_rewrite = SourceRewrite::Disabled;
            return Ok(report);
        }

        fs::write(source_path, self.migration_marker(&report.target_path)).with_context(|| {
            format!(
                "Catalog {} was updated with {} entries, but failed to rewrite source file {}",
                report.target_path.display(),
                report.entry_count,
                source_path.display()
            )
        })?;
        tracing::info!(path = %source_path.display(), "source file replaced with migration marker");
        report.source_rewrite = SourceRewrite::Rewritten;

        Ok(report)
    }

    /// `MIGRATED TO <absolute target><warning suffix>`
    pub fn migration_marker(&self, absolute_target: &Path) -> String {
        format!(
            "{}{}{}",
            MIGRATION_MARKER_PREFIX,
            absolute_target.display(),
            self.config.warning_suffix
        )
    }
}

/// Absolute form of `path` with `.` and `..` removed lexically.
///
/// Symlinks are not followed, so the target does not need to exist yet.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve target path: {}", path.display()))?;

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}
