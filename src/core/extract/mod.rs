//! Extraction of translation data from a parsed module.
//!
//! Two strategies exist and they never combine:
//!
//! 1. **Translation calls** (`translation_calls`): `t("key") || "Default"` call
//!    sites, prefixed with the `useTranslations("ns")` namespace.
//! 2. **Default export** (`export_default` + `normalize`): the object literal
//!    a module exposes through `export default`.
//!
//! Call sites are tried first. If they yield any entry, the default export is
//! not looked at.

pub mod export_default;
pub mod node;
pub mod normalize;
pub mod translation_calls;

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use swc_ecma_ast::Module;

pub use export_default::{SymbolTable, locate_default_export};
pub use node::NodeKind;
pub use normalize::normalize;
pub use translation_calls::extract_translation_calls;

/// Which strategy produced an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtractionStrategy {
    TranslationCalls,
    DefaultExport,
    /// Neither strategy found anything.
    Nothing,
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExtractionStrategy::TranslationCalls => "translation calls",
            ExtractionStrategy::DefaultExport => "default export",
            ExtractionStrategy::Nothing => "nothing",
        };
        f.write_str(label)
    }
}

/// Result of extracting one module.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub strategy: ExtractionStrategy,
    pub entries: Map<String, Value>,
}

impl Extraction {
    pub fn nothing() -> Self {
        Self {
            strategy: ExtractionStrategy::Nothing,
            entries: Map::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Extract translation data from a module.
pub fn extract_module(module: &Module) -> Extraction {
    let calls = extract_translation_calls(module);
    if !calls.is_empty() {
        return Extraction {
            strategy: ExtractionStrategy::TranslationCalls,
            entries: calls,
        };
    }

    // Only an object qualifies; an empty one counts as nothing found.
    if let Some(candidate) = locate_default_export(module)
        && let Value::Object(entries) = normalize(candidate)
        && !entries.is_empty()
    {
        return Extraction {
            strategy: ExtractionStrategy::DefaultExport,
            entries,
        };
    }

    Extraction::nothing()
}
