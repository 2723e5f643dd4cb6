use anyhow::{Result, anyhow};
use std::sync::Arc;
use swc_common::{FileName, Globals, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax, error::Error};

/// A syntax error the parser recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// 1-based line of the error.
    pub line: usize,
    pub message: String,
}

pub struct ParsedSource {
    pub module: Module,
    /// Recoverable errors reported while parsing. The module is still usable.
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Pick the parser syntax for a file.
///
/// Everything is parsed as TypeScript, which accepts plain JavaScript too.
/// JSX is enabled for every extension except `.ts`/`.mts`/`.cts`, where
/// `<T>value` type assertions would otherwise be read as markup.
fn syntax_for(file_path: &str) -> Syntax {
    let plain_ts = [".ts", ".mts", ".cts"]
        .iter()
        .any(|ext| file_path.ends_with(ext));

    Syntax::Typescript(TsSyntax {
        tsx: !plain_ts,
        ..Default::default()
    })
}

/// Parse JS/JSX/TS/TSX source code into a module AST.
///
/// Errors the parser can recover from are returned as diagnostics; an error it
/// cannot recover from fails the whole parse.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map: Arc<SourceMap> = Default::default();
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let line_of = |error: &Error| source_map.lookup_char_pos(error.span().lo).line;

        let module = parser.parse_module().map_err(|e| {
            anyhow!("{} (line {})", e.kind().msg(), line_of(&e))
        })?;

        let diagnostics = parser
            .take_errors()
            .iter()
            .map(|e| ParseDiagnostic {
                line: line_of(e),
                message: e.kind().msg().to_string(),
            })
            .collect();

        Ok(ParsedSource {
            module,
            diagnostics,
        })
    })
}

/// Parse a TSX snippet for tests, panicking on fatal errors.
#[cfg(test)]
pub(crate) fn parse_test_module(code: &str) -> Module {
    parse_source(code.to_string(), "test.tsx")
        .expect("test source should parse")
        .module
}
