//! Default-export lookup.
//!
//! Finds the object a module exposes through `export default`, either written
//! inline or through a top-level variable:
//!
//! ```ignore
//! export default { title: "Hello" };          // inline object
//!
//! const messages = { title: "Hello" };
//! export default messages;                    // resolved through the symbol table
//! ```
//!
//! Resolution is deliberately local: only top-level `const`/`let`/`var`
//! declarators of the same file are considered. Imports, function parameters
//! and nested scopes are never followed.

use std::collections::HashMap;

use swc_ecma_ast::{Decl, ExportDecl, Expr, ModuleDecl, ModuleItem, Module, Pat, Stmt, VarDecl};

use super::node::unwrap_type_wrappers;

/// Top-level variable bindings of a module, built in a single pass.
#[derive(Debug, Default)]
pub struct SymbolTable<'a> {
    /// Declared name -> initializer (`None` for `let x;`).
    bindings: HashMap<&'a str, Option<&'a Expr>>,
}

impl<'a> SymbolTable<'a> {
    pub fn from_module(module: &'a Module) -> Self {
        let mut table = Self::default();

        for item in &module.body {
            match item {
                ModuleItem::Stmt(Stmt::Decl(Decl::Var(var)))
                | ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(ExportDecl {
                    decl: Decl::Var(var),
                    ..
                })) => table.register(var),
                _ => {}
            }
        }

        table
    }

    fn register(&mut self, var: &'a VarDecl) {
        for decl in &var.decls {
            if let Pat::Ident(binding) = &decl.name {
                // The first declarator owns the binding (`var` may redeclare).
                self.bindings
                    .entry(binding.id.sym.as_str())
                    .or_insert(decl.init.as_deref());
            }
        }
    }

    /// Initializer of a top-level binding, if it exists and has one.
    pub fn initializer(&self, name: &str) -> Option<&'a Expr> {
        self.bindings.get(name).copied().flatten()
    }
}

/// Locate the object literal exported as the module's default export.
///
/// Returns `None` when there is no `export default`, when it exports a
/// function or class declaration, or when the exported value is not (and does
/// not resolve to) an object literal. Only the first default export is used.
pub fn locate_default_export(module: &Module) -> Option<&Expr> {
    let exported = module.body.iter().find_map(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) => Some(Some(&*export.expr)),
        ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(_)) => Some(None),
        _ => None,
    })??;

    match unwrap_type_wrappers(exported) {
        object @ Expr::Object(_) => Some(object),
        Expr::Ident(ident) => {
            let init = SymbolTable::from_module(module).initializer(ident.sym.as_str())?;
            match unwrap_type_wrappers(init) {
                object @ Expr::Object(_) => Some(object),
                _ => None,
            }
        }
        _ => None,
    }
}
