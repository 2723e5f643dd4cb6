//! Closed view over the expression kinds the extractor understands.
//!
//! swc's `Expr` has dozens of variants. Extraction only cares about a small
//! literal subset plus calls, so every expression is first classified into
//! `NodeKind`. Anything outside the subset lands in `NodeKind::Unhandled`,
//! which keeps the "unknown kind" case visible in every match.

use swc_ecma_ast::{ArrayLit, CallExpr, Expr, Lit, ObjectLit, Tpl, UnaryOp};

#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    /// `"text"` or `'text'`
    Str(&'a str),
    /// `` `text ${expr} more` ``
    Template(&'a Tpl),
    /// `42`, `1.5`
    Number(f64),
    /// `true` / `false`
    Bool(bool),
    /// `null`
    Null,
    /// The identifier `undefined`
    Undefined,
    /// `void 0`
    VoidZero,
    /// `{ ... }`
    Object(&'a ObjectLit),
    /// `[ ... ]`
    Array(&'a ArrayLit),
    /// `callee(args)`
    Call(&'a CallExpr),
    /// Any other expression (identifiers, member access, arrows, ...).
    Unhandled,
}

impl<'a> NodeKind<'a> {
    /// Classify an expression. Parentheses are transparent.
    pub fn classify(expr: &'a Expr) -> Self {
        match expr {
            Expr::Paren(paren) => Self::classify(&paren.expr),
            // Strings holding lone surrogates have no UTF-8 form.
            Expr::Lit(Lit::Str(s)) => s.value.as_str().map_or(NodeKind::Unhandled, NodeKind::Str),
            Expr::Lit(Lit::Num(n)) => NodeKind::Number(n.value),
            Expr::Lit(Lit::Bool(b)) => NodeKind::Bool(b.value),
            Expr::Lit(Lit::Null(_)) => NodeKind::Null,
            Expr::Tpl(tpl) => NodeKind::Template(tpl),
            Expr::Ident(ident) if ident.sym.as_str() == "undefined" => NodeKind::Undefined,
            Expr::Unary(unary) if unary.op == UnaryOp::Void && is_zero(&unary.arg) => {
                NodeKind::VoidZero
            }
            Expr::Object(object) => NodeKind::Object(object),
            Expr::Array(array) => NodeKind::Array(array),
            Expr::Call(call) => NodeKind::Call(call),
            _ => NodeKind::Unhandled,
        }
    }

    /// The string value, if this is a string literal.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            NodeKind::Str(value) => Some(value),
            _ => None,
        }
    }
}

fn is_zero(expr: &Expr) -> bool {
    matches!(NodeKind::classify(expr), NodeKind::Number(n) if n == 0.0)
}

/// Strip parentheses and TypeScript-only wrappers (`as const`, `as T`,
/// `satisfies T`, `<T>value`) that do not change the runtime value.
pub fn unwrap_type_wrappers(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(inner) => unwrap_type_wrappers(&inner.expr),
        Expr::TsConstAssertion(inner) => unwrap_type_wrappers(&inner.expr),
        Expr::TsAs(inner) => unwrap_type_wrappers(&inner.expr),
        Expr::TsSatisfies(inner) => unwrap_type_wrappers(&inner.expr),
        Expr::TsTypeAssertion(inner) => unwrap_type_wrappers(&inner.expr),
        _ => expr,
    }
}
