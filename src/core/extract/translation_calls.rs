//! Translation call-site extraction.
//!
//! Recovers keys from next-intl style code:
//!
//! ```ignore
//! const t = useTranslations("pages.home");
//! t("title") || "Welcome"   // "pages.home.title" -> "Welcome"
//! t("subtitle")             // "pages.home.subtitle" -> ""
//! ```
//!
//! Two passes run over the module. The first finds the namespace passed to
//! `useTranslations`; the second collects every `t("key")` call and prefixes
//! it with that namespace. Calls are matched by name only: there is no check
//! that `t` really is the function returned by `useTranslations`.

use serde_json::{Map, Value};
use swc_ecma_ast::{BinExpr, BinaryOp, CallExpr, Callee, Expr, Module};
use swc_ecma_visit::{Visit, VisitWith};

use super::node::NodeKind;

/// Hook whose first argument sets the namespace.
pub const TRANSLATION_HOOK: &str = "useTranslations";

/// Function whose first argument is a translation key.
pub const TRANSLATION_FUNCTION: &str = "t";

/// Returns the string-literal first argument of `name("...")`.
fn string_argument<'a>(call: &'a CallExpr, name: &str) -> Option<&'a str> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    let Expr::Ident(ident) = &**callee else {
        return None;
    };
    if ident.sym.as_str() != name {
        return None;
    }

    let first = call.args.first()?;
    if first.spread.is_some() {
        return None;
    }
    NodeKind::classify(&first.expr).as_str()
}

/// First pass: the last `useTranslations("...")` visited wins.
#[derive(Debug, Default)]
struct NamespaceCollector {
    namespace: Option<String>,
}

impl Visit for NamespaceCollector {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Some(namespace) = string_argument(node, TRANSLATION_HOOK) {
            self.namespace = Some(namespace.to_owned());
        }
        node.visit_children_with(self);
    }
}

/// Second pass: flat `full key -> default text` map.
struct TranslationCallCollector<'a> {
    namespace: Option<&'a str>,
    entries: Map<String, Value>,
}

impl<'a> TranslationCallCollector<'a> {
    fn new(namespace: Option<&'a str>) -> Self {
        Self {
            namespace,
            entries: Map::new(),
        }
    }

    fn full_key(&self, key: &str) -> String {
        match self.namespace {
            Some(namespace) => format!("{}.{}", namespace, key),
            None => key.to_owned(),
        }
    }

    /// Record `call` if it is a translation call. Later calls overwrite
    /// earlier ones with the same key.
    fn record(&mut self, call: &CallExpr, default_text: &str) {
        if let Some(key) = string_argument(call, TRANSLATION_FUNCTION) {
            let full_key = self.full_key(key);
            self.entries
                .insert(full_key, Value::String(default_text.to_owned()));
        }
    }
}

impl Visit for TranslationCallCollector<'_> {
    /// `t("key") || "Default"` supplies the default text for `key`.
    /// Only a call that is the direct left operand qualifies.
    fn visit_bin_expr(&mut self, node: &BinExpr) {
        if node.op == BinaryOp::LogicalOr
            && let NodeKind::Call(call) = NodeKind::classify(&node.left)
        {
            let default_text = NodeKind::classify(&node.right).as_str().unwrap_or_default();
            self.record(call, default_text);
            call.visit_children_with(self);
            node.right.visit_with(self);
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.record(node, "");
        node.visit_children_with(self);
    }
}

/// Extract translation keys and their default texts from a module.
///
/// Returns an empty map when the module contains no `t("...")` calls.
pub fn extract_translation_calls(module: &Module) -> Map<String, Value> {
    let mut namespaces = NamespaceCollector::default();
    module.visit_with(&mut namespaces);

    let mut calls = TranslationCallCollector::new(namespaces.namespace.as_deref());
    module.visit_with(&mut calls);
    calls.entries
}
