//! Conversion of literal expressions into JSON values.
//!
//! `normalize` is total: expressions it does not understand become `null`
//! instead of failing, so a partially dynamic translation object still yields
//! every literal part.
//!
//! ```ignore
//! export default {
//!   title: "Hello",            // "Hello"
//!   greeting: `Hi ${name}!`,   // "Hi {{}}!"
//!   count: 3,                  // 3
//!   items: ["a", , undefined], // ["a", null, null]
//!   [computed]: "skipped",     // (not included)
//!   ...spread,                 // (not included)
//! }
//! ```

use serde_json::{Map, Number, Value};
use swc_ecma_ast::{ArrayLit, Expr, ObjectLit, Prop, PropName, PropOrSpread, Tpl};

use super::node::NodeKind;

/// Marker inserted where a template literal interpolates an expression.
pub const TEMPLATE_PLACEHOLDER: &str = "{{}}";

/// Normalize an expression into a JSON value.
pub fn normalize(expr: &Expr) -> Value {
    match NodeKind::classify(expr) {
        NodeKind::Str(value) => Value::String(value.to_owned()),
        NodeKind::Template(tpl) => Value::String(join_template(tpl)),
        NodeKind::Number(n) => number_value(n),
        NodeKind::Bool(b) => Value::Bool(b),
        NodeKind::Object(object) => Value::Object(normalize_object(object)),
        NodeKind::Array(array) => Value::Array(normalize_array(array)),
        NodeKind::Null | NodeKind::Undefined | NodeKind::VoidZero => Value::Null,
        NodeKind::Call(_) | NodeKind::Unhandled => Value::Null,
    }
}

/// Join the literal text of a template, dropping the interpolated expressions.
fn join_template(tpl: &Tpl) -> String {
    tpl.quasis
        .iter()
        .map(|quasi| {
            quasi
                .cooked
                .as_ref()
                .and_then(|cooked| cooked.as_str())
                .unwrap_or(quasi.raw.as_str())
        })
        .collect::<Vec<_>>()
        .join(TEMPLATE_PLACEHOLDER)
}

/// Whole numbers are stored as integers so `1` stays `1` rather than `1.0`.
/// NaN and infinities have no JSON form and become `null`.
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&n) {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

fn normalize_object(object: &ObjectLit) -> Map<String, Value> {
    let mut map = Map::new();

    for prop in &object.props {
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };

        match &**prop {
            Prop::KeyValue(kv) => {
                if let Some(key) = property_key(&kv.key) {
                    map.insert(key, normalize(&kv.value));
                }
            }
            // `{ label }` reads a binding, never a literal.
            Prop::Shorthand(ident) => {
                map.insert(ident.sym.to_string(), Value::Null);
            }
            // Methods, accessors and `a = b` patterns carry no data.
            _ => {}
        }
    }

    map
}

/// Only identifier and string keys are kept; numeric, bigint and computed
/// keys are skipped.
fn property_key(name: &PropName) -> Option<String> {
    match name {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(str::to_owned),
        _ => None,
    }
}

/// Holes and spread elements keep their slot as `null`.
fn normalize_array(array: &ArrayLit) -> Vec<Value> {
    array
        .elems
        .iter()
        .map(|elem| match elem {
            Some(elem) if elem.spread.is_none() => normalize(&elem.expr),
            _ => Value::Null,
        })
        .collect()
}
