//! Evaluation of parsed output expressions against submitted form data.

use crate::ast::Expression;
use crate::data::FormData;

/// Resolves a parsed output expression against submitted form data.
///
/// Returns `None` when the expression resolves to nothing: a referenced key
/// is missing, a conditional branch is not taken, or the surface form matched
/// no known pattern. Callers must treat `None` as "field omitted", not as an
/// empty string.
///
/// Presence tests are strict key-membership checks — a key mapped to an empty
/// string still counts as present.
pub fn resolve(expression: &Expression, data: &FormData) -> Option<String> {
    match expression {
        Expression::Ternary { key, yes, no } => {
            if data.contains(key) {
                resolve(yes, data)
            } else {
                resolve(no, data)
            }
        }
        Expression::TernaryYes { key, yes } => {
            if data.contains(key) {
                resolve(yes, data)
            } else {
                None
            }
        }
        Expression::TernaryNo { key, no } => {
            if data.contains(key) {
                None
            } else {
                resolve(no, data)
            }
        }
        Expression::Presence { key } | Expression::Reference { key } => {
            data.get(key).map(str::to_string)
        }
        Expression::Constant(text) | Expression::Enclosed(text) => Some(text.clone()),
        Expression::Unrecognized => None,
    }
}

/// Convenience wrapper: parses and resolves a raw expression string.
pub fn resolve_str(expression: &str, data: &FormData) -> Option<String> {
    resolve(&Expression::parse(expression), data)
}
