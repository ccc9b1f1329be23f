//! Make sure JSX runtime exports are taken from the first argument.
//!
//! Turns:
//!
//! ```js
//! const {jsx: _jsx, jsxs: _jsxs} = arguments[0];
//! ```
//!
//! Into (with the production runtime):
//!
//! ```js
//! const {jsx: _jsx, jsxs: _jsxs, Fragment: _Fragment} = arguments[0];
//! ```

use crate::configuration::{runtime_alias, JsxRuntimeKind};
use crate::swc_util_walk::{walk_statements_mut, Control};
use crate::swc_utils::{create_key_value_pat_prop, prop_name_to_str, unwrap_parens};
use swc_core::ecma::ast::{
    Decl, Expr, Lit, MemberProp, Module, ObjectPat, ObjectPatProp, Pat, Stmt,
};

/// Add the keys of `runtimes` that are missing from the top-level
/// destructuring of `arguments[0]`.
///
/// Existing properties are kept as they are.
/// Yields the added keys.
pub fn swc_util_widen_runtime(module: &mut Module, runtimes: &[JsxRuntimeKind]) -> Vec<String> {
    let mut added = vec![];

    if runtimes.is_empty() {
        return added;
    }

    walk_statements_mut(module, |stmt, place| {
        if place.depth > 0 {
            return Control::Skip;
        }

        if let Stmt::Decl(Decl::Var(decl)) = stmt {
            for declarator in &mut decl.decls {
                let from_first_argument = declarator
                    .init
                    .as_deref()
                    .map_or(false, is_first_argument);

                if from_first_argument {
                    if let Pat::Object(pattern) = &mut declarator.name {
                        added = widen(pattern, runtimes);
                        return Control::Exit;
                    }
                }
            }
        }

        Control::Skip
    });

    added
}

/// Add missing runtime keys to a pattern.
fn widen(pattern: &mut ObjectPat, runtimes: &[JsxRuntimeKind]) -> Vec<String> {
    let existing: Vec<String> = pattern.props.iter().filter_map(pat_prop_key).collect();
    let mut missing: Vec<String> = vec![];

    for key in runtimes.iter().flat_map(|runtime| runtime.keys()) {
        if !existing.iter().any(|d| d == *key) && !missing.iter().any(|d| d == *key) {
            missing.push((*key).into());
        }
    }

    // Properties cannot come after a rest element.
    let mut index = pattern
        .props
        .iter()
        .position(|prop| matches!(prop, ObjectPatProp::Rest(_)))
        .unwrap_or(pattern.props.len());

    for key in &missing {
        let alias = runtime_alias(key).unwrap_or(key.as_str());
        pattern
            .props
            .insert(index, create_key_value_pat_prop(key, alias));
        index += 1;
        tracing::debug!(key = key.as_str(), alias, "Added runtime export");
    }

    missing
}

/// Get the key of a pattern property, if static.
///
/// ```js
/// const {a: b, c, ...d} = e
/// //     ^     ^
/// ```
fn pat_prop_key(prop: &ObjectPatProp) -> Option<String> {
    match prop {
        ObjectPatProp::KeyValue(prop) => prop_name_to_str(&prop.key).map(Into::into),
        ObjectPatProp::Assign(prop) => Some(prop.key.id.sym.to_string()),
        ObjectPatProp::Rest(_) => None,
    }
}

/// Check if an expression is `arguments[0]`.
fn is_first_argument(expr: &Expr) -> bool {
    if let Expr::Member(member) = unwrap_parens(expr) {
        if let (Expr::Ident(object), MemberProp::Computed(prop)) =
            (unwrap_parens(&member.obj), &member.prop)
        {
            if &*object.sym == "arguments" {
                if let Expr::Lit(Lit::Num(number)) = unwrap_parens(&prop.expr) {
                    return number.value == 0.0;
                }
            }
        }
    }

    false
}
