//! Pass runtime values to imported components.
//!
//! Turns:
//!
//! ```js
//! _jsx(Test, {a: 1})
//! ```
//!
//! Into:
//!
//! ```js
//! _jsx(Test, {React, a: 1})
//! ```

use crate::swc_utils::{create_object_prop, create_prop};
use swc_core::ecma::ast::{CallExpr, Callee, Expr, Module, PropOrSpread};
use swc_core::ecma::visit::{noop_visit_mut_type, VisitMut, VisitMutWith};

/// Names of functions that JSX compiles to.
///
/// These are matched by name: renamed factories are not found.
pub(crate) const FACTORY_NAMES: [&str; 3] = ["_jsx", "_jsxs", "_jsxDEV"];

/// Configuration.
#[derive(Debug, Default, Clone)]
pub struct Options<'a> {
    /// Names of components to inject into.
    pub components: &'a [String],
    /// Property keys and the bindings used as their values.
    pub properties: &'a [(String, String)],
    /// Key to nest properties under, if any.
    pub runtime_props_key: Option<&'a str>,
}

/// Inject properties into calls that create imported components.
///
/// Yields how many calls were changed.
pub fn swc_util_inject_properties(module: &mut Module, options: &Options) -> usize {
    if options.components.is_empty() || options.properties.is_empty() {
        return 0;
    }

    let mut state = State {
        components: options.components,
        props: create_props(options.properties, options.runtime_props_key),
        count: 0,
    };

    module.visit_mut_with(&mut state);

    tracing::debug!(count = state.count, "Injected properties into components");

    state.count
}

/// Create the properties to inject.
///
/// ```js
/// {React, jsx: _jsx}
/// {runtimeProps: {React, jsx: _jsx}}
/// ```
fn create_props(properties: &[(String, String)], key: Option<&str>) -> Vec<PropOrSpread> {
    let props = properties
        .iter()
        .map(|(key, value)| create_prop(key, value))
        .collect();

    if let Some(key) = key {
        vec![create_object_prop(key, props)]
    } else {
        props
    }
}

/// Context.
#[derive(Debug)]
struct State<'a> {
    /// Names of components.
    components: &'a [String],
    /// Properties to add to each matched call.
    props: Vec<PropOrSpread>,
    /// Number of changed calls.
    count: usize,
}

impl<'a> State<'a> {
    /// Check if a call creates an imported component, and inject if so.
    fn inject(&mut self, call: &mut CallExpr) {
        let Callee::Expr(callee) = &call.callee else {
            return;
        };

        let Expr::Ident(callee) = &**callee else {
            return;
        };

        if !FACTORY_NAMES.contains(&&*callee.sym) {
            return;
        }

        // Component, not a string (`"img"`) or member (`_components.p`).
        let component = match call.args.first() {
            Some(arg) if arg.spread.is_none() => match &*arg.expr {
                Expr::Ident(ident) => &ident.sym,
                _ => return,
            },
            _ => return,
        };

        if !self.components.iter().any(|name| name == &**component) {
            return;
        }

        // Only add to existing props objects.
        if let Some(arg) = call.args.get_mut(1) {
            if arg.spread.is_none() {
                if let Expr::Object(object) = &mut *arg.expr {
                    object.props.splice(0..0, self.props.iter().cloned());
                    self.count += 1;
                }
            }
        }
    }
}

impl<'a> VisitMut for State<'a> {
    noop_visit_mut_type!();

    /// Inject into factory calls, including those in arguments.
    fn visit_mut_call_expr(&mut self, node: &mut CallExpr) {
        self.inject(node);
        node.visit_mut_children_with(self);
    }
}
