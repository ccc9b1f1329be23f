//! Find components imported at the top level of a function body.
//!
//! With `outputFormat: 'function-body'`, MDX turns
//! `import Test from "./Test.mjs"` into:
//!
//! ```js
//! const {default: Test} = await import(_resolveDynamicMdxSpecifier("./Test.mjs"));
//! ```
//!
//! Other tools spell that differently, so several shapes are supported.

use crate::swc_util_walk::{walk_statements, Control};
use crate::swc_utils::{expr_to_str, prop_name_to_str, unwrap_parens};
use swc_core::ecma::ast::{
    Callee, Decl, Expr, MemberProp, Module, ObjectPatProp, Pat, Stmt, VarDeclarator,
};

/// Extensions of specifiers that can be components.
const SCRIPT_EXTENSIONS: [&str; 4] = [".js", ".mjs", ".cjs", ".jsx"];

/// Ways to bind the result of a dynamic import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImportShape {
    /// `const {default: A} = (await import(x)).default`
    DestructuredDefaultMember,
    /// `const A = (await import(x)).default`
    DefaultMember,
    /// `const {default: A} = await import(x)`
    DestructuredDefault,
    /// `const A = await import(x)`
    Namespace,
}

/// A declarator that binds an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImportBinding<'a> {
    /// How it is bound.
    pub shape: ImportShape,
    /// Local name.
    pub name: &'a str,
    /// Module specifier.
    pub specifier: &'a str,
}

/// Matcher for one shape: yields the bound name and the source expression
/// passed to `import()`.
type Matcher = for<'a> fn(&'a VarDeclarator) -> Option<(&'a str, &'a Expr)>;

/// Shapes, in order of priority.
const MATCHERS: [(ImportShape, Matcher); 4] = [
    (
        ImportShape::DestructuredDefaultMember,
        match_destructured_default_member,
    ),
    (ImportShape::DefaultMember, match_default_member),
    (ImportShape::DestructuredDefault, match_destructured_default),
    (ImportShape::Namespace, match_namespace),
];

/// Find the names of components imported at the top level.
///
/// Names can occur more than once, if they are imported more than once.
pub fn swc_util_detect_components(module: &Module) -> Vec<String> {
    let mut components = vec![];

    walk_statements(module, |stmt, place| {
        if place.depth > 0 {
            return Control::Skip;
        }

        if let Stmt::Decl(Decl::Var(decl)) = stmt {
            for declarator in &decl.decls {
                if let Some(binding) = match_import_binding(declarator) {
                    if !is_component_name(binding.name) {
                        tracing::trace!(name = binding.name, "Ignoring non-component import");
                    } else if !is_script_specifier(binding.specifier) {
                        tracing::trace!(
                            name = binding.name,
                            specifier = binding.specifier,
                            "Ignoring non-script import"
                        );
                    } else {
                        tracing::debug!(
                            name = binding.name,
                            specifier = binding.specifier,
                            shape = ?binding.shape,
                            "Detected imported component"
                        );
                        components.push(binding.name.to_string());
                    }
                }
            }
        }

        Control::Continue
    });

    components
}

/// Match a declarator against the supported shapes.
pub(crate) fn match_import_binding(
    declarator: &VarDeclarator,
) -> Option<ImportBinding<'_>> {
    MATCHERS.iter().find_map(|(shape, matcher)| {
        let (name, source) = matcher(declarator)?;
        let specifier = import_specifier(source)?;
        Some(ImportBinding {
            shape: *shape,
            name,
            specifier,
        })
    })
}

/// `{default: A} = (await import(x)).default`
fn match_destructured_default_member(declarator: &VarDeclarator) -> Option<(&str, &Expr)> {
    Some((
        destructured_default_name(&declarator.name)?,
        default_member_source(declarator.init.as_deref()?)?,
    ))
}

/// `A = (await import(x)).default`
fn match_default_member(declarator: &VarDeclarator) -> Option<(&str, &Expr)> {
    Some((
        ident_name(&declarator.name)?,
        default_member_source(declarator.init.as_deref()?)?,
    ))
}

/// `{default: A} = await import(x)`
fn match_destructured_default(declarator: &VarDeclarator) -> Option<(&str, &Expr)> {
    Some((
        destructured_default_name(&declarator.name)?,
        awaited_import_source(declarator.init.as_deref()?)?,
    ))
}

/// `A = await import(x)`
fn match_namespace(declarator: &VarDeclarator) -> Option<(&str, &Expr)> {
    Some((
        ident_name(&declarator.name)?,
        awaited_import_source(declarator.init.as_deref()?)?,
    ))
}

/// Get `A` from `A`.
fn ident_name(pat: &Pat) -> Option<&str> {
    if let Pat::Ident(ident) = pat {
        Some(&*ident.id.sym)
    } else {
        None
    }
}

/// Get `A` from `{default: A, ...}`.
///
/// Only the first property is checked.
fn destructured_default_name(pat: &Pat) -> Option<&str> {
    if let Pat::Object(object) = pat {
        if let Some(ObjectPatProp::KeyValue(prop)) = object.props.first() {
            if prop_name_to_str(&prop.key) == Some("default") {
                return ident_name(&prop.value);
            }
        }
    }

    None
}

/// Get `x` from `(await import(x)).default`.
fn default_member_source(expr: &Expr) -> Option<&Expr> {
    if let Expr::Member(member) = unwrap_parens(expr) {
        if let MemberProp::Ident(prop) = &member.prop {
            if &*prop.sym == "default" {
                return awaited_import_source(&member.obj);
            }
        }
    }

    None
}

/// Get `x` from `await import(x)`.
fn awaited_import_source(expr: &Expr) -> Option<&Expr> {
    if let Expr::Await(await_expr) = unwrap_parens(expr) {
        if let Expr::Call(call) = unwrap_parens(&await_expr.arg) {
            if let Callee::Import(_) = call.callee {
                return call
                    .args
                    .first()
                    .filter(|arg| arg.spread.is_none())
                    .map(|arg| &*arg.expr);
            }
        }
    }

    None
}

/// Get the specifier from the source of an import.
///
/// ```js
/// _resolveDynamicMdxSpecifier("./a.js")
/// "./a.js"
/// ```
fn import_specifier(source: &Expr) -> Option<&str> {
    match unwrap_parens(source) {
        Expr::Call(call) => {
            if let Callee::Expr(_) = call.callee {
                call.args
                    .first()
                    .filter(|arg| arg.spread.is_none())
                    .and_then(|arg| expr_to_str(&arg.expr))
            } else {
                None
            }
        }
        expr => expr_to_str(expr),
    }
}

/// Check if a name looks like a component: `A`, `_a`.
pub(crate) fn is_component_name(name: &str) -> bool {
    matches!(name.as_bytes().first(), Some(b'A'..=b'Z' | b'_'))
}

/// Check if a specifier looks like a script: `./a.js`, `b.jsx`.
pub(crate) fn is_script_specifier(specifier: &str) -> bool {
    SCRIPT_EXTENSIONS
        .iter()
        .any(|extension| specifier.ends_with(extension))
}
