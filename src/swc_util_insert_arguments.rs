//! Get values out of the first argument of the function body.

use crate::swc_util_walk::{walk_statements_mut, Control};
use crate::swc_utils::{
    create_ident_expression, create_ident_pattern, create_index_prop, create_member,
    create_member_prop, is_identifier_name,
};
use swc_core::common::{SyntaxContext, DUMMY_SP};
use swc_core::ecma::ast::{Decl, Module, ModuleItem, Stmt, VarDecl, VarDeclKind, VarDeclarator};

/// Insert a `const x = arguments[0].x;` for each name, before the first
/// top-level variable declaration.
///
/// Nothing happens if there is no such declaration.
/// Yields the index the declarations were inserted at.
pub fn swc_util_insert_arguments(module: &mut Module, names: &[String]) -> Option<usize> {
    // `const b-c = …` is not a declaration.
    let names: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|name| is_identifier_name(name))
        .collect();

    if names.is_empty() {
        return None;
    }

    let mut position = None;

    walk_statements_mut(module, |stmt, place| {
        if matches!(stmt, Stmt::Decl(Decl::Var(_))) {
            position = Some(place.index);
            Control::Exit
        } else {
            // Only top-level declarations count.
            Control::Skip
        }
    });

    let index = position?;
    module.body.splice(
        index..index,
        names.iter().copied().map(create_argument_decl),
    );

    tracing::debug!(index, names = ?names, "Inserted argument declarations");

    Some(index)
}

/// Create a declaration that gets a field of the first argument.
///
/// ```js
/// const a = arguments[0].a;
/// ```
fn create_argument_decl(name: &str) -> ModuleItem {
    let first_argument = create_member(create_ident_expression("arguments"), create_index_prop(0.0));

    ModuleItem::Stmt(Stmt::Decl(Decl::Var(Box::new(VarDecl {
        kind: VarDeclKind::Const,
        declare: false,
        decls: vec![VarDeclarator {
            name: create_ident_pattern(name),
            init: Some(Box::new(create_member(
                first_argument,
                create_member_prop(name),
            ))),
            span: DUMMY_SP,
            definite: false,
        }],
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
    }))))
}
