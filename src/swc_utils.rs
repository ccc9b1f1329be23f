//! Lots of helpers for dealing with SWC, particularly from unist.

use markdown::{id_cont, id_start, unist::Point, Location};

use swc_core::common::{BytePos, SyntaxContext, DUMMY_SP};
use swc_core::ecma::ast::{
    BindingIdent, ComputedPropName, Expr, Ident, IdentName, KeyValuePatProp, KeyValueProp, Lit,
    MemberExpr, MemberProp, Number, ObjectLit, ObjectPatProp, Pat, Prop, PropName, PropOrSpread,
    Str,
};

/// Turn an SWC byte position into a unist point.
///
/// This assumes the byte position comes from a fixed tree, or is a dummy.
///
/// > 👉 **Note**: SWC byte positions are offset by one: they are `0` when they
/// > are missing or incremented by `1` when valid.
pub fn bytepos_to_point(bytepos: BytePos, location: Option<&Location>) -> Option<Point> {
    let pos = bytepos.0 as usize;

    if pos > 0 {
        if let Some(location) = location {
            return location.to_point(pos - 1);
        }
    }

    None
}

/// Generate an ident name (used in member props and keys).
///
/// ```js
/// a
/// ```
pub fn create_ident(sym: &str) -> IdentName {
    IdentName {
        sym: sym.into(),
        span: DUMMY_SP,
    }
}

/// Generate a binding or reference ident.
///
/// ```js
/// a
/// ```
pub fn create_binding_ident(sym: &str) -> Ident {
    Ident {
        sym: sym.into(),
        optional: false,
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
    }
}

/// Generate an ident expression.
///
/// ```js
/// a
/// ```
pub fn create_ident_expression(sym: &str) -> Expr {
    Expr::Ident(create_binding_ident(sym))
}

/// Generate a binding pattern.
///
/// ```js
/// a
/// ```
pub fn create_ident_pattern(sym: &str) -> Pat {
    Pat::Ident(BindingIdent {
        id: create_binding_ident(sym),
        type_ann: None,
    })
}

/// Generate a string.
///
/// ```js
/// "a"
/// ```
pub fn create_str(value: &str) -> Str {
    Str {
        value: value.into(),
        span: DUMMY_SP,
        raw: None,
    }
}

/// Generate a number expression.
///
/// ```js
/// 1
/// ```
pub fn create_num_expression(value: f64) -> Expr {
    Expr::Lit(Lit::Num(Number {
        value,
        span: DUMMY_SP,
        raw: None,
    }))
}

/// Generate a member expression.
///
/// ```js
/// a.b
/// a[0]
/// ```
pub fn create_member(obj: Expr, prop: MemberProp) -> Expr {
    Expr::Member(MemberExpr {
        obj: Box::new(obj),
        prop,
        span: DUMMY_SP,
    })
}

/// Generate a member prop, computed if needed.
///
/// ```js
/// .a
/// ["b-c"]
/// ```
pub fn create_member_prop(name: &str) -> MemberProp {
    if is_identifier_name(name) {
        MemberProp::Ident(create_ident(name))
    } else {
        MemberProp::Computed(ComputedPropName {
            expr: Box::new(Expr::Lit(Lit::Str(create_str(name)))),
            span: DUMMY_SP,
        })
    }
}

/// Generate a computed numeric member prop.
///
/// ```js
/// [0]
/// ```
pub fn create_index_prop(index: f64) -> MemberProp {
    MemberProp::Computed(ComputedPropName {
        expr: Box::new(create_num_expression(index)),
        span: DUMMY_SP,
    })
}

/// Generate a property name, as a string if needed.
///
/// ```js
/// { a: b }
/// { "b-c": d }
/// ```
pub fn create_prop_name(name: &str) -> PropName {
    if is_identifier_name(name) {
        PropName::Ident(create_ident(name))
    } else {
        PropName::Str(create_str(name))
    }
}

/// Generate an object property, shorthand if possible.
///
/// ```js
/// { a }
/// { a: b }
/// ```
pub fn create_prop(key: &str, value: &str) -> PropOrSpread {
    let prop = if key == value && is_identifier_name(key) {
        Prop::Shorthand(create_binding_ident(key))
    } else {
        Prop::KeyValue(KeyValueProp {
            key: create_prop_name(key),
            value: Box::new(create_ident_expression(value)),
        })
    };

    PropOrSpread::Prop(Box::new(prop))
}

/// Generate an object property with an object as its value.
///
/// ```js
/// { a: { b, c: d } }
/// ```
pub fn create_object_prop(key: &str, props: Vec<PropOrSpread>) -> PropOrSpread {
    PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
        key: create_prop_name(key),
        value: Box::new(Expr::Object(ObjectLit {
            props,
            span: DUMMY_SP,
        })),
    })))
}

/// Generate a key/value prop in an object pattern.
///
/// ```js
/// const { a: b } = c
/// ```
pub fn create_key_value_pat_prop(key: &str, value: &str) -> ObjectPatProp {
    ObjectPatProp::KeyValue(KeyValuePatProp {
        key: create_prop_name(key),
        value: Box::new(create_ident_pattern(value)),
    })
}

/// Get the name of a property key, if it is static.
///
/// ```js
/// { a: b }
/// { "a": b }
/// ```
pub fn prop_name_to_str(name: &PropName) -> Option<&str> {
    match name {
        PropName::Ident(ident) => Some(&*ident.sym),
        PropName::Str(value) => Some(&*value.value),
        _ => None,
    }
}

/// Look through parentheses.
///
/// ```js
/// ((a))
/// ```
pub fn unwrap_parens(mut expr: &Expr) -> &Expr {
    while let Expr::Paren(paren) = expr {
        expr = &*paren.expr;
    }

    expr
}

/// Check if an expression is a string literal, and get its value.
pub fn expr_to_str(expr: &Expr) -> Option<&str> {
    if let Expr::Lit(Lit::Str(value)) = unwrap_parens(expr) {
        Some(&*value.value)
    } else {
        None
    }
}

// Check if a name is a valid identifier name.
pub fn is_identifier_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    for (index, char) in name.chars().enumerate() {
        if if index == 0 {
            !id_start(char)
        } else {
            !id_cont(char, false)
        } {
            return false;
        }
    }

    true
}
