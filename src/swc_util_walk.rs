//! Walk statements, with control over where to go next.
//!
//! SWC visitors always walk everything.
//! This walks statements in preorder and lets the visitor decide, per
//! statement, whether to enter it, skip it, or stop.

use swc_core::ecma::ast::{Decl, Module, ModuleItem, Stmt};

/// What to do after visiting a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
    /// Walk into the statement.
    Continue,
    /// Do not walk into the statement, but continue with its siblings.
    Skip,
    /// Stop walking.
    Exit,
}

/// Where a visited statement is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Place {
    /// How many statements this one is nested in (`0` for the program body).
    pub depth: usize,
    /// Index in the list that contains this statement.
    ///
    /// For the program body, this is the index in `Module::body`.
    /// The blocks of a `try`, the cases of a `switch`, and the branches of
    /// an `if` are separate lists.
    pub index: usize,
}

/// Define a walker over shared or mutable references.
macro_rules! walker {
    ($walk:ident, $walk_statement:ident, $child_lists:ident, $iter:ident $(, $mut:tt)?) => {
        /// Walk the statements of a module in preorder.
        ///
        /// Module declarations (`import`, `export`) are not visited, but they
        /// do count for the index of top-level statements.
        pub(crate) fn $walk<Visitor>(module: &$($mut)? Module, mut visitor: Visitor)
        where
            Visitor: FnMut(&$($mut)? Stmt, Place) -> Control,
        {
            for (index, item) in module.body.$iter().enumerate() {
                if let ModuleItem::Stmt(stmt) = item {
                    let place = Place { depth: 0, index };
                    if $walk_statement(stmt, place, &mut visitor) == Control::Exit {
                        return;
                    }
                }
            }
        }

        /// Visit a statement and maybe its children.
        ///
        /// Yields `Control::Exit` if walking must stop, `Control::Continue`
        /// otherwise.
        fn $walk_statement<Visitor>(
            stmt: &$($mut)? Stmt,
            place: Place,
            visitor: &mut Visitor,
        ) -> Control
        where
            Visitor: FnMut(&$($mut)? Stmt, Place) -> Control,
        {
            match visitor(stmt, place) {
                Control::Exit => return Control::Exit,
                Control::Skip => return Control::Continue,
                Control::Continue => {}
            }

            for list in $child_lists(stmt) {
                for (index, child) in list.into_iter().enumerate() {
                    let place = Place {
                        depth: place.depth + 1,
                        index,
                    };

                    if $walk_statement(child, place, visitor) == Control::Exit {
                        return Control::Exit;
                    }
                }
            }

            Control::Continue
        }

        /// Get the lists of statements directly in a statement.
        ///
        /// Expressions are not entered: function expressions and arrows are
        /// not walked, function declarations are.
        fn $child_lists(stmt: &$($mut)? Stmt) -> Vec<Vec<&$($mut)? Stmt>> {
            match stmt {
                Stmt::Block(block) => vec![block.stmts.$iter().collect()],
                Stmt::If(node) => {
                    let mut lists = vec![vec![&$($mut)? *node.cons]];
                    if let Some(alt) = &$($mut)? node.alt {
                        lists.push(vec![&$($mut)? **alt]);
                    }
                    lists
                }
                Stmt::With(node) => vec![vec![&$($mut)? *node.body]],
                Stmt::Labeled(node) => vec![vec![&$($mut)? *node.body]],
                Stmt::While(node) => vec![vec![&$($mut)? *node.body]],
                Stmt::DoWhile(node) => vec![vec![&$($mut)? *node.body]],
                Stmt::For(node) => vec![vec![&$($mut)? *node.body]],
                Stmt::ForIn(node) => vec![vec![&$($mut)? *node.body]],
                Stmt::ForOf(node) => vec![vec![&$($mut)? *node.body]],
                Stmt::Switch(node) => node
                    .cases
                    .$iter()
                    .map(|case| case.cons.$iter().collect())
                    .collect(),
                Stmt::Try(node) => {
                    let mut lists = vec![node.block.stmts.$iter().collect()];
                    if let Some(handler) = &$($mut)? node.handler {
                        lists.push(handler.body.stmts.$iter().collect());
                    }
                    if let Some(finalizer) = &$($mut)? node.finalizer {
                        lists.push(finalizer.stmts.$iter().collect());
                    }
                    lists
                }
                Stmt::Decl(Decl::Fn(node)) => match &$($mut)? node.function.body {
                    Some(body) => vec![body.stmts.$iter().collect()],
                    None => vec![],
                },
                _ => vec![],
            }
        }
    };
}

walker!(walk_statements, walk_statement, child_lists, iter);
walker!(
    walk_statements_mut,
    walk_statement_mut,
    child_lists_mut,
    iter_mut,
    mut
);
