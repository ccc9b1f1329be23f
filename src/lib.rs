//! Public API of `recma-mdx-import-react`.
//!
//! This module exposes primarily [`transform()`][] and
//! [`mdx_plugin_recma_import_react()`][].
//!
//! *   [`transform()`][]
//!     turns a function body compiled from MDX into one that gets React
//!     from its first argument and passes it to imported components
//! *   [`mdx_plugin_recma_import_react()`][]
//!     does the same on an already parsed [`Program`][]
#![deny(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]

extern crate markdown;
mod configuration;
pub mod error;
mod mdx_plugin_recma_import_react;
pub mod swc;
mod swc_util_detect_components;
mod swc_util_inject_properties;
mod swc_util_insert_arguments;
mod swc_util_walk;
mod swc_util_widen_runtime;
mod swc_utils;

pub use crate::configuration::{JsxRuntimeKind, Options, RuntimeProp};
pub use crate::error::Error;
pub use crate::mdx_plugin_recma_import_react::mdx_plugin_recma_import_react;
pub use crate::swc::{parse, serialize, Program};

/// Get React from the first argument of a function body and pass it to
/// imported components.
///
/// ## Examples
///
/// ```
/// use recma_mdx_import_react::{transform, Error};
/// # fn main() -> Result<(), Error> {
///
/// let result = transform(
///     "const {jsx: _jsx} = arguments[0];\nconst {default: A} = await import(\"./a.js\");\nreturn _jsx(A, {});",
///     &Default::default(),
/// )?;
///
/// assert!(result.contains("const React = arguments[0].React;"));
/// # Ok(())
/// # }
/// ```
///
/// ## Errors
///
/// This errors if `value` is not valid JavaScript.
pub fn transform(value: &str, options: &Options) -> Result<String, Error> {
    let mut program = parse(value, None)?;
    mdx_plugin_recma_import_react(&mut program, options);
    serialize(&program)
}
