//! Get React (or other values) from the first argument of a function body,
//! and pass it to imported components.
//!
//! MDX compiled with `outputFormat: 'function-body'` is evaluated with the
//! runtime passed as `arguments[0]`.
//! Components imported by such a document are evaluated elsewhere and may
//! use a different copy of React than the one the host passes in.
//! This plugin makes the host values available in the document, and hands
//! them to those components as props.

use crate::configuration::Options;
use crate::swc::Program;
use crate::swc_util_detect_components::swc_util_detect_components;
use crate::swc_util_inject_properties::{swc_util_inject_properties, Options as InjectOptions};
use crate::swc_util_insert_arguments::swc_util_insert_arguments;
use crate::swc_util_widen_runtime::swc_util_widen_runtime;

/// Inject argument declarations and runtime props into a program.
///
/// Never fails: unexpected shapes are left alone.
pub fn mdx_plugin_recma_import_react(program: &mut Program, options: &Options) {
    let settings = options.resolve();
    let span = tracing::debug_span!("recma_import_react", path = ?program.path);
    let _enter = span.enter();

    // ```js
    // const React = arguments[0].React;
    // ```
    swc_util_insert_arguments(&mut program.module, &settings.arguments);

    if settings.properties.is_empty() {
        return;
    }

    let components = swc_util_detect_components(&program.module);

    // ```js
    // _jsx(Test, {React})
    // ```
    swc_util_inject_properties(
        &mut program.module,
        &InjectOptions {
            components: &components,
            properties: &settings.properties,
            runtime_props_key: settings.runtime_props_key.as_deref(),
        },
    );

    // ```js
    // const {Fragment: _Fragment, jsx: _jsx, jsxs: _jsxs} = arguments[0];
    // ```
    swc_util_widen_runtime(&mut program.module, &settings.runtimes);
}
