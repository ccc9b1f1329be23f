extern crate recma_mdx_import_react;
use recma_mdx_import_react::{transform, Error, Options};

/// Example that transforms a function body compiled from MDX.
fn main() -> Result<(), Error> {
    let body = r#""use strict";
const {Fragment: _Fragment, jsx: _jsx, jsxs: _jsxs} = arguments[0];
const {default: Test} = await import(_resolveDynamicMdxSpecifier("./context/Test.mjs"));
function _createMdxContent(props) {
  return _jsx(Test, {});
}
"#;

    println!("{}", transform(body, &Options::default())?);

    // Pass the JSX runtime too, nested under `runtimeProps`.
    println!(
        "{}",
        transform(
            body,
            &Options {
                properties_to_be_injected: Some(vec!["React".into(), "jsx-runtime".into()]),
                runtime_props_key: Some("runtimeProps".into()),
                ..Options::default()
            }
        )?
    );

    Ok(())
}
