extern crate recma_mdx_import_react;
use pretty_assertions::assert_eq;
use recma_mdx_import_react::{
    mdx_plugin_recma_import_react, parse, serialize, transform, Error, JsxRuntimeKind, Options,
    RuntimeProp,
};

/// Function body compiled from a document that imports five things, where
/// `calls` are the children created for the three components.
fn document(preamble: &str, calls: [&str; 3]) -> String {
    format!(
        "\"use strict\";
{preamble}const {{Fragment: _Fragment, jsx: _jsx, jsxs: _jsxs}} = arguments[0];
const _importMetaUrl = arguments[0].baseUrl;
if (!_importMetaUrl) throw new Error(\"Unexpected missing `options.baseUrl`\");
const {{default: Test1}} = await import(_resolveDynamicMdxSpecifier(\"./context/Test.mjs\"));
const {{default: Test2}} = await import(_resolveDynamicMdxSpecifier(\"./context/Test.mjs\"));
const {{default: Test3}} = await import(_resolveDynamicMdxSpecifier(\"./context/Test.jsx\"));
const {{default: random}} = await import(_resolveDynamicMdxSpecifier(\"./random.js\"));
const {{default: ImageUrl}} = await import(_resolveDynamicMdxSpecifier(\"./image.png\"));
function _createMdxContent(props) {{
  const _components = {{
    p: \"p\",
    ...props.components
  }};
  return _jsxs(_Fragment, {{
    children: [_jsxs(_components.p, {{
      children: [\"Hi \", name, \" \", random(1, 10)]
    }}), \"\\n\", _jsx(Test1, {{{}}}), \"\\n\", _jsx(Test2, {{{}}}), \"\\n\", _jsx(Test3, {{{}}}), \"\\n\", _jsx(\"img\", {{
      src: ImageUrl,
      alt: \"image\"
    }})]
  }});
}}
function MDXContent(props = {{}}) {{
  const {{wrapper: MDXLayout}} = props.components || ({{}});
  return MDXLayout ? _jsx(MDXLayout, {{
    ...props,
    children: _jsx(_createMdxContent, {{
      ...props
    }})
  }}) : _createMdxContent(props);
}}
return {{
  default: MDXContent
}};
function _resolveDynamicMdxSpecifier(d) {{
  if (typeof d !== \"string\") return d;
  try {{
    new URL(d);
    return d;
  }} catch {{}}
  if (d.startsWith(\"/\") || d.startsWith(\"./\") || d.startsWith(\"../\")) return new URL(d, _importMetaUrl).href;
  return d;
}}
",
        calls[0], calls[1], calls[2]
    )
}

fn normalize(value: &str) -> Result<String, Error> {
    serialize(&parse(value, None)?)
}

#[test]
fn defaults() -> Result<(), Error> {
    let result = transform(&document("", ["", "", ""]), &Options::default())?;

    assert!(
        result.contains("const React = arguments[0].React;"),
        "should insert a variable declaration"
    );

    assert_eq!(
        result,
        normalize(&document(
            "const React = arguments[0].React;\n",
            ["React", "React", "React"]
        ))?,
        "should insert `React` into only imported components"
    );

    Ok(())
}

#[test]
fn undefined_options() -> Result<(), Error> {
    let value = document("", ["", "", ""]);
    let result = transform(
        &value,
        &Options {
            arguments_to_be_added: None,
            properties_to_be_injected: None,
            runtime_props_key: None,
        },
    )?;

    assert!(
        !result.contains("const React = arguments[0].React;"),
        "should not insert a variable declaration"
    );

    assert_eq!(
        result,
        normalize(&value)?,
        "should not change anything if options are missing"
    );

    Ok(())
}

#[test]
fn arguments_and_properties() -> Result<(), Error> {
    let props = "React, Fragment: _Fragment, jsx: _jsx, jsxs: _jsxs";

    assert_eq!(
        transform(
            &document("", ["other: 2", "other: \"me\"", "other: re"]),
            &Options {
                arguments_to_be_added: Some(vec!["React".into(), "Preact".into()]),
                properties_to_be_injected: Some(vec![
                    ("React", "React").into(),
                    ("Fragment", "_Fragment").into(),
                    ("jsx", "_jsx").into(),
                    ("jsxs", "_jsxs").into(),
                ]),
                runtime_props_key: None,
            }
        )?,
        normalize(&document(
            "const React = arguments[0].React;\nconst Preact = arguments[0].Preact;\n",
            [
                &format!("{}, other: 2", props),
                &format!("{}, other: \"me\"", props),
                &format!("{}, other: re", props),
            ]
        ))?,
        "should insert several arguments and properties"
    );

    Ok(())
}

#[test]
fn runtime_tokens() -> Result<(), Error> {
    let props = "React, Fragment: _Fragment, jsx: _jsx, jsxs: _jsxs";

    assert_eq!(
        transform(
            &document("", ["", "", ""]),
            &Options {
                properties_to_be_injected: Some(vec![
                    RuntimeProp::from("React"),
                    RuntimeProp::from(JsxRuntimeKind::Production),
                ]),
                ..Options::default()
            }
        )?,
        normalize(&document(
            "const React = arguments[0].React;\n",
            [props, props, props]
        ))?,
        "should expand `jsx-runtime` into its exports"
    );

    Ok(())
}

#[test]
fn runtime_props_key() -> Result<(), Error> {
    let props = "runtimeProps: {React, Fragment: _Fragment, jsx: _jsx, jsxs: _jsxs}";

    assert_eq!(
        transform(
            &document("", ["", "", ""]),
            &Options {
                properties_to_be_injected: Some(vec!["React".into(), "jsx-runtime".into()]),
                runtime_props_key: Some("runtimeProps".into()),
                ..Options::default()
            }
        )?,
        normalize(&document(
            "const React = arguments[0].React;\n",
            [props, props, props]
        ))?,
        "should nest properties under a key"
    );

    Ok(())
}

#[test]
fn development() -> Result<(), Error> {
    let result = transform(
        "const {Fragment: _Fragment, jsxDEV: _jsxDEV} = arguments[0];
const {default: Test} = await import(_resolveDynamicMdxSpecifier(\"./Test.jsx\"));
function _createMdxContent(props) {
  return _jsxDEV(Test, {}, undefined, false, {fileName: \"example.mdx\"}, this);
}",
        &Options {
            arguments_to_be_added: None,
            properties_to_be_injected: Some(vec!["jsx-dev-runtime".into()]),
            runtime_props_key: None,
        },
    )?;

    assert_eq!(
        result,
        normalize(
            "const {Fragment: _Fragment, jsxDEV: _jsxDEV, jsxDev: _jsxDev} = arguments[0];
const {default: Test} = await import(_resolveDynamicMdxSpecifier(\"./Test.jsx\"));
function _createMdxContent(props) {
  return _jsxDEV(Test, {Fragment: _Fragment, jsxDev: _jsxDev}, undefined, false, {fileName: \"example.mdx\"}, this);
}"
        )?,
        "should support the development runtime"
    );

    Ok(())
}

#[test]
fn import_shapes() -> Result<(), Error> {
    assert_eq!(
        transform(
            "const {default: A} = await import(\"./a.js\");
const B = (await import(_r(\"./b.mjs\"))).default;
const {default: C, other} = await import(_r(\"./c.cjs\"));
const D = await import(\"./d.jsx\");
const {default: E} = await import(\"./e.json\");
const {default: f} = await import(\"./f.js\");
_jsx(A, {});
_jsx(B, {});
_jsx(C, {});
_jsx(D, {});
_jsx(E, {});
_jsx(f, {});",
            &Options {
                arguments_to_be_added: None,
                ..Options::default()
            }
        )?,
        normalize(
            "const {default: A} = await import(\"./a.js\");
const B = (await import(_r(\"./b.mjs\"))).default;
const {default: C, other} = await import(_r(\"./c.cjs\"));
const D = await import(\"./d.jsx\");
const {default: E} = await import(\"./e.json\");
const {default: f} = await import(\"./f.js\");
_jsx(A, {React});
_jsx(B, {React});
_jsx(C, {React});
_jsx(D, {React});
_jsx(E, {});
_jsx(f, {});"
        )?,
        "should find components imported in any supported shape"
    );

    Ok(())
}

#[test]
fn non_identifiers() -> Result<(), Error> {
    let result = transform(
        "var a;\nconst {default: A} = await import(\"./a.js\");\n_jsx(A, {});",
        &Options {
            arguments_to_be_added: Some(vec!["b-c".into()]),
            properties_to_be_injected: Some(vec![("a", "b-c").into(), ("d-e", "f").into()]),
            runtime_props_key: None,
        },
    )?;

    assert_eq!(
        result,
        normalize(
            "var a;\nconst {default: A} = await import(\"./a.js\");\n_jsx(A, {\"d-e\": f});"
        )?,
        "should skip names and values that are not identifiers"
    );
    assert_eq!(
        normalize(&result)?,
        result,
        "should yield code that parses again"
    );

    Ok(())
}

#[test]
fn program() -> Result<(), Error> {
    let mut program = parse(
        "// Comment.\nconst {default: A} = await import(\"./a.js\");\n_jsx(A, {});",
        Some("example.mdx".into()),
    )?;

    mdx_plugin_recma_import_react(&mut program, &Options::default());

    let result = serialize(&program)?;

    assert_eq!(program.path, Some("example.mdx".into()), "should keep the path");
    assert!(result.contains("// Comment."), "should keep comments");
    assert!(
        result.contains("const React = arguments[0].React;"),
        "should insert into a parsed program"
    );
    assert!(
        !result.contains("_jsx(A, {})"),
        "should inject into a parsed program"
    );

    Ok(())
}

#[test]
fn errors() {
    let result = transform("const a = ;", &Options::default());

    match result {
        Err(error) => {
            assert!(error.point.is_some(), "should include a place in errors");
        }
        Ok(_) => panic!("should crash on invalid JavaScript"),
    }
}
