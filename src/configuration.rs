//! Configuration.

use crate::swc_utils::is_identifier_name;

/// Keys exposed by JSX runtimes, and the local names MDX binds them to.
///
/// ```js
/// const {Fragment: _Fragment, jsx: _jsx, jsxs: _jsxs} = arguments[0]
/// ```
pub(crate) const RUNTIME_KEYS: [(&str, &str); 4] = [
    ("Fragment", "_Fragment"),
    ("jsx", "_jsx"),
    ("jsxs", "_jsxs"),
    ("jsxDev", "_jsxDev"),
];

/// Get the local alias of a runtime key.
pub(crate) fn runtime_alias(key: &str) -> Option<&'static str> {
    RUNTIME_KEYS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, alias)| *alias)
}

/// Group of runtime exports that can be injected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serializable", serde(rename_all = "camelCase"))]
pub enum JsxRuntimeKind {
    /// `jsx-runtime`: `Fragment`, `jsx`, `jsxs`.
    Production,
    /// `jsx-dev-runtime`: `Fragment`, `jsxDev`.
    Development,
}

impl JsxRuntimeKind {
    /// Keys exposed by this runtime.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            JsxRuntimeKind::Production => &["Fragment", "jsx", "jsxs"],
            JsxRuntimeKind::Development => &["Fragment", "jsxDev"],
        }
    }

    /// Turn the runtime into `(key, alias)` pairs.
    pub fn pairs(self) -> Vec<(String, String)> {
        self.keys()
            .iter()
            .filter_map(|key| runtime_alias(key).map(|alias| ((*key).into(), alias.into())))
            .collect()
    }
}

/// Thing to inject into the props of imported components.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serializable",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RuntimePropValue", into = "RuntimePropValue")
)]
pub enum RuntimeProp {
    /// Property key and the binding used as its value.
    ///
    /// `Pair("jsx", "_jsx")` injects `jsx: _jsx`, `Pair("React", "React")`
    /// injects `React`.
    Pair(String, String),
    /// All keys of a JSX runtime, bound to their aliases.
    Runtime(JsxRuntimeKind),
}

impl From<&str> for RuntimeProp {
    /// `"jsx-runtime"` and `"jsx-dev-runtime"` are runtimes, other names
    /// are bound to themselves.
    fn from(value: &str) -> Self {
        match value {
            "jsx-runtime" => RuntimeProp::Runtime(JsxRuntimeKind::Production),
            "jsx-dev-runtime" => RuntimeProp::Runtime(JsxRuntimeKind::Development),
            name => RuntimeProp::Pair(name.into(), name.into()),
        }
    }
}

impl From<(&str, &str)> for RuntimeProp {
    fn from((key, value): (&str, &str)) -> Self {
        RuntimeProp::Pair(key.into(), value.into())
    }
}

impl From<JsxRuntimeKind> for RuntimeProp {
    fn from(value: JsxRuntimeKind) -> Self {
        RuntimeProp::Runtime(value)
    }
}

/// Serialized form of [`RuntimeProp`]: `"React"`, `"jsx-runtime"`, or
/// `["jsx", "_jsx"]`.
#[cfg(feature = "serializable")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum RuntimePropValue {
    Name(String),
    Pair(String, String),
}

#[cfg(feature = "serializable")]
impl From<RuntimePropValue> for RuntimeProp {
    fn from(value: RuntimePropValue) -> Self {
        match value {
            RuntimePropValue::Name(name) => RuntimeProp::from(name.as_str()),
            RuntimePropValue::Pair(key, value) => RuntimeProp::Pair(key, value),
        }
    }
}

#[cfg(feature = "serializable")]
impl From<RuntimeProp> for RuntimePropValue {
    fn from(value: RuntimeProp) -> Self {
        match value {
            RuntimeProp::Pair(key, value) if key == value => RuntimePropValue::Name(key),
            RuntimeProp::Pair(key, value) => RuntimePropValue::Pair(key, value),
            RuntimeProp::Runtime(JsxRuntimeKind::Production) => {
                RuntimePropValue::Name("jsx-runtime".into())
            }
            RuntimeProp::Runtime(JsxRuntimeKind::Development) => {
                RuntimePropValue::Name("jsx-dev-runtime".into())
            }
        }
    }
}

/// Configuration (optional).
///
/// Fields left out of a struct update (`..Default::default()`) keep their
/// defaults.
/// Setting a field to `None` (or an empty list) turns that feature off.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serializable", serde(rename_all = "camelCase", default))]
pub struct Options {
    /// Names to copy out of `arguments[0]` (default: `Some(vec!["React"])`).
    ///
    /// Each name `x` becomes `const x = arguments[0].x;`, inserted before
    /// the first top-level variable declaration.
    pub arguments_to_be_added: Option<Vec<String>>,

    /// Properties to inject into imported components (default:
    /// `Some(vec![RuntimeProp::Pair("React", "React")])`).
    ///
    /// Turning this off also turns off component detection and the
    /// widening of the runtime binding.
    pub properties_to_be_injected: Option<Vec<RuntimeProp>>,

    /// Key to nest injected properties under (default: `None`, example:
    /// `Some("runtimeProps".into())`).
    ///
    /// When `None`, properties are added directly to the props object:
    /// `_jsx(Test, {React})`.
    /// Otherwise they are wrapped: `_jsx(Test, {runtimeProps: {React}})`.
    pub runtime_props_key: Option<String>,
}

impl Default for Options {
    /// Get `React` from `arguments[0]` and pass it to imported components.
    fn default() -> Self {
        Self {
            arguments_to_be_added: Some(vec!["React".into()]),
            properties_to_be_injected: Some(vec![RuntimeProp::from("React")]),
            runtime_props_key: None,
        }
    }
}

impl Options {
    /// Normalize into the settings the pass works with.
    pub(crate) fn resolve(&self) -> Settings {
        let mut properties: Vec<(String, String)> = vec![];
        let mut runtimes = vec![];

        for prop in self.properties_to_be_injected.iter().flatten() {
            let pairs = match prop {
                RuntimeProp::Pair(key, value) => vec![(key.clone(), value.clone())],
                RuntimeProp::Runtime(kind) => {
                    if !runtimes.contains(kind) {
                        runtimes.push(*kind);
                    }
                    kind.pairs()
                }
            };

            for (key, value) in pairs {
                // Values are references: `{a: b-c}` would be a subtraction.
                if !is_identifier_name(&value) {
                    tracing::trace!(
                        key = key.as_str(),
                        value = value.as_str(),
                        "Ignoring property with a non-identifier value"
                    );
                    continue;
                }

                // Same key twice: keep the first place, take the last value.
                if let Some(existing) = properties.iter_mut().find(|(name, _)| *name == key) {
                    existing.1 = value;
                } else {
                    properties.push((key, value));
                }
            }
        }

        let arguments = self
            .arguments_to_be_added
            .iter()
            .flatten()
            .filter(|name| {
                let valid = is_identifier_name(name);
                if !valid {
                    tracing::trace!(name = name.as_str(), "Ignoring non-identifier argument");
                }
                valid
            })
            .cloned()
            .collect();

        Settings {
            arguments,
            properties,
            runtimes,
            runtime_props_key: self.runtime_props_key.clone(),
        }
    }
}

/// Normalized configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    /// Names to get from `arguments[0]`, duplicates included.
    pub arguments: Vec<String>,
    /// Unique property keys, with the bindings used as values.
    pub properties: Vec<(String, String)>,
    /// Runtimes whose keys must be destructured from `arguments[0]`.
    pub runtimes: Vec<JsxRuntimeKind>,
    /// Key to nest properties under.
    pub runtime_props_key: Option<String>,
}
