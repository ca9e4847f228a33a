//! Component Descriptors
//!
//! Declarative per-node data a page is built from:
//!
//! ```json
//! {
//!   "type": "container",
//!   "options": { "referenceName": "form", "script": "...", "scriptFiles": ["a.js"] },
//!   "children": { "name": { "type": "label" } }
//! }
//! ```
//!
//! Children stay raw JSON until their own construction so a malformed child
//! fails alone instead of failing the whole page parse.

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::path::ElementPath;
use crate::error::{Error, Result};

/// Options recognized on every component, plus widget-specific keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOptions {
    /// Name under which the component is published in the reference registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,
    /// Inline script executed with the component as context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    /// Remote script files, executed in listed order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub script_files: Vec<String>,
    /// Widget-specific keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ComponentOptions {
    /// Optional string option
    pub fn str_option(&self, path: &ElementPath, key: &str) -> Result<Option<&str>> {
        match self.extra.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(invalid(path, key, format!("expected a string, got {other}"))),
        }
    }

    /// Optional boolean option
    pub fn bool_option(&self, path: &ElementPath, key: &str) -> Result<Option<bool>> {
        match self.extra.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(invalid(path, key, format!("expected a boolean, got {other}"))),
        }
    }

    /// Optional strictly positive integer option
    pub fn positive_option(&self, path: &ElementPath, key: &str) -> Result<Option<u32>> {
        match self.extra.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .filter(|n| *n > 0)
                .map(Some)
                .ok_or_else(|| invalid(path, key, format!("expected a positive integer, got {value}"))),
        }
    }
}

fn invalid(path: &ElementPath, key: &str, message: String) -> Error {
    Error::InvalidOption {
        path: path.to_string(),
        key: key.to_string(),
        message,
    }
}

#[derive(Debug, Deserialize)]
struct RawDescriptor {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    options: ComponentOptions,
    #[serde(default)]
    children: LinkedHashMap<String, Value>,
}

/// One decoded descriptor node
#[derive(Debug, Clone)]
pub struct ComponentDescriptor {
    /// Declared component type, used for factory dispatch
    pub kind: String,
    pub options: ComponentOptions,
    /// Child descriptors in declaration order, still undecoded
    pub children: LinkedHashMap<String, Value>,
}

impl ComponentDescriptor {
    /// Decode the descriptor of the component at `path`
    pub fn from_value(path: &ElementPath, raw: &Value) -> Result<Self> {
        let decoded: RawDescriptor =
            serde_json::from_value(raw.clone()).map_err(|source| Error::MalformedDescriptor {
                path: path.to_string(),
                source,
            })?;

        let kind = decoded.kind.ok_or_else(|| Error::MissingOption {
            path: path.to_string(),
            key: "type".to_string(),
        })?;

        Ok(Self {
            kind,
            options: decoded.options,
            children: decoded.children,
        })
    }
}
