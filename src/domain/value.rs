//! Component Values
//!
//! Wire shape exchanged through `getValue`/`setValue`/`setState`.

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{DEFAULT_MODAL_HEIGHT, DEFAULT_MODAL_WIDTH};

/// Value of one component, nested for containers
///
/// `enabled` and `visible` are only read on the state channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<LinkedHashMap<String, ComponentValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl ComponentValue {
    /// Value carrying only widget content
    pub fn content(content: Value) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }

    /// Value carrying child values keyed by local name
    pub fn components(components: LinkedHashMap<String, ComponentValue>) -> Self {
        Self {
            components: Some(components),
            ..Self::default()
        }
    }

    /// Add one child value
    pub fn with_child(mut self, key: impl Into<String>, value: ComponentValue) -> Self {
        self.components
            .get_or_insert_with(LinkedHashMap::new)
            .insert(key.into(), value);
        self
    }

    /// Look up a child value
    pub fn child(&self, key: &str) -> Option<&ComponentValue> {
        self.components.as_ref().and_then(|c| c.get(key))
    }
}

/// Width and height of a modal dialog in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalDimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for ModalDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_MODAL_WIDTH,
            height: DEFAULT_MODAL_HEIGHT,
        }
    }
}
