//! # Component Attributes
//!
//! Host attributes are a loose string-keyed bag. The handful of keys the
//! permission passes care about are lifted into typed fields when the bag
//! is built, everything else is carried in [`Attributes::extra`]. Both keep
//! the value exactly as delivered, so attributes propagate and serialize
//! back unchanged.
//!
//! | key                      | field                 | meaning                         |
//! |--------------------------|-----------------------|---------------------------------|
//! | `phpb-content-container` | `content_region`      | the editable page-content area  |
//! | `phpb-editable`          | `explicit_editable`   | always hover/select/edit-able   |
//! | `is-html`                | `markup`              | raw markup allowed / dynamic    |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Presence marks the single user-editable region of the page
pub const CONTENT_REGION_KEY: &str = "phpb-content-container";

/// Presence grants content editing regardless of tag
pub const EXPLICIT_EDITABLE_KEY: &str = "phpb-editable";

/// Raw-markup flag on block wrappers, dynamic-content sentinel on nodes
pub const MARKUP_KEY: &str = "is-html";

/// Raw attribute value as delivered by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Text(String),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            AttributeValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(value) => Some(*value),
            AttributeValue::Text(_) => None,
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(value) => write!(f, "{}", value),
            AttributeValue::Text(text) => f.write_str(text),
        }
    }
}

/// Normalized reading of the `is-html` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupMode {
    /// Static markup: whitelisted tags inside may become editable
    Static,
    /// Placeholder for generated content, never tag-editable
    Dynamic,
}

impl MarkupMode {
    /// `true` / `"true"` is static, only the literal string `"false"` is
    /// dynamic. Anything else is not a markup mode at all.
    pub fn from_value(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Bool(true) => Some(MarkupMode::Static),
            AttributeValue::Text(text) if text == "true" => Some(MarkupMode::Static),
            AttributeValue::Text(text) if text == "false" => Some(MarkupMode::Dynamic),
            _ => None,
        }
    }
}

/// Attributes of a component with the permission markers typed.
///
/// Markers keep the value the host delivered so they serialize back
/// unchanged; the typed views are derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, AttributeValue>",
    into = "BTreeMap<String, AttributeValue>"
)]
pub struct Attributes {
    /// `phpb-content-container`
    pub content_region: Option<AttributeValue>,
    /// `phpb-editable`
    pub explicit_editable: Option<AttributeValue>,
    /// `is-html`
    pub markup: Option<AttributeValue>,
    /// Custom attributes passed through untouched
    pub extra: BTreeMap<String, AttributeValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Attributes::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    fn marker_mut(&mut self, key: &str) -> Option<&mut Option<AttributeValue>> {
        match key {
            CONTENT_REGION_KEY => Some(&mut self.content_region),
            EXPLICIT_EDITABLE_KEY => Some(&mut self.explicit_editable),
            MARKUP_KEY => Some(&mut self.markup),
            _ => None,
        }
    }

    /// Set an attribute, routing marker keys to their typed fields.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        let key = key.into();
        let value = value.into();

        match self.marker_mut(&key) {
            Some(marker) => *marker = Some(value),
            None => {
                self.extra.insert(key, value);
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        match self.marker_mut(key) {
            Some(marker) => marker.take(),
            None => self.extra.remove(key),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        match key {
            CONTENT_REGION_KEY => self.content_region.as_ref(),
            EXPLICIT_EDITABLE_KEY => self.explicit_editable.as_ref(),
            MARKUP_KEY => self.markup.as_ref(),
            _ => self.extra.get(key),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Flatten back to the host's key/value form
    pub fn to_map(&self) -> BTreeMap<String, AttributeValue> {
        let mut map = self.extra.clone();
        let markers = [
            (CONTENT_REGION_KEY, &self.content_region),
            (EXPLICIT_EDITABLE_KEY, &self.explicit_editable),
            (MARKUP_KEY, &self.markup),
        ];
        for (key, value) in markers {
            if let Some(value) = value {
                map.insert(key.to_string(), value.clone());
            }
        }
        map
    }

    pub fn keys(&self) -> Vec<String> {
        self.to_map().into_keys().collect()
    }

    pub fn len(&self) -> usize {
        self.to_map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.content_region.is_none()
            && self.explicit_editable.is_none()
            && self.markup.is_none()
            && self.extra.is_empty()
    }

    /// Copy the attributes of a dropped block's wrapper onto one of its
    /// roots. Keys present on both take the value from `source`.
    ///
    /// The content region marker is not copied: a page has exactly one
    /// content region.
    pub fn inherit_from(&mut self, source: &Attributes) {
        for (key, value) in source.to_map() {
            if key != CONTENT_REGION_KEY {
                self.insert(key, value);
            }
        }
    }

    pub fn is_content_region(&self) -> bool {
        self.content_region.is_some()
    }

    pub fn is_explicit_editable(&self) -> bool {
        self.explicit_editable.is_some()
    }

    pub fn markup_mode(&self) -> Option<MarkupMode> {
        self.markup.as_ref().and_then(MarkupMode::from_value)
    }

    /// Whether a block carrying these attributes allows its whitelisted
    /// tags to be edited
    pub fn raw_markup_allowed(&self) -> bool {
        self.markup_mode() == Some(MarkupMode::Static)
    }

    /// Whether the component is a dynamic-content placeholder
    pub fn is_dynamic(&self) -> bool {
        self.markup_mode() == Some(MarkupMode::Dynamic)
    }
}

impl From<BTreeMap<String, AttributeValue>> for Attributes {
    fn from(map: BTreeMap<String, AttributeValue>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Attributes> for BTreeMap<String, AttributeValue> {
    fn from(attributes: Attributes) -> Self {
        attributes.to_map()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}
