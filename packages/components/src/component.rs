use crate::{Attributes, AttributeValue, Capabilities, NodePath};
use serde::{Deserialize, Serialize};

/// Tag kind of the synthetic node that carries a dropped block's attributes
pub const BLOCK_WRAPPER_TAG: &str = "phpb-block";

/// Node of the editable document tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Element kind (`p`, `h1`, `div`, ...). `None` for text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Label shown in the layer manager
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub attributes: Attributes,

    #[serde(default)]
    pub capabilities: Capabilities,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}

impl Component {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            name: None,
            attributes: Attributes::new(),
            capabilities: Capabilities::default(),
            children: Vec::new(),
        }
    }

    pub fn text() -> Self {
        Self {
            tag: None,
            name: None,
            attributes: Attributes::new(),
            capabilities: Capabilities::default(),
            children: Vec::new(),
        }
    }

    /// Synthetic carrier for a dropped block
    pub fn block_wrapper(roots: Vec<Component>) -> Self {
        Self::element(BLOCK_WRAPPER_TAG).with_children(roots)
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_child(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<Component>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn is_text(&self) -> bool {
        self.tag.is_none()
    }

    pub fn is_block_wrapper(&self) -> bool {
        self.tag() == Some(BLOCK_WRAPPER_TAG)
    }

    pub fn is_content_region(&self) -> bool {
        self.attributes.is_content_region()
    }

    /// Component at `path` relative to this one
    pub fn get(&self, path: &NodePath) -> Option<&Component> {
        path.indices()
            .iter()
            .try_fold(self, |component, &index| component.children.get(index))
    }

    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut Component> {
        path.indices()
            .iter()
            .try_fold(self, |component, &index| component.children.get_mut(index))
    }

    /// Number of components in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Component::subtree_len)
            .sum::<usize>()
    }
}
