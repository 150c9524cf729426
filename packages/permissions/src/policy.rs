use crate::PermissionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

pub const DEFAULT_POLICY_NAME: &str = "pagebuilder.permissions.json";

/// Tunable parts of the permission passes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPolicy {
    /// Tags whose content may be edited inside raw-markup blocks
    #[serde(default = "default_editable_tags")]
    pub editable_tags: BTreeSet<String>,

    /// Translation key for the content region's layer label
    #[serde(default = "default_content_region_label")]
    pub content_region_label: String,
}

// div and span are left out on purpose: they are layout containers.
fn default_editable_tags() -> BTreeSet<String> {
    [
        "h1", "h2", "h3", "h4", "h5", "h6", "h7", "p", "a", "img", "button", "small", "b",
        "strong", "i", "em", "ul", "li", "th", "td",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_content_region_label() -> String {
    "page-content".to_string()
}

impl AccessPolicy {
    /// Load policy from a directory, falling back to defaults if the file
    /// does not exist
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, PermissionError> {
        let policy_path = dir.as_ref().join(DEFAULT_POLICY_NAME);

        if policy_path.exists() {
            let content = std::fs::read_to_string(&policy_path)?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_json(json: &str) -> Result<Self, PermissionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether a component of this tag kind may have its content edited.
    /// Text nodes have no tag and never match.
    pub fn allows_tag(&self, tag: Option<&str>) -> bool {
        tag.is_some_and(|tag| self.editable_tags.contains(tag))
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            editable_tags: default_editable_tags(),
            content_region_label: default_content_region_label(),
        }
    }
}
