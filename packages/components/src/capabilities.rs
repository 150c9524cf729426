//! # Capability Flags
//!
//! The set of interactions the host editor checks before letting a user
//! touch a component. Every flag is independent: no flag implies another,
//! and passes set each one explicitly.

use serde::{Deserialize, Serialize};

/// Interaction permissions of a single component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub removable: bool,
    pub draggable: bool,
    pub droppable: bool,
    pub copyable: bool,
    pub badgable: bool,
    pub stylable: bool,
    pub highlightable: bool,
    pub resizable: bool,
    pub editable: bool,
    pub layerable: bool,
    pub selectable: bool,
    pub hoverable: bool,
}

impl Capabilities {
    /// Every interaction allowed
    pub const fn all() -> Self {
        Self {
            removable: true,
            draggable: true,
            droppable: true,
            copyable: true,
            badgable: true,
            stylable: true,
            highlightable: true,
            resizable: true,
            editable: true,
            layerable: true,
            selectable: true,
            hoverable: true,
        }
    }

    /// Every interaction denied
    pub const fn none() -> Self {
        Self {
            removable: false,
            draggable: false,
            droppable: false,
            copyable: false,
            badgable: false,
            stylable: false,
            highlightable: false,
            resizable: false,
            editable: false,
            layerable: false,
            selectable: false,
            hoverable: false,
        }
    }

    /// Revoke every flag
    pub fn deny_all(&mut self) {
        *self = Self::none();
    }

    /// Let the user hover, select and edit the content of the component.
    ///
    /// Only adds permissions; flags that are already set stay set.
    pub fn grant_content_editing(&mut self) {
        self.hoverable = true;
        self.selectable = true;
        self.editable = true;
    }

    /// Make the component itself movable as a whole.
    ///
    /// Used for the root components of a dropped block. Flags not named
    /// here keep whatever value they already had.
    pub fn grant_block_handling(&mut self) {
        self.removable = true;
        self.draggable = true;
        self.copyable = true;
        self.layerable = true;
        self.selectable = true;
        self.hoverable = true;
    }

    /// True if the user can grab or delete the component
    pub fn is_manipulable(&self) -> bool {
        self.draggable || self.removable
    }

    /// True if no flag is set
    pub fn is_locked(&self) -> bool {
        *self == Self::none()
    }
}

/// New host components start fully interactive until a pass restricts them.
impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fully_interactive() {
        assert_eq!(Capabilities::default(), Capabilities::all());
        assert!(!Capabilities::default().is_locked());
    }

    #[test]
    fn test_deny_all_clears_every_flag() {
        let mut caps = Capabilities::all();
        caps.deny_all();
        assert!(caps.is_locked());
        assert!(!caps.is_manipulable());
    }

    #[test]
    fn test_content_editing_only_adds() {
        let mut caps = Capabilities::none();
        caps.draggable = true;
        caps.grant_content_editing();

        assert!(caps.hoverable && caps.selectable && caps.editable);
        assert!(caps.draggable);
        assert!(!caps.removable);
    }

    #[test]
    fn test_block_handling_leaves_other_flags() {
        let mut caps = Capabilities::none();
        caps.grant_block_handling();

        assert!(caps.removable && caps.draggable && caps.copyable);
        assert!(caps.layerable && caps.selectable && caps.hoverable);
        assert!(!caps.editable);
        assert!(!caps.droppable);
        assert!(!caps.resizable);
    }

    #[test]
    fn test_missing_fields_deserialize_as_granted() {
        let caps: Capabilities = serde_json::from_str(r#"{ "removable": false }"#).unwrap();
        assert!(!caps.removable);
        assert!(caps.draggable);
    }
}
