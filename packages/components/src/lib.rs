//! # Pagebuilder Components
//!
//! Document tree model shared by the page builder's editor-side passes.
//!
//! A page is a tree of [`Component`]s. Each one carries a tag kind, a bag
//! of [`Attributes`] with the permission markers typed, and a
//! [`Capabilities`] record the host editor consults before letting the
//! user drag, remove, select or edit it.
//!
//! Traversal goes through [`Visitor`] / [`VisitorMut`] so that every pass
//! shares a single pre-order walk.

mod attributes;
mod capabilities;
mod component;
mod path;
mod visitor;

pub use attributes::{
    AttributeValue, Attributes, MarkupMode, CONTENT_REGION_KEY, EXPLICIT_EDITABLE_KEY, MARKUP_KEY,
};
pub use capabilities::Capabilities;
pub use component::{Component, BLOCK_WRAPPER_TAG};
pub use path::NodePath;
pub use visitor::{
    find_paths, walk_children_mut, walk_component, walk_component_mut, Flow, Visitor, VisitorMut,
};
