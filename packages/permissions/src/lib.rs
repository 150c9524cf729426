//! # Pagebuilder Permissions
//!
//! Decides what the user may do with each component of a page in the
//! visual editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host editor: load / block drop / select     │
//! └─────────────────────────────────────────────┘
//!                     ↓ EditorEvent
//! ┌─────────────────────────────────────────────┐
//! │ hooks: HookRegistry                         │
//! │  - DocumentLoaded    → lockdown             │
//! │  - BlockDropped      → normalize            │
//! │  - ComponentSelected → toolbar_visible      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ restrict: per-component capability rules    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//!
//! 1. **Layout is fixed**: outside the content region nothing can be
//!    touched.
//! 2. **Deny by default**: inside a dropped block every component starts
//!    with no capabilities.
//! 3. **Tag allow-list**: in raw-markup blocks, whitelisted tags
//!    (headings, paragraphs, links, images, ...) become editable, unless a
//!    dynamic placeholder switched markup off above them.
//! 4. **Explicit marker**: `phpb-editable` always makes a component
//!    editable.
//! 5. **Blocks move as a whole**: the roots of a dropped block can always
//!    be dragged, copied and removed.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagebuilder_permissions::{AccessPolicy, EditorEvent, HookRegistry};
//!
//! let mut hooks = HookRegistry::with_defaults(AccessPolicy::default(), translations, stored);
//!
//! hooks.dispatch(&EditorEvent::DocumentLoaded, &mut page)?;
//! hooks.dispatch(&EditorEvent::BlockDropped(Some(path)), &mut page)?;
//! ```

mod collaborators;
mod errors;
mod hooks;
mod lockdown;
mod normalize;
mod policy;
mod restrict;
mod selection;

pub use collaborators::{ContentSupplier, LabelLookup};
pub use errors::PermissionError;
pub use hooks::{
    DropNormalizer, EditorEvent, EditorHook, EventSource, HookOutcome, HookRegistry, LoadLockdown,
    SelectionToolbar,
};
pub use lockdown::{locate_content_region, lockdown};
pub use normalize::{normalize, normalize_subtree};
pub use policy::{AccessPolicy, DEFAULT_POLICY_NAME};
pub use restrict::restrict;
pub use selection::toolbar_visible;

// Re-export the tree model for convenience
pub use pagebuilder_components as components;
