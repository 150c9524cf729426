//! # Editor Hooks
//!
//! The host editor reports lifecycle events; the permission passes run as
//! hooks registered against it. Each hook looks at the event, ignores the
//! ones it does not care about, and otherwise runs its pass on the tree the
//! host lends it for the duration of the call.
//!
//! | event               | hook               | pass                |
//! |---------------------|--------------------|---------------------|
//! | `DocumentLoaded`    | `LoadLockdown`     | [`crate::lockdown`] |
//! | `BlockDropped`      | `DropNormalizer`   | [`crate::normalize`]|
//! | `ComponentSelected` | `SelectionToolbar` | [`crate::toolbar_visible`] |

use crate::{lockdown, normalize, toolbar_visible};
use crate::{AccessPolicy, ContentSupplier, LabelLookup, PermissionError};
use pagebuilder_components::{Component, NodePath};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lifecycle events emitted by the host editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorEvent {
    /// The document tree has been materialized for the first time
    DocumentLoaded,
    /// A block drag finished; `None` if the drop did not land anywhere
    BlockDropped(Option<NodePath>),
    /// The user selected a component
    ComponentSelected(NodePath),
}

/// What a hook did in response to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HookOutcome {
    LockedDown { content_region: NodePath },
    Normalized { slot_len: usize },
    Toolbar { visible: bool },
}

/// Handler for editor events
pub trait EditorHook {
    /// Identifier used in logs
    fn name(&self) -> &'static str;

    /// React to `event`. Returns `None` for events the hook ignores.
    fn handle(
        &mut self,
        event: &EditorEvent,
        tree: &mut Component,
    ) -> Result<Option<HookOutcome>, PermissionError>;
}

/// Something hooks can be registered against
pub trait EventSource {
    fn register(&mut self, hook: Box<dyn EditorHook>);
}

/// Locks the layout when the document loads
pub struct LoadLockdown<L, C> {
    policy: AccessPolicy,
    labels: L,
    content: C,
}

impl<L: LabelLookup, C: ContentSupplier> LoadLockdown<L, C> {
    pub fn new(policy: AccessPolicy, labels: L, content: C) -> Self {
        Self {
            policy,
            labels,
            content,
        }
    }
}

impl<L: LabelLookup, C: ContentSupplier> EditorHook for LoadLockdown<L, C> {
    fn name(&self) -> &'static str {
        "load-lockdown"
    }

    fn handle(
        &mut self,
        event: &EditorEvent,
        tree: &mut Component,
    ) -> Result<Option<HookOutcome>, PermissionError> {
        match event {
            EditorEvent::DocumentLoaded => {
                let content_region = lockdown(tree, &self.policy, &self.labels, &self.content)?;
                Ok(Some(HookOutcome::LockedDown { content_region }))
            }
            _ => Ok(None),
        }
    }
}

/// Dissolves block wrappers after a drop
pub struct DropNormalizer {
    policy: AccessPolicy,
}

impl DropNormalizer {
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }
}

impl EditorHook for DropNormalizer {
    fn name(&self) -> &'static str {
        "drop-normalizer"
    }

    fn handle(
        &mut self,
        event: &EditorEvent,
        tree: &mut Component,
    ) -> Result<Option<HookOutcome>, PermissionError> {
        match event {
            EditorEvent::BlockDropped(Some(path)) => {
                let slot_len = normalize(tree, path, &self.policy)?;
                Ok(Some(HookOutcome::Normalized { slot_len }))
            }
            EditorEvent::BlockDropped(None) => {
                debug!("Block drop did not produce a component");
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

/// Decides toolbar visibility for the selected component
#[derive(Debug, Default)]
pub struct SelectionToolbar;

impl EditorHook for SelectionToolbar {
    fn name(&self) -> &'static str {
        "selection-toolbar"
    }

    fn handle(
        &mut self,
        event: &EditorEvent,
        tree: &mut Component,
    ) -> Result<Option<HookOutcome>, PermissionError> {
        match event {
            EditorEvent::ComponentSelected(path) => {
                let component = tree
                    .get(path)
                    .ok_or_else(|| PermissionError::NodeNotFound(path.clone()))?;
                Ok(Some(HookOutcome::Toolbar {
                    visible: toolbar_visible(component),
                }))
            }
            _ => Ok(None),
        }
    }
}

/// Registry of hooks, run in registration order
pub struct HookRegistry {
    hooks: Vec<Box<dyn EditorHook>>,
}

impl HookRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Registry with the lockdown, drop and selection hooks installed
    pub fn with_defaults<L, C>(policy: AccessPolicy, labels: L, content: C) -> Self
    where
        L: LabelLookup + 'static,
        C: ContentSupplier + 'static,
    {
        let mut registry = Self::new();
        registry.register(Box::new(LoadLockdown::new(policy.clone(), labels, content)));
        registry.register(Box::new(DropNormalizer::new(policy)));
        registry.register(Box::new(SelectionToolbar));
        registry
    }

    /// Run every hook on `event`. The first error aborts the dispatch.
    pub fn dispatch(
        &mut self,
        event: &EditorEvent,
        tree: &mut Component,
    ) -> Result<Vec<HookOutcome>, PermissionError> {
        let mut outcomes = Vec::new();

        for hook in &mut self.hooks {
            if let Some(outcome) = hook.handle(event, tree)? {
                debug!(hook = hook.name(), ?outcome, "Hook handled event");
                outcomes.push(outcome);
            }
        }

        Ok(outcomes)
    }

    pub fn hook_names(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|hook| hook.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl EventSource for HookRegistry {
    fn register(&mut self, hook: Box<dyn EditorHook>) {
        self.hooks.push(hook);
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("hooks", &self.hook_names())
            .finish()
    }
}
