//! # Access Restriction
//!
//! Recomputes the capabilities of a block's subtree from scratch:
//!
//! 1. every flag is revoked;
//! 2. if raw markup is allowed here and the component is not a dynamic
//!    placeholder, whitelisted tags get hover/select/edit;
//! 3. the explicit editable marker grants hover/select/edit regardless.
//!
//! The allowance that reaches the children is the one computed at step 2,
//! so a dynamic placeholder switches tag editing off for its whole subtree.

use crate::AccessPolicy;
use pagebuilder_components::{walk_component_mut, Component, Flow, VisitorMut};
use tracing::{instrument, trace};

/// Visitor applying the restriction rules; the context is whether raw
/// markup is allowed at the visited component
struct RestrictAccess<'a> {
    policy: &'a AccessPolicy,
}

impl<'a> RestrictAccess<'a> {
    fn new(policy: &'a AccessPolicy) -> Self {
        Self { policy }
    }
}

impl VisitorMut for RestrictAccess<'_> {
    type Context = bool;

    fn visit_component_mut(&mut self, component: &mut Component, raw_markup_allowed: &bool) -> Flow<bool> {
        component.capabilities.deny_all();

        let allowed = *raw_markup_allowed && !component.attributes.is_dynamic();

        if allowed && self.policy.allows_tag(component.tag()) {
            component.capabilities.grant_content_editing();
        }
        if component.attributes.is_explicit_editable() {
            component.capabilities.grant_content_editing();
        }

        trace!(
            tag = component.tag().unwrap_or("#text"),
            allowed,
            editable = component.capabilities.editable,
            "Restricted component"
        );

        Flow::Descend(allowed)
    }
}

/// Restrict `component` and everything below it.
///
/// `raw_markup_allowed` is the allowance of the enclosing block; it only
/// ever narrows on the way down.
#[instrument(
    skip_all,
    fields(
        tag = component.tag().unwrap_or("#text"),
        raw_markup_allowed = raw_markup_allowed
    )
)]
pub fn restrict(component: &mut Component, raw_markup_allowed: bool, policy: &AccessPolicy) {
    walk_component_mut(&mut RestrictAccess::new(policy), component, &raw_markup_allowed);
}
