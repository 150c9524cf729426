//! # Initial-Load Lockdown
//!
//! Everything outside the content region is fixed page layout: when the
//! document is first loaded every layout component loses all of its
//! capabilities. The content region becomes the one place blocks can be
//! dropped, and the stored page content is placed inside it.

use crate::{AccessPolicy, ContentSupplier, LabelLookup, PermissionError};
use pagebuilder_components::{find_paths, walk_component_mut, Component, Flow, NodePath, VisitorMut};
use tracing::{debug, info, instrument};

/// Revokes all capabilities down to (not into) the content region
struct DenyLayout;

impl VisitorMut for DenyLayout {
    type Context = ();

    fn visit_component_mut(&mut self, component: &mut Component, _: &()) -> Flow<()> {
        if component.is_content_region() {
            return Flow::Prune;
        }
        component.capabilities.deny_all();
        Flow::Descend(())
    }
}

/// Path of the single component carrying the content region marker
pub fn locate_content_region(root: &Component) -> Result<NodePath, PermissionError> {
    let mut paths = find_paths(root, Component::is_content_region);
    match paths.len() {
        0 => Err(PermissionError::MissingContentRegion),
        1 => Ok(paths.remove(0)),
        count => Err(PermissionError::AmbiguousContentRegion { count }),
    }
}

/// Lock the page layout and populate the content region.
///
/// The region is located before anything is touched, so a failed lockdown
/// leaves the tree exactly as it was. The stored content replaces whatever
/// the region held before. Lockdown can run again on the same supplier
/// (e.g. when the host reloads the document). Returns the region's path.
#[instrument(skip_all, fields(root = root.tag().unwrap_or("#text")))]
pub fn lockdown<L, C>(
    root: &mut Component,
    policy: &AccessPolicy,
    labels: &L,
    content: &C,
) -> Result<NodePath, PermissionError>
where
    L: LabelLookup + ?Sized,
    C: ContentSupplier + ?Sized,
{
    let region_path = locate_content_region(root)?;
    debug!(region = %region_path, "Located content region");

    walk_component_mut(&mut DenyLayout, root, &());

    let region = root
        .get_mut(&region_path)
        .ok_or_else(|| PermissionError::NodeNotFound(region_path.clone()))?;

    region.capabilities.droppable = true;
    region.capabilities.hoverable = true;
    region.capabilities.removable = false;
    region.capabilities.copyable = false;
    region.name = Some(labels.translate(&policy.content_region_label));
    region.children = content.components();

    info!(
        region = %region_path,
        components = region.children.len(),
        "Page layout locked"
    );

    Ok(region_path)
}
