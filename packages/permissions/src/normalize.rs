//! # Block Drop Normalization
//!
//! A dropped block arrives wrapped in a synthetic `phpb-block` component
//! that carries the block's attributes. The wrapper never stays in the
//! tree: its children take its place, inherit its attributes, get their
//! subtree restricted according to the block's raw-markup flag, and are
//! then opened up again as a whole so the user can move or delete the
//! block. Blocks nested inside a block (loaded via shortcodes) bring their
//! own wrappers and are dissolved the same way.

use crate::{restrict, AccessPolicy, PermissionError};
use pagebuilder_components::{walk_component_mut, Component, Flow, NodePath, VisitorMut};
use tracing::{debug, info, instrument, warn};

struct UnwrapBlocks<'a> {
    policy: &'a AccessPolicy,
    dissolved: usize,
}

impl<'a> UnwrapBlocks<'a> {
    fn new(policy: &'a AccessPolicy) -> Self {
        Self {
            policy,
            dissolved: 0,
        }
    }
}

impl VisitorMut for UnwrapBlocks<'_> {
    type Context = ();

    fn visit_component_mut(&mut self, _: &mut Component, _: &()) -> Flow<()> {
        Flow::Descend(())
    }

    fn visit_slot_mut(&mut self, siblings: &mut Vec<Component>, index: usize, context: &()) -> usize {
        if !siblings[index].is_block_wrapper() {
            walk_component_mut(self, &mut siblings[index], context);
            return 1;
        }

        let Component {
            attributes,
            children: roots,
            ..
        } = siblings.remove(index);
        self.dissolved += 1;

        let root_count = roots.len();
        if root_count == 0 {
            warn!(index, "Block wrapper without root components removed");
            return 0;
        }

        if attributes.is_content_region() {
            warn!(index, "Block wrapper carries the content region marker, not passed to its roots");
        }

        let raw_markup_allowed = attributes.raw_markup_allowed();
        debug!(index, roots = root_count, raw_markup_allowed, "Dissolving block wrapper");

        siblings.splice(index..index, roots);

        let mut cursor = index;
        for _ in 0..root_count {
            let root = &mut siblings[cursor];
            root.attributes.inherit_from(&attributes);
            restrict(root, raw_markup_allowed, self.policy);
            root.capabilities.grant_block_handling();

            cursor += self.visit_slot_mut(siblings, cursor, context);
        }

        cursor - index
    }
}

/// Normalize the component the host just dropped at `path`.
///
/// Returns how many components occupy the dropped position afterwards:
/// `1` for a plain component, the number of block roots for a wrapper,
/// `0` for an empty wrapper.
#[instrument(skip_all, fields(path = %path))]
pub fn normalize(
    root: &mut Component,
    path: &NodePath,
    policy: &AccessPolicy,
) -> Result<usize, PermissionError> {
    let Some((parent_path, index)) = path.split_last() else {
        if root.is_block_wrapper() {
            return Err(PermissionError::DetachedWrapper);
        }
        normalize_subtree(root, policy);
        return Ok(1);
    };

    let parent = root
        .get_mut(&parent_path)
        .filter(|parent| index < parent.children.len())
        .ok_or_else(|| PermissionError::NodeNotFound(path.clone()))?;

    let mut unwrap = UnwrapBlocks::new(policy);
    let slot_len = unwrap.visit_slot_mut(&mut parent.children, index, &());

    info!(
        dissolved = unwrap.dissolved,
        slot_len,
        "Dropped block normalized"
    );

    Ok(slot_len)
}

/// Dissolve every block wrapper below `component`. The component itself
/// stays where it is, even if it is a wrapper.
pub fn normalize_subtree(component: &mut Component, policy: &AccessPolicy) {
    let mut unwrap = UnwrapBlocks::new(policy);
    walk_component_mut(&mut unwrap, component, &());
    debug!(dissolved = unwrap.dissolved, "Subtree normalized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebuilder_components::{
        AttributeValue, Capabilities, CONTENT_REGION_KEY, EXPLICIT_EDITABLE_KEY, MARKUP_KEY,
    };

    fn region_with(dropped: Component) -> Component {
        Component::element("main")
            .with_child(Component::element("h1"))
            .with_child(dropped)
            .with_child(Component::element("footer"))
    }

    fn tags(components: &[Component]) -> Vec<&str> {
        components.iter().filter_map(Component::tag).collect()
    }

    #[test]
    fn test_wrapper_is_replaced_in_place() {
        let wrapper = Component::block_wrapper(vec![Component::element("p"), Component::element("div")])
            .with_attr(MARKUP_KEY, true);
        let mut root = region_with(wrapper);

        let slot_len = normalize(&mut root, &NodePath::from([1]), &AccessPolicy::default()).unwrap();

        assert_eq!(slot_len, 2);
        assert_eq!(tags(&root.children), vec!["h1", "p", "div", "footer"]);
    }

    #[test]
    fn test_roots_inherit_wrapper_attributes() {
        let wrapper = Component::block_wrapper(vec![Component::element("section")
            .with_attr("data-block", "local")
            .with_attr("class", "hero")])
        .with_attr("data-block", "hero-banner")
        .with_attr(MARKUP_KEY, true);
        let mut root = region_with(wrapper);

        normalize(&mut root, &NodePath::from([1]), &AccessPolicy::default()).unwrap();

        let section = &root.children[1];
        assert_eq!(section.attributes.get("data-block"), Some(&AttributeValue::from("hero-banner")));
        assert_eq!(section.attributes.get("class"), Some(&AttributeValue::from("hero")));
        assert!(section.attributes.raw_markup_allowed());
    }

    #[test]
    fn test_roots_inherit_exact_marker_values() {
        let wrapper = Component::block_wrapper(vec![Component::element("div")])
            .with_attr(MARKUP_KEY, "true")
            .with_attr(EXPLICIT_EDITABLE_KEY, "");
        let mut root = region_with(wrapper);

        normalize(&mut root, &NodePath::from([1]), &AccessPolicy::default()).unwrap();

        let block = &root.children[1].attributes;
        assert_eq!(block.get(MARKUP_KEY), Some(&AttributeValue::from("true")));
        assert_eq!(block.get(EXPLICIT_EDITABLE_KEY), Some(&AttributeValue::from("")));
    }

    #[test]
    fn test_string_false_root_under_static_wrapper_is_static() {
        let wrapper = Component::block_wrapper(vec![Component::element("p").with_attr(MARKUP_KEY, "false")])
            .with_attr(MARKUP_KEY, true);
        let mut root = region_with(wrapper);

        normalize(&mut root, &NodePath::from([1]), &AccessPolicy::default()).unwrap();

        let p = &root.children[1];
        assert_eq!(p.attributes.get(MARKUP_KEY), Some(&AttributeValue::Bool(true)));
        assert!(!p.attributes.is_dynamic());
        assert!(p.capabilities.editable);
    }

    #[test]
    fn test_bool_false_root_under_dynamic_wrapper_is_dynamic() {
        let wrapper = Component::block_wrapper(vec![Component::element("p").with_attr(MARKUP_KEY, false)])
            .with_attr(MARKUP_KEY, "false");
        let mut root = region_with(wrapper);

        normalize(&mut root, &NodePath::from([1]), &AccessPolicy::default()).unwrap();

        let p = &root.children[1];
        assert_eq!(p.attributes.get(MARKUP_KEY), Some(&AttributeValue::from("false")));
        assert!(p.attributes.is_dynamic());
        assert!(!p.capabilities.editable);
        assert!(p.capabilities.draggable);
    }

    #[test]
    fn test_roots_never_become_content_regions() {
        let wrapper = Component::block_wrapper(vec![Component::element("div"), Component::element("p")])
            .with_attr(CONTENT_REGION_KEY, "")
            .with_attr("data-block", "columns");
        let mut root = region_with(wrapper);

        normalize(&mut root, &NodePath::from([1]), &AccessPolicy::default()).unwrap();

        for block_root in &root.children[1..3] {
            assert!(!block_root.is_content_region());
            assert!(block_root.attributes.contains("data-block"));
        }
    }

    #[test]
    fn test_roots_are_free_and_descendants_restricted() {
        let wrapper = Component::block_wrapper(vec![Component::element("div")
            .with_child(Component::element("p"))
            .with_child(Component::element("span"))])
        .with_attr(MARKUP_KEY, true);
        let mut root = region_with(wrapper);

        normalize(&mut root, &NodePath::from([1]), &AccessPolicy::default()).unwrap();

        let block = &root.children[1];
        let mut free = Capabilities::none();
        free.grant_block_handling();
        assert_eq!(block.capabilities, free);

        assert!(block.children[0].capabilities.editable);
        assert!(!block.children[0].capabilities.draggable);
        assert!(block.children[1].capabilities.is_locked());
    }

    #[test]
    fn test_block_without_raw_markup_keeps_tags_locked() {
        let wrapper = Component::block_wrapper(vec![Component::element("div")
            .with_child(Component::element("p"))
            .with_child(Component::element("span").with_attr(EXPLICIT_EDITABLE_KEY, true))]);
        let mut root = region_with(wrapper);

        normalize(&mut root, &NodePath::from([1]), &AccessPolicy::default()).unwrap();

        let block = &root.children[1];
        assert!(block.children[0].capabilities.is_locked());
        assert!(block.children[1].capabilities.editable);
    }

    #[test]
    fn test_nested_wrappers_are_dissolved() {
        let inner = Component::block_wrapper(vec![Component::element("p")]).with_attr(MARKUP_KEY, "false");
        let outer = Component::block_wrapper(vec![Component::element("div").with_child(inner)])
            .with_attr(MARKUP_KEY, true);
        let mut root = region_with(outer);

        normalize(&mut root, &NodePath::from([1]), &AccessPolicy::default()).unwrap();

        let block = &root.children[1];
        assert_eq!(tags(&block.children), vec!["p"]);

        let nested_root = &block.children[0];
        assert!(nested_root.capabilities.draggable);
        assert!(nested_root.capabilities.removable);
        assert!(!nested_root.capabilities.editable);
        assert!(nested_root.attributes.is_dynamic());
    }

    #[test]
    fn test_wrapper_directly_inside_wrapper() {
        let inner = Component::block_wrapper(vec![Component::element("h2"), Component::element("p")]);
        let outer = Component::block_wrapper(vec![inner, Component::element("img")]).with_attr("data-outer", true);
        let mut root = region_with(outer);

        let slot_len = normalize(&mut root, &NodePath::from([1]), &AccessPolicy::default()).unwrap();

        assert_eq!(slot_len, 3);
        assert_eq!(tags(&root.children), vec!["h1", "h2", "p", "img", "footer"]);
        for block_root in &root.children[1..4] {
            assert!(block_root.capabilities.draggable);
            assert!(block_root.attributes.contains("data-outer"));
        }
    }

    #[test]
    fn test_empty_wrapper_is_removed() {
        let mut root = region_with(Component::block_wrapper(Vec::new()));

        let slot_len = normalize(&mut root, &NodePath::from([1]), &AccessPolicy::default()).unwrap();

        assert_eq!(slot_len, 0);
        assert_eq!(tags(&root.children), vec!["h1", "footer"]);
    }

    #[test]
    fn test_plain_drop_only_descends() {
        let dropped = Component::element("div")
            .with_child(Component::block_wrapper(vec![Component::element("p")]).with_attr(MARKUP_KEY, true));
        let mut root = region_with(dropped);

        let slot_len = normalize(&mut root, &NodePath::from([1]), &AccessPolicy::default()).unwrap();

        assert_eq!(slot_len, 1);
        let div = &root.children[1];
        assert_eq!(div.capabilities, Capabilities::all());
        assert_eq!(tags(&div.children), vec!["p"]);
        assert!(div.children[0].capabilities.editable);
    }

    #[test]
    fn test_unknown_path() {
        let mut root = region_with(Component::element("p"));

        let result = normalize(&mut root, &NodePath::from([7]), &AccessPolicy::default());
        assert!(matches!(result, Err(PermissionError::NodeNotFound(_))));

        let result = normalize(&mut root, &NodePath::from([0, 0, 1]), &AccessPolicy::default());
        assert!(matches!(result, Err(PermissionError::NodeNotFound(_))));
    }

    #[test]
    fn test_wrapper_at_root_is_rejected() {
        let mut root = Component::block_wrapper(vec![Component::element("p")]);
        let result = normalize(&mut root, &NodePath::root(), &AccessPolicy::default());
        assert!(matches!(result, Err(PermissionError::DetachedWrapper)));
    }
}
