use crate::{Component, NodePath};

/// What a visitor wants the walker to do after visiting a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow<C> {
    /// Visit the children, handing them this context
    Descend(C),
    /// Skip the subtree below this component
    Prune,
}

/// Visitor pattern for traversing the component tree immutably
///
/// Traversal is pre-order with children in document order. The context
/// returned from a visit is what the children see, so per-subtree state
/// travels down without ambient variables.
pub trait Visitor: Sized {
    type Context;

    fn visit_component(
        &mut self,
        component: &Component,
        path: &NodePath,
        context: &Self::Context,
    ) -> Flow<Self::Context>;
}

/// Mutable visitor pattern for transforming the component tree
///
/// `visit_component_mut` may change a component in place. Visitors that
/// restructure the tree override `visit_slot_mut`, which owns the sibling
/// list and reports how many components ended up in the visited slot.
pub trait VisitorMut: Sized {
    type Context;

    fn visit_component_mut(
        &mut self,
        component: &mut Component,
        context: &Self::Context,
    ) -> Flow<Self::Context>;

    /// Visit `siblings[index]`, returning the number of components that
    /// occupy its position afterwards (0 if it was removed).
    fn visit_slot_mut(
        &mut self,
        siblings: &mut Vec<Component>,
        index: usize,
        context: &Self::Context,
    ) -> usize {
        walk_component_mut(self, &mut siblings[index], context);
        1
    }
}

// Default walk implementations for immutable visitor

pub fn walk_component<V: Visitor>(
    visitor: &mut V,
    component: &Component,
    path: &NodePath,
    context: &V::Context,
) {
    if let Flow::Descend(child_context) = visitor.visit_component(component, path, context) {
        for (index, child) in component.children.iter().enumerate() {
            walk_component(visitor, child, &path.child(index), &child_context);
        }
    }
}

// Default walk implementations for mutable visitor

pub fn walk_component_mut<V: VisitorMut>(
    visitor: &mut V,
    component: &mut Component,
    context: &V::Context,
) {
    if let Flow::Descend(child_context) = visitor.visit_component_mut(component, context) {
        walk_children_mut(visitor, &mut component.children, &child_context);
    }
}

pub fn walk_children_mut<V: VisitorMut>(
    visitor: &mut V,
    children: &mut Vec<Component>,
    context: &V::Context,
) {
    let mut index = 0;
    while index < children.len() {
        index += visitor.visit_slot_mut(children, index, context);
    }
}

/// Paths of every component matching `predicate`, in pre-order
pub fn find_paths<F>(root: &Component, predicate: F) -> Vec<NodePath>
where
    F: Fn(&Component) -> bool,
{
    struct Finder<F> {
        predicate: F,
        found: Vec<NodePath>,
    }

    impl<F: Fn(&Component) -> bool> Visitor for Finder<F> {
        type Context = ();

        fn visit_component(&mut self, component: &Component, path: &NodePath, _: &()) -> Flow<()> {
            if (self.predicate)(component) {
                self.found.push(path.clone());
            }
            Flow::Descend(())
        }
    }

    let mut finder = Finder {
        predicate,
        found: Vec::new(),
    };
    walk_component(&mut finder, root, &NodePath::root(), &());
    finder.found
}
