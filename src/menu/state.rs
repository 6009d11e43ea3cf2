//! Open/closed state for every node of a menu tree.
//!
//! The state tree mirrors the shape of the `MenuNode` tree it was built from.
//! Each node owns one flag. Closing a node resets its whole subtree, so a
//! reopened branch always shows its children closed.

use super::{MenuNode, NodePath};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NodeState {
    open: bool,
    children: Vec<NodeState>,
}

impl NodeState {
    fn build(node: &MenuNode) -> Self {
        Self {
            open: false,
            children: node.children.iter().map(Self::build).collect(),
        }
    }

    fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    fn reset(&mut self) {
        self.open = false;
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// Open-state of a whole menu, one flag per node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    roots: Vec<NodeState>,
}

impl MenuState {
    /// Build closed state for every node in `roots`.
    pub fn new(roots: &[MenuNode]) -> Self {
        Self {
            roots: roots.iter().map(NodeState::build).collect(),
        }
    }

    fn get(&self, path: &NodePath) -> Option<&NodeState> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.roots.get(*first)?;
        for &i in rest {
            node = node.children.get(i)?;
        }
        Some(node)
    }

    fn get_mut(&mut self, path: &NodePath) -> Option<&mut NodeState> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.roots.get_mut(*first)?;
        for &i in rest {
            node = node.children.get_mut(i)?;
        }
        Some(node)
    }

    pub fn is_open(&self, path: &NodePath) -> bool {
        self.get(path).is_some_and(|n| n.open)
    }

    /// Flip a branch between open and closed.
    ///
    /// Returns the new state, or `None` when the path does not name a branch.
    /// Siblings, ancestors and other subtrees are left untouched.
    pub fn toggle(&mut self, path: &NodePath) -> Option<bool> {
        let node = self.get_mut(path)?;
        if !node.is_branch() {
            return None;
        }
        if node.open {
            node.reset();
        } else {
            node.open = true;
        }
        Some(node.open)
    }

    /// Close every open node whose region does not contain `target`.
    ///
    /// `target` is the node under the pointer, or `None` when the pointer hit
    /// nothing. Returns the paths that were closed, in pre-order.
    pub fn dismiss_outside(&mut self, target: Option<&NodePath>) -> Vec<NodePath> {
        fn walk(
            node: &mut NodeState,
            path: NodePath,
            target: Option<&NodePath>,
            closed: &mut Vec<NodePath>,
        ) {
            if node.open && !target.is_some_and(|t| path.contains(t)) {
                node.reset();
                closed.push(path);
                return;
            }
            for (i, child) in node.children.iter_mut().enumerate() {
                walk(child, path.child(i), target, closed);
            }
        }

        let mut closed = Vec::new();
        for (i, root) in self.roots.iter_mut().enumerate() {
            walk(root, NodePath::root(i), target, &mut closed);
        }
        closed
    }

    /// Paths of open nodes whose ancestors are all open, in pre-order.
    pub fn open_paths(&self) -> Vec<NodePath> {
        fn walk(node: &NodeState, path: NodePath, out: &mut Vec<NodePath>) {
            if !node.open {
                return;
            }
            out.push(path.clone());
            for (i, child) in node.children.iter().enumerate() {
                walk(child, path.child(i), out);
            }
        }

        let mut out = Vec::new();
        for (i, root) in self.roots.iter().enumerate() {
            walk(root, NodePath::root(i), &mut out);
        }
        out
    }
}
