//! Menu tree model.
//!
//! This module provides the static data the dropdown is built from:
//! - `MenuNode` - one entry in the menu tree
//! - `NodeKind` - branch / leaf / inert classification
//! - `NodePath` - index path addressing a node from the root list
//! - `validate_tree` - authoring checks, reported as warnings
//!
//! # Module Structure
//!
//! - `sample` - The built-in menu tree shown by the application
//! - `state` - Per-node open/closed state
//! - `layout` - Geometry and hit testing for the rendered menu

pub mod layout;
pub mod sample;
pub mod state;

use std::collections::HashSet;
use std::fmt;

pub use layout::{panel_origin, LayoutItem, LayoutMetrics, MenuLayout, Part};
pub use sample::sample_menu;
pub use state::MenuState;

// ============================================================================
// Menu Node
// ============================================================================

/// One entry in the menu tree.
///
/// A node with children is expandable, a node with only a link is navigable.
/// Nodes with neither render as plain labels.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct MenuNode {
    /// Unique within one tree.
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Create a leaf node pointing at `link`.
    pub fn leaf(id: impl Into<String>, label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            link: Some(link.into()),
            children: Vec::new(),
        }
    }

    /// Create a branch node holding `children` in display order.
    pub fn branch(
        id: impl Into<String>,
        label: impl Into<String>,
        children: Vec<MenuNode>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            link: None,
            children,
        }
    }

    pub fn kind(&self) -> NodeKind<'_> {
        if !self.children.is_empty() {
            NodeKind::Branch
        } else if let Some(link) = self.link.as_deref() {
            NodeKind::Leaf(link)
        } else {
            NodeKind::Inert
        }
    }

    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }
}

/// How a node reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    /// Has children; clicking toggles its panel.
    Branch,
    /// Has a link and no children; clicking navigates.
    Leaf(&'a str),
    /// Neither; clicking does nothing.
    Inert,
}

// ============================================================================
// Node Path
// ============================================================================

/// Index path from the root list to a node.
///
/// `[1, 0]` is the first child of the second top-level node. The path length
/// is the node's 1-based depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// True when `other` is this node or one of its descendants.
    pub fn contains(&self, other: &NodePath) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(usize::to_string).collect();
        write!(f, "{}", parts.join("/"))
    }
}

/// Resolve a path against the root list.
pub fn node_at<'a>(roots: &'a [MenuNode], path: &NodePath) -> Option<&'a MenuNode> {
    let (first, rest) = path.indices().split_first()?;
    let mut node = roots.get(*first)?;
    for &i in rest {
        node = node.children.get(i)?;
    }
    Some(node)
}

/// Render the tree as an indented outline, one node per line.
pub fn outline(roots: &[MenuNode]) -> String {
    fn walk(out: &mut String, node: &MenuNode, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&node.label);
        match node.kind() {
            NodeKind::Branch => out.push_str(" ▼"),
            NodeKind::Leaf(link) => {
                out.push_str(" -> ");
                out.push_str(link);
            }
            NodeKind::Inert => {}
        }
        out.push('\n');
        for child in &node.children {
            walk(out, child, depth + 1);
        }
    }

    let mut out = String::new();
    for node in roots {
        walk(&mut out, node, 0);
    }
    out
}

// ============================================================================
// Validation
// ============================================================================

/// Authoring problem found in a menu tree. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeWarning {
    DuplicateId { id: String },
    EmptyLabel { id: String },
    /// No link and no children: rendered as a plain label.
    InertNode { id: String },
}

impl fmt::Display for TreeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "duplicate menu id '{}'", id),
            Self::EmptyLabel { id } => write!(f, "menu node '{}' has an empty label", id),
            Self::InertNode { id } => {
                write!(f, "menu node '{}' has neither a link nor children", id)
            }
        }
    }
}

/// Walk the tree and collect authoring warnings in pre-order.
pub fn validate_tree(roots: &[MenuNode]) -> Vec<TreeWarning> {
    fn walk<'a>(node: &'a MenuNode, seen: &mut HashSet<&'a str>, out: &mut Vec<TreeWarning>) {
        if !seen.insert(node.id.as_str()) {
            out.push(TreeWarning::DuplicateId {
                id: node.id.clone(),
            });
        }
        if node.label.trim().is_empty() {
            out.push(TreeWarning::EmptyLabel {
                id: node.id.clone(),
            });
        }
        if node.kind() == NodeKind::Inert {
            out.push(TreeWarning::InertNode {
                id: node.id.clone(),
            });
        }
        for child in &node.children {
            walk(child, seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut warnings = Vec::new();
    for node in roots {
        walk(node, &mut seen, &mut warnings);
    }
    warnings
}

// ============================================================================
// Tests
// ============================================================================
