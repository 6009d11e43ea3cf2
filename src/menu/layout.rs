//! Geometry for the rendered menu.
//!
//! `compute` walks the menu tree together with its open-state and produces
//! one `LayoutItem` per visible trigger and per open panel, in paint order.
//! The same list drives drawing (front to back) and hit testing (back to
//! front), so whatever is drawn on top is also what the pointer hits. Both
//! are limited to the area the menu was laid out in.

use super::{MenuNode, MenuState, NodePath};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Indicator appended to an open branch.
pub const INDICATOR_OPEN: &str = "▲";
/// Indicator appended to a closed branch.
pub const INDICATOR_CLOSED: &str = "▼";

/// Sizing knobs, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Minimum width of any trigger or panel.
    pub item_min_width: u16,
    /// Blank cells on each side of a label.
    pub item_padding: u16,
    /// Distance between a trigger and the panel it opens.
    pub panel_gap: u16,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            item_min_width: 20,
            item_padding: 1,
            panel_gap: 0,
        }
    }
}

/// What a layout item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// The one-row label of the node at `path`.
    Trigger,
    /// The container holding the children of the node at `path`.
    Panel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutItem {
    pub path: NodePath,
    pub part: Part,
    pub rect: Rect,
    /// Stacking order. Menu bar triggers are 0, a panel opened at depth d and
    /// its triggers are d.
    pub z: u16,
}

fn cell_in(r: Rect, x: u16, y: u16) -> bool {
    x >= r.x
        && y >= r.y
        && u32::from(x) < u32::from(r.x) + u32::from(r.width)
        && u32::from(y) < u32::from(r.y) + u32::from(r.height)
}

/// Laid-out menu, items in paint order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuLayout {
    items: Vec<LayoutItem>,
    /// Area the menu owns on screen. Anything outside it is never drawn.
    clip: Rect,
}

impl MenuLayout {
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Topmost item under the given cell.
    ///
    /// Cells outside the clip area hit nothing, even where an overflowing
    /// panel would extend.
    pub fn hit(&self, x: u16, y: u16) -> Option<&LayoutItem> {
        if !cell_in(self.clip, x, y) {
            return None;
        }
        self.items.iter().rev().find(|item| cell_in(item.rect, x, y))
    }

    pub fn trigger(&self, path: &NodePath) -> Option<&LayoutItem> {
        self.items
            .iter()
            .find(|item| item.part == Part::Trigger && &item.path == path)
    }

    pub fn panel(&self, path: &NodePath) -> Option<&LayoutItem> {
        self.items
            .iter()
            .find(|item| item.part == Part::Panel && &item.path == path)
    }

    /// Visible triggers, in paint order.
    pub fn triggers(&self) -> impl Iterator<Item = &LayoutItem> {
        self.items.iter().filter(|item| item.part == Part::Trigger)
    }
}

/// Label text for a trigger, including the branch indicator.
pub fn trigger_text(node: &MenuNode, open: bool) -> String {
    if node.is_branch() {
        let indicator = if open {
            INDICATOR_OPEN
        } else {
            INDICATOR_CLOSED
        };
        format!("{} {}", node.label, indicator)
    } else {
        node.label.clone()
    }
}

/// Width a node's trigger wants on its own.
pub fn natural_width(node: &MenuNode, metrics: &LayoutMetrics) -> u16 {
    // Both indicators are one cell wide, so open and closed measure the same
    let text = trigger_text(node, false).width();
    let padded = text.saturating_add(usize::from(metrics.item_padding) * 2);
    u16::try_from(padded)
        .unwrap_or(u16::MAX)
        .max(metrics.item_min_width)
}

/// Top-left corner of the panel opened by a trigger at `depth`.
///
/// The menu bar (depth 1) opens downward, deeper levels cascade to the right.
pub fn panel_origin(trigger: Rect, depth: usize, gap: u16) -> (u16, u16) {
    if depth <= 1 {
        (
            trigger.x,
            trigger
                .y
                .saturating_add(trigger.height)
                .saturating_add(gap),
        )
    } else {
        (
            trigger
                .x
                .saturating_add(trigger.width)
                .saturating_add(gap),
            trigger.y,
        )
    }
}

/// Lay out the menu bar at the top-left of `area`, plus every open panel.
///
/// Item rects are not clipped to `area`; they may extend past it the way a
/// dropdown overflows its container. `area` is kept as the layout's clip,
/// which drawing and hit testing both respect.
pub fn compute(
    roots: &[MenuNode],
    state: &MenuState,
    area: Rect,
    metrics: &LayoutMetrics,
) -> MenuLayout {
    let mut items = Vec::new();
    let mut x = area.x;

    for (i, node) in roots.iter().enumerate() {
        let path = NodePath::root(i);
        let width = natural_width(node, metrics);
        let rect = Rect::new(x, area.y, width, 1);
        items.push(LayoutItem {
            path: path.clone(),
            part: Part::Trigger,
            rect,
            z: 0,
        });
        if node.is_branch() && state.is_open(&path) {
            lay_panel(node, &path, rect, state, metrics, &mut items);
        }
        x = x.saturating_add(width);
    }

    // Stable: equal stacking keeps tree order, later siblings paint on top
    items.sort_by_key(|item| item.z);
    MenuLayout { items, clip: area }
}

fn lay_panel(
    node: &MenuNode,
    path: &NodePath,
    trigger: Rect,
    state: &MenuState,
    metrics: &LayoutMetrics,
    items: &mut Vec<LayoutItem>,
) {
    let depth = path.depth();
    let z = u16::try_from(depth).unwrap_or(u16::MAX);
    let (px, py) = panel_origin(trigger, depth, metrics.panel_gap);
    let width = node
        .children
        .iter()
        .map(|child| natural_width(child, metrics))
        .max()
        .unwrap_or(metrics.item_min_width);
    let height = u16::try_from(node.children.len()).unwrap_or(u16::MAX);

    items.push(LayoutItem {
        path: path.clone(),
        part: Part::Panel,
        rect: Rect::new(px, py, width, height),
        z,
    });

    for (j, child) in node.children.iter().enumerate() {
        let child_path = path.child(j);
        let row = py.saturating_add(u16::try_from(j).unwrap_or(u16::MAX));
        let rect = Rect::new(px, row, width, 1);
        items.push(LayoutItem {
            path: child_path.clone(),
            part: Part::Trigger,
            rect,
            z,
        });
        if child.is_branch() && state.is_open(&child_path) {
            lay_panel(child, &child_path, rect, state, metrics, items);
        }
    }
}
