//! Colors for the TUI.
//!
//! One fixed palette of semantic roles. Widgets read styles from here instead
//! of hardcoding colors.

use crate::menu::NodeKind;
use ratatui::style::{Color, Modifier, Style};

/// Semantic UI roles mapped to `Style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub heading: Style,

    // -- Menu --
    pub trigger: Style,
    pub trigger_open: Style,
    pub leaf: Style,
    pub inert: Style,
    pub indicator: Style,
    pub panel: Style,

    // -- Chrome --
    pub status_bar: Style,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),

            trigger: Style::default().fg(Color::White).bg(Color::Black),
            trigger_open: Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            leaf: Style::default().fg(Color::White).bg(Color::Black),
            inert: Style::default().fg(Color::Gray).bg(Color::Black),
            indicator: Style::default().fg(Color::Yellow),
            panel: Style::default().bg(Color::Black),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }
}

impl ColorPalette {
    /// Style for a trigger given its kind and state.
    pub fn trigger_style(&self, kind: NodeKind<'_>, open: bool) -> Style {
        match kind {
            NodeKind::Branch if open => self.trigger_open,
            NodeKind::Branch => self.trigger,
            NodeKind::Leaf(_) => self.leaf,
            NodeKind::Inert => self.inert,
        }
    }
}
