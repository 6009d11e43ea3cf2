//! Dropdown menu widget.
//!
//! Draws the items of the last computed `MenuLayout` in paint order, so deeper
//! panels cover shallower ones.

use crate::app::App;
use crate::menu::layout::{INDICATOR_CLOSED, INDICATOR_OPEN};
use crate::menu::{node_at, LayoutItem, MenuNode, NodeKind, Part};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

/// Render the menu bar and every open panel, clipped to `clip`.
pub fn render(f: &mut Frame, app: &App, clip: Rect) {
    if clip.width < 1 || clip.height < 1 {
        return;
    }

    for item in app.layout.items() {
        let area = item.rect.intersection(clip);
        if area.width == 0 || area.height == 0 {
            continue;
        }

        match item.part {
            Part::Panel => {
                f.render_widget(Clear, area);
                f.render_widget(Block::default().style(app.palette.panel), area);
            }
            Part::Trigger => {
                if let Some(node) = node_at(&app.menu, &item.path) {
                    render_trigger(f, app, item, node, area);
                }
            }
        }
    }
}

fn render_trigger(f: &mut Frame, app: &App, item: &LayoutItem, node: &MenuNode, area: Rect) {
    let open = app.state.is_open(&item.path);
    let kind = node.kind();
    let style = app.palette.trigger_style(kind, open);
    let pad = " ".repeat(usize::from(app.metrics.item_padding));

    let mut spans = Vec::with_capacity(4);
    spans.push(Span::raw(pad));
    spans.push(Span::styled(node.label.as_str(), style));
    if kind == NodeKind::Branch {
        let indicator = if open {
            INDICATOR_OPEN
        } else {
            INDICATOR_CLOSED
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(indicator, style.patch(app.palette.indicator)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
}
