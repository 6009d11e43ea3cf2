use crate::app::App;
use crate::keybindings::Action as KbAction;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg)
    } else {
        let quit = app
            .keybindings
            .key_for(KbAction::Quit)
            .unwrap_or_else(|| "Ctrl+c".to_string());
        Cow::Owned(format!("Click a menu to open it | [{}] {}", quit, KbAction::Quit.describe()))
    };

    let paragraph = Paragraph::new(text).style(app.palette.status_bar);
    f.render_widget(paragraph, area);
}
