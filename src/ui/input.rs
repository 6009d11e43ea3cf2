//! Input handling for the TUI.
//!
//! Mouse events drive the menu. Keys only reach the shell bindings.

use crate::app::{App, ClickOutcome};
use crate::keybindings::Action as KbAction;
use crate::util::resolve_link;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::Action;

/// Handle a key press.
pub(super) fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    match app.keybindings.action_for_key(code, modifiers) {
        Some(KbAction::Quit) => Action::Quit,
        Some(KbAction::Redraw) => {
            app.needs_redraw = true;
            Action::Continue
        }
        None => Action::Continue,
    }
}

/// Handle a mouse event.
///
/// Any button going down counts for outside-dismissal. Only the primary
/// button completes clicks.
pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Action {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(button) => {
            app.pointer_down(x, y);
            if button != MouseButton::Left {
                app.cancel_press();
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let ClickOutcome::Navigate { link } = app.pointer_up(x, y) {
                activate_link(app, &link);
            }
        }
        _ => {}
    }
    Action::Continue
}

/// Follow a leaf link.
///
/// Without a configured base URL the link is only reported. With one, the
/// resolved URL is handed to the system opener.
fn activate_link(app: &mut App, link: &str) {
    let Some(base) = app.base_url.clone() else {
        app.set_status(format!("Link: {}", link));
        return;
    };

    match resolve_link(&base, link) {
        Ok(url) => match open::that(url.as_str()) {
            Ok(()) => app.set_status(format!("Opening {}", url)),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to open link");
                app.set_status(format!("Failed to open browser: {}", e));
            }
        },
        Err(e) => {
            tracing::warn!(link, error = %e, "Cannot resolve link");
            app.set_status(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::menu::{sample_menu, NodePath};
    use ratatui::layout::Rect;

    fn test_app() -> App {
        let mut app = App::new(sample_menu(), &Config::default());
        app.relayout(Rect::new(0, 2, 120, 30));
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn left_click(app: &mut App, x: u16, y: u16) {
        handle_mouse(app, mouse(MouseEventKind::Down(MouseButton::Left), x, y));
        handle_mouse(app, mouse(MouseEventKind::Up(MouseButton::Left), x, y));
    }

    #[test]
    fn test_left_click_toggles_branch() {
        let mut app = test_app();
        let products = app.layout.trigger(&NodePath::root(1)).unwrap().rect;
        left_click(&mut app, products.x, products.y);
        assert!(app.state.is_open(&NodePath::root(1)));
    }

    #[test]
    fn test_right_click_dismisses_but_does_not_toggle() {
        let mut app = test_app();
        let products = app.layout.trigger(&NodePath::root(1)).unwrap().rect;
        left_click(&mut app, products.x, products.y);

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Right), 110, 20));
        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Right), 110, 20));
        assert!(!app.state.is_open(&NodePath::root(1)));

        handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Right), products.x, products.y),
        );
        handle_mouse(
            &mut app,
            mouse(MouseEventKind::Up(MouseButton::Left), products.x, products.y),
        );
        assert!(!app.state.is_open(&NodePath::root(1)));
    }

    #[test]
    fn test_mouse_moves_are_ignored() {
        let mut app = test_app();
        app.needs_redraw = false;
        handle_mouse(&mut app, mouse(MouseEventKind::Moved, 3, 2));
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_leaf_without_base_url_reports_link() {
        let mut app = test_app();
        let home = app.layout.trigger(&NodePath::root(0)).unwrap().rect;
        left_click(&mut app, home.x, home.y);

        let (msg, _) = app.status_message.as_ref().unwrap();
        assert_eq!(msg, "Link: /");
    }

    #[test]
    fn test_leaf_with_bad_base_url_reports_error() {
        let config = Config {
            base_url: Some("not a url".to_string()),
            ..Config::default()
        };
        let mut app = App::new(sample_menu(), &config);
        app.relayout(Rect::new(0, 2, 120, 30));
        let about = app.layout.trigger(&NodePath::root(2)).unwrap().rect;
        left_click(&mut app, about.x, about.y);

        let (msg, _) = app.status_message.as_ref().unwrap();
        assert!(msg.contains("Invalid base URL"));
    }

    #[test]
    fn test_quit_and_redraw_keys() {
        let mut app = test_app();
        assert!(matches!(
            handle_key(&mut app, KeyCode::Char('q'), KeyModifiers::NONE),
            Action::Quit
        ));

        app.needs_redraw = false;
        assert!(matches!(
            handle_key(&mut app, KeyCode::Char('l'), KeyModifiers::CONTROL),
            Action::Continue
        ));
        assert!(app.needs_redraw);

        assert!(matches!(
            handle_key(&mut app, KeyCode::Down, KeyModifiers::NONE),
            Action::Continue
        ));
    }
}
