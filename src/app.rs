use crate::config::Config;
use crate::keybindings::KeybindingRegistry;
use crate::menu::{
    layout, node_at, validate_tree, LayoutMetrics, MenuLayout, MenuNode, MenuState, NodeKind,
    NodePath, Part,
};
use crate::theme::ColorPalette;
use ratatui::layout::Rect;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::time::Instant;

/// How long a status message stays visible.
const STATUS_TTL_SECS: u64 = 3;

// ============================================================================
// Click Outcome
// ============================================================================

/// What a completed click on a trigger did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A branch opened or closed.
    Toggled { path: NodePath, open: bool },
    /// A leaf was activated.
    Navigate { link: String },
    /// Inert label, or the click did not land on the pressed trigger.
    Ignored,
}

// ============================================================================
// App State
// ============================================================================

/// Application state: the menu tree, its open-state and the last layout.
pub struct App {
    /// Immutable menu tree, shared read-only.
    pub menu: Arc<[MenuNode]>,
    pub state: MenuState,
    pub metrics: LayoutMetrics,
    /// Layout from the last render; what pointer events are tested against.
    pub layout: MenuLayout,
    /// Area the menu bar was last laid out in.
    menu_area: Option<Rect>,
    /// Trigger under the pointer when the button went down.
    pressed: Option<NodePath>,

    pub heading: String,
    pub base_url: Option<String>,
    pub palette: ColorPalette,
    pub keybindings: KeybindingRegistry,

    pub status_message: Option<(Cow<'static, str>, Instant)>,
    /// Set whenever state changes; cleared by the event loop after drawing.
    pub needs_redraw: bool,
}

impl App {
    pub fn new(menu: Vec<MenuNode>, config: &Config) -> Self {
        for warning in validate_tree(&menu) {
            tracing::warn!(%warning, "Menu tree problem");
        }

        let mut keybindings = KeybindingRegistry::new();
        let warnings = keybindings.apply_overrides(&config.keybindings);
        for warning in &warnings {
            tracing::warn!(%warning, "Keybinding override rejected");
        }

        let state = MenuState::new(&menu);
        let mut app = Self {
            menu: menu.into(),
            state,
            metrics: config.metrics(),
            layout: MenuLayout::default(),
            menu_area: None,
            pressed: None,
            heading: config.heading.clone(),
            base_url: config.base_url.clone(),
            palette: ColorPalette::default(),
            keybindings,
            status_message: None,
            needs_redraw: true,
        };

        if let Some(first) = warnings.first() {
            app.set_status(format!("Config: {}", first));
        }
        app
    }

    // ------------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------------

    /// Lay the menu out in `area` and remember the area for later refreshes.
    pub fn relayout(&mut self, area: Rect) {
        self.menu_area = Some(area);
        self.layout = layout::compute(&self.menu, &self.state, area, &self.metrics);
    }

    fn refresh_layout(&mut self) {
        if let Some(area) = self.menu_area {
            self.relayout(area);
        }
    }

    /// Labels of every visible trigger, in paint order.
    pub fn visible_labels(&self) -> Vec<&str> {
        self.layout
            .triggers()
            .filter_map(|t| node_at(&self.menu, &t.path))
            .map(|n| n.label.as_str())
            .collect()
    }

    // ------------------------------------------------------------------------
    // Pointer handling
    // ------------------------------------------------------------------------

    /// A pointer button went down at a cell.
    ///
    /// Closes every open node the cell is outside of, then remembers the
    /// trigger under the pointer so the matching release can complete a click.
    /// Returns the paths that were closed.
    pub fn pointer_down(&mut self, x: u16, y: u16) -> Vec<NodePath> {
        let hit = self.layout.hit(x, y).cloned();
        let target = hit.as_ref().map(|h| &h.path);
        let closed = self.state.dismiss_outside(target);

        if !closed.is_empty() {
            tracing::debug!(x, y, closed = closed.len(), "Dismissed menus on outside press");
            self.refresh_layout();
            self.needs_redraw = true;
        }

        self.pressed = hit.filter(|h| h.part == Part::Trigger).map(|h| h.path);
        closed
    }

    /// Primary button released at a cell.
    ///
    /// Completes a click when the release lands on the same trigger that was
    /// pressed, as it stands after the press handling.
    pub fn pointer_up(&mut self, x: u16, y: u16) -> ClickOutcome {
        let Some(pressed) = self.pressed.take() else {
            return ClickOutcome::Ignored;
        };
        let released_on = self
            .layout
            .hit(x, y)
            .filter(|h| h.part == Part::Trigger)
            .map(|h| &h.path);

        if released_on == Some(&pressed) {
            self.click(&pressed)
        } else {
            ClickOutcome::Ignored
        }
    }

    /// Forget the pressed trigger so the next release does not click.
    pub fn cancel_press(&mut self) {
        self.pressed = None;
    }

    /// Press and release at the same cell.
    pub fn click_at(&mut self, x: u16, y: u16) -> ClickOutcome {
        self.pointer_down(x, y);
        self.pointer_up(x, y)
    }

    /// Activate the trigger of the node at `path`.
    pub fn click(&mut self, path: &NodePath) -> ClickOutcome {
        let menu = Arc::clone(&self.menu);
        let Some(node) = node_at(&menu, path) else {
            return ClickOutcome::Ignored;
        };

        match node.kind() {
            NodeKind::Branch => match self.state.toggle(path) {
                Some(open) => {
                    tracing::debug!(%path, label = %node.label, open, "Toggled menu");
                    self.refresh_layout();
                    self.needs_redraw = true;
                    ClickOutcome::Toggled {
                        path: path.clone(),
                        open,
                    }
                }
                None => ClickOutcome::Ignored,
            },
            NodeKind::Leaf(link) => {
                tracing::info!(%path, link, "Activated menu link");
                ClickOutcome::Navigate {
                    link: link.to_owned(),
                }
            }
            NodeKind::Inert => ClickOutcome::Ignored,
        }
    }

    // ------------------------------------------------------------------------
    // Status line
    // ------------------------------------------------------------------------

    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
        self.needs_redraw = true;
    }

    /// Clear the status message once it is older than three seconds.
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::sample_menu;
    use pretty_assertions::assert_eq;
    use tokio::time::{self, Duration};

    fn path(indices: &[usize]) -> NodePath {
        NodePath::from(indices.to_vec())
    }

    fn test_app() -> App {
        let mut app = App::new(sample_menu(), &Config::default());
        app.relayout(Rect::new(0, 2, 120, 30));
        app
    }

    fn click_label(app: &mut App, label: &str) -> ClickOutcome {
        let rect = app
            .layout
            .triggers()
            .find(|t| node_at(&app.menu, &t.path).is_some_and(|n| n.label == label))
            .map(|t| t.rect)
            .unwrap_or_else(|| panic!("'{}' is not visible", label));
        app.click_at(rect.x, rect.y)
    }

    #[test]
    fn test_new_app_shows_only_menu_bar() {
        let app = test_app();
        assert_eq!(app.visible_labels(), vec!["Home", "Products", "About Us"]);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_click_branch_opens_panel() {
        let mut app = test_app();
        let outcome = click_label(&mut app, "Products");
        assert_eq!(
            outcome,
            ClickOutcome::Toggled {
                path: path(&[1]),
                open: true
            }
        );
        assert_eq!(
            app.visible_labels(),
            vec!["Home", "Products", "About Us", "Electronics", "Furniture"]
        );
    }

    #[test]
    fn test_double_click_closes_again() {
        let mut app = test_app();
        click_label(&mut app, "Products");
        let outcome = click_label(&mut app, "Products");
        assert_eq!(
            outcome,
            ClickOutcome::Toggled {
                path: path(&[1]),
                open: false
            }
        );
        assert_eq!(app.visible_labels(), vec!["Home", "Products", "About Us"]);
    }

    #[test]
    fn test_click_leaf_navigates_without_closing() {
        let mut app = test_app();
        click_label(&mut app, "Products");
        let outcome = click_label(&mut app, "Furniture");
        assert_eq!(
            outcome,
            ClickOutcome::Navigate {
                link: "/products/furniture".to_string()
            }
        );
        assert!(app.state.is_open(&path(&[1])));
    }

    #[test]
    fn test_press_outside_closes_everything() {
        let mut app = test_app();
        click_label(&mut app, "Products");
        click_label(&mut app, "Electronics");

        let closed = app.pointer_down(110, 25);
        assert_eq!(closed, vec![path(&[1])]);
        assert_eq!(app.pointer_up(110, 25), ClickOutcome::Ignored);
        assert!(app.state.open_paths().is_empty());
    }

    #[test]
    fn test_press_on_descendant_keeps_ancestors_open() {
        let mut app = test_app();
        click_label(&mut app, "Products");
        click_label(&mut app, "Electronics");
        let laptops = app.layout.trigger(&path(&[1, 0, 1])).unwrap().rect;

        let closed = app.pointer_down(laptops.x, laptops.y);
        assert!(closed.is_empty());
        assert!(app.state.is_open(&path(&[1])));
        assert!(app.state.is_open(&path(&[1, 0])));
    }

    #[test]
    fn test_clicking_other_top_level_closes_first() {
        let mut app = test_app();
        click_label(&mut app, "Products");
        let outcome = click_label(&mut app, "About Us");
        assert_eq!(
            outcome,
            ClickOutcome::Navigate {
                link: "/about".to_string()
            }
        );
        assert!(!app.state.is_open(&path(&[1])));
    }

    #[test]
    fn test_release_elsewhere_does_not_click() {
        let mut app = test_app();
        let products = app.layout.trigger(&path(&[1])).unwrap().rect;
        let home = app.layout.trigger(&path(&[0])).unwrap().rect;

        app.pointer_down(products.x, products.y);
        assert_eq!(app.pointer_up(home.x, home.y), ClickOutcome::Ignored);
        assert!(!app.state.is_open(&path(&[1])));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut app = test_app();
        assert_eq!(app.pointer_up(0, 2), ClickOutcome::Ignored);
    }

    #[test]
    fn test_inert_node_ignores_clicks() {
        let menu = vec![MenuNode {
            id: "x".to_string(),
            label: "Soon".to_string(),
            link: None,
            children: Vec::new(),
        }];
        let mut app = App::new(menu, &Config::default());
        app.relayout(Rect::new(0, 0, 40, 5));
        assert_eq!(app.click_at(0, 0), ClickOutcome::Ignored);
        assert_eq!(app.visible_labels(), vec!["Soon"]);
    }

    #[test]
    fn test_bad_keybinding_override_sets_status() {
        let mut config = Config::default();
        config
            .keybindings
            .insert("jump".to_string(), "x".to_string());
        let app = App::new(sample_menu(), &config);
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert!(msg.contains("Unknown action 'jump'"));
    }

    #[tokio::test]
    async fn test_status_expires_after_3_seconds() {
        time::pause();
        let mut app = test_app();
        app.set_status("Navigated");
        assert!(!app.clear_expired_status());

        time::advance(Duration::from_secs(3)).await;
        assert!(app.clear_expired_status());
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn test_status_not_expired_before_3_seconds() {
        time::pause();
        let mut app = test_app();
        app.set_status("Navigated");

        time::advance(Duration::from_millis(2900)).await;
        assert!(!app.clear_expired_status());
        assert!(app.status_message.is_some());
    }
}
