//! Configuration file parser for ~/.config/cascade/config.toml.
//!
//! The config file is optional. A missing file yields `Config::default()`.
//! Unknown keys are accepted by serde but logged as warnings so typos surface.
use crate::menu::sample::{sample_menu, DEFAULT_HEADING};
use crate::menu::{LayoutMetrics, MenuNode};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Struct
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Heading drawn above the menu bar.
    pub heading: String,

    /// Minimum width of a menu item, in cells.
    pub item_min_width: u16,

    /// Blank cells on each side of a label.
    pub item_padding: u16,

    /// Cells between a trigger and the submenu it opens.
    pub panel_gap: u16,

    /// Base URL that leaf links are resolved against before opening.
    /// Without it, activating a leaf only reports the link.
    pub base_url: Option<String>,

    /// Keybinding overrides. Keys are action names, values are key strings.
    pub keybindings: HashMap<String, String>,

    /// Menu tree to show instead of the built-in one.
    pub menu: Option<Vec<MenuNode>>,
}

impl Default for Config {
    fn default() -> Self {
        let metrics = LayoutMetrics::default();
        Self {
            heading: DEFAULT_HEADING.to_string(),
            item_min_width: metrics.item_min_width,
            item_padding: metrics.item_padding,
            panel_gap: metrics.panel_gap,
            base_url: None,
            keybindings: HashMap::new(),
            menu: None,
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 7] = [
        "heading",
        "item_min_width",
        "item_padding",
        "panel_gap",
        "base_url",
        "keybindings",
        "menu",
    ];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            tracing::debug!("Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(content)?;
        tracing::info!(
            item_min_width = config.item_min_width,
            panel_gap = config.panel_gap,
            custom_menu = config.menu.is_some(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// The configured menu tree, or the built-in one.
    pub fn menu_tree(&self) -> Vec<MenuNode> {
        self.menu.clone().unwrap_or_else(sample_menu)
    }

    /// Sizing knobs for the menu layout.
    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            item_min_width: self.item_min_width,
            item_padding: self.item_padding,
            panel_gap: self.panel_gap,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.heading, "5-Level Dropdown Menu");
        assert_eq!(config.item_min_width, 20);
        assert_eq!(config.item_padding, 1);
        assert_eq!(config.panel_gap, 0);
        assert!(config.base_url.is_none());
        assert!(config.keybindings.is_empty());
        assert!(config.menu.is_none());
        assert_eq!(config.menu_tree(), sample_menu());
        assert_eq!(config.metrics(), LayoutMetrics::default());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("/tmp/cascade_test_nonexistent_config.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config.item_min_width, 20);
    }

    #[test]
    fn test_empty_file_returns_default() {
        let dir = std::env::temp_dir().join("cascade_config_test_empty");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.heading, "5-Level Dropdown Menu");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_whitespace_only_returns_default() {
        let config = Config::parse("   \n  \n  ").unwrap();
        assert_eq!(config.panel_gap, 0);
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let config = Config::parse("panel_gap = 1\n").unwrap();
        assert_eq!(config.panel_gap, 1);
        assert_eq!(config.item_min_width, 20);
        assert_eq!(config.heading, "5-Level Dropdown Menu");
    }

    #[test]
    fn test_full_config() {
        let dir = std::env::temp_dir().join("cascade_config_test_full");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let content = r#"
heading = "Shop"
item_min_width = 12
item_padding = 2
panel_gap = 1
base_url = "https://shop.example.com"

[keybindings]
quit = "Ctrl+q"
redraw = "F5"
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.heading, "Shop");
        assert_eq!(
            config.metrics(),
            LayoutMetrics {
                item_min_width: 12,
                item_padding: 2,
                panel_gap: 1,
            }
        );
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://shop.example.com")
        );
        assert_eq!(
            config.keybindings.get("quit").map(String::as_str),
            Some("Ctrl+q")
        );
        assert_eq!(
            config.keybindings.get("redraw").map(String::as_str),
            Some("F5")
        );

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_menu_tree_from_config() {
        let config = Config::parse(
            r#"
heading = "Shop"

[[menu]]
id = "1"
label = "Home"
link = "/"

[[menu]]
id = "2"
label = "Products"

[[menu.children]]
id = "2-1"
label = "Chairs"
link = "/chairs"
"#,
        )
        .unwrap();

        let tree = config.menu_tree();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0], MenuNode::leaf("1", "Home", "/"));
        assert_eq!(
            tree[1],
            MenuNode::branch("2", "Products", vec![MenuNode::leaf("2-1", "Chairs", "/chairs")])
        );
        assert_eq!(config.heading, "Shop");
    }

    #[test]
    fn test_menu_node_requires_label() {
        let err = Config::parse("[[menu]]\nid = \"1\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let err = Config::parse("this is not [valid toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Invalid TOML"));
    }

    #[test]
    fn test_unknown_keys_accepted() {
        let config = Config::parse("panel_gap = 2\ntheme = \"neon\"\n").unwrap();
        assert_eq!(config.panel_gap, 2);
    }

    #[test]
    fn test_wrong_type_returns_error() {
        assert!(Config::parse("item_min_width = \"wide\"\n").is_err());
        assert!(Config::parse("panel_gap = -1\n").is_err());
    }

    #[test]
    fn test_too_large_file_rejected() {
        let dir = std::env::temp_dir().join("cascade_config_test_too_large");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let content = "a".repeat(1_048_577);
        std::fs::write(&path, content).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge(_)));
        assert!(err.to_string().contains("too large"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
