//! A recursive, mouse-driven dropdown menu for the terminal.
//!
//! The menu tree is static data (`menu`). Open/closed state lives in a
//! parallel state tree, geometry is recomputed from both on every render, and
//! pointer events are hit-tested against the last computed layout.

pub mod app;
pub mod config;
pub mod keybindings;
pub mod menu;
pub mod theme;
pub mod ui;
pub mod util;
