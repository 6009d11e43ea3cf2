//! Terminal User Interface module.
//!
//! This module hosts the dropdown menu in a terminal, including:
//! - Main event loop (`run`)
//! - Mouse and key input handling
//! - Rendering for the heading, menu and status bar
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Mouse and keyboard input handling
//! - `render` - Screen layout and render dispatch
//! - `menu` - Dropdown menu widget
//! - `status` - Status bar widget

mod input;
mod loop_runner;
mod menu;
mod render;
mod status;

// Re-export the public API
pub use loop_runner::{run, Action};
pub use render::render;
