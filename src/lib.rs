//! Install, switch, and back up Waybar themes.
//!
//! Themes are directories under `~/.config/waaaybar/themes`, each holding a
//! `style.css` and a `config`. Applying a theme replaces `~/.config/waybar`
//! and restarts the bar.
//!
//! # Quick start
//!
//! ```no_run
//! use waaaybar::config::load_config;
//! use waaaybar::theme::{ThemeApplier, ThemeStore};
//!
//! let loaded = load_config(None).unwrap();
//! let store = ThemeStore::new(loaded.paths.clone());
//! for name in store.list_themes().unwrap() {
//!     println!("{name}");
//! }
//! ThemeApplier::new(store).apply_theme("nord").unwrap();
//! ```

pub mod bootstrap;
pub mod build_info;
pub mod config;
pub mod error;
pub mod logging;
pub mod system;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
pub mod ui;
