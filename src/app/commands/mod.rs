//! Menu command handlers.
//!
//! Handlers render their own success and failure output. They only return
//! `Err` for terminal I/O problems, which end the menu loop.

/// Back up the live config as a new theme.
pub(crate) mod backup;
/// Pick an installed theme and apply it.
pub(crate) mod choose;
/// Download a theme from two links.
pub(crate) mod install;
/// Print installed theme names.
pub(crate) mod list;

use std::io;

use crate::app::AppContext;
use waaaybar::theme::ThemeName;
use waaaybar::ui::input;

/// Prompt until the user enters a valid theme name that is not taken yet.
pub(crate) fn prompt_new_theme_name(ctx: &AppContext, prompt: &str) -> io::Result<String> {
    loop {
        let raw = input::read_line(&ctx.renderer, prompt)?;
        let name = match ThemeName::parse(&raw) {
            Ok(name) => name,
            Err(err) => {
                ctx.renderer.warn(&err.to_string());
                continue;
            }
        };
        match ctx.store.theme_exists(name.as_str()) {
            Ok(true) => ctx
                .renderer
                .warn(&format!("Theme `{name}` already exists. Choose another name.")),
            Ok(false) => return Ok(name.as_str().to_string()),
            Err(err) => {
                // The operation itself reports the failure with more context.
                tracing::debug!(error = %err, "theme existence check failed");
                return Ok(name.as_str().to_string());
            }
        }
    }
}
