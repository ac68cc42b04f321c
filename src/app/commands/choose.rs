//! Menu option 3: pick an installed theme and apply it.
//!
//! Selection accepts a 1-based index or an exact name. After the live config
//! is replaced the bar is restarted.

use std::io;

use crate::app::AppContext;
use waaaybar::theme::restart_target;
use waaaybar::ui::input;

/// List installed themes, apply the selected one, and restart the bar.
pub(crate) fn choose_theme(ctx: &AppContext) -> io::Result<()> {
    let renderer = &ctx.renderer;
    let names = match ctx.store.list_themes() {
        Ok(names) => names,
        Err(err) => {
            renderer.error(&format!("failed to list themes: {err}"));
            return input::wait_any_key(renderer);
        }
    };
    if names.is_empty() {
        renderer.warn("No themes are installed.");
        return input::wait_any_key(renderer);
    }

    renderer.section("themes");
    for (idx, name) in names.iter().enumerate() {
        renderer.menu_option(&(idx + 1).to_string(), name);
    }
    let selector = input::read_line(renderer, "Choose a theme:")?;
    if selector.is_empty() {
        return Ok(());
    }
    let name = match resolve_theme_selector(&names, &selector) {
        Ok(name) => name,
        Err(msg) => {
            renderer.warn(&msg);
            return input::wait_any_key(renderer);
        }
    };

    if let Err(err) = ctx.applier.apply_theme(&name) {
        renderer.error(&format!("failed to apply theme `{name}`: {err}"));
        return input::wait_any_key(renderer);
    }

    let binary = &ctx.config.target.binary;
    match restart_target(ctx.system.as_ref(), &ctx.config.target) {
        Ok(()) => {
            renderer.section(&format!("applied theme: {name}"));
            renderer.detail(&format!("{binary} restarted with the new theme."));
        }
        Err(err) => renderer.warn(&format!(
            "theme `{name}` applied, but restarting {binary} failed: {err}"
        )),
    }
    eprintln!();
    input::wait_any_key(renderer)
}

/// Resolve a selection as a 1-based index into `names`, or an exact name.
pub(crate) fn resolve_theme_selector(names: &[String], selector: &str) -> Result<String, String> {
    let trimmed = selector.trim();
    if let Ok(index) = trimmed.parse::<usize>() {
        if index == 0 || index > names.len() {
            return Err(format!(
                "Theme index out of range: {index}. Choose 1-{}.",
                names.len()
            ));
        }
        return Ok(names[index - 1].clone());
    }

    names
        .iter()
        .find(|name| name.as_str() == trimmed)
        .cloned()
        .ok_or_else(|| format!("Unknown theme `{trimmed}`."))
}
