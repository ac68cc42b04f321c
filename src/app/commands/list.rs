//! Menu option 1: print installed theme names.

use std::io;

use crate::app::AppContext;
use waaaybar::ui::input;

/// Print every installed theme name, one per line on stdout.
pub(crate) fn list_themes(ctx: &AppContext) -> io::Result<()> {
    let renderer = &ctx.renderer;
    match ctx.store.list_themes() {
        Ok(names) if names.is_empty() => {
            renderer.detail("No themes installed yet. Install one or back up your current config.");
        }
        Ok(names) => {
            renderer.section("installed themes");
            for name in &names {
                renderer.list_item(name);
            }
        }
        Err(err) => renderer.error(&format!("failed to list themes: {err}")),
    }
    eprintln!();
    input::wait_any_key(renderer)
}
