//! Menu option 4: back up the live config.
//!
//! The live directory is copied into a new theme only after an explicit y/n
//! confirmation and a name that is not taken yet.

use std::io;

use crate::app::commands::prompt_new_theme_name;
use crate::app::AppContext;
use waaaybar::ui::input;

/// Copy the live config into a new theme after explicit confirmation.
pub(crate) fn backup_theme(ctx: &AppContext) -> io::Result<()> {
    let renderer = &ctx.renderer;
    let paths = ctx.store.paths();
    input::clear_screen()?;
    renderer.section("back up current config");
    renderer.detail(&format!(
        "The contents of {} will be copied into a new theme under {}.",
        paths.live_config.display(),
        paths.theme_root.display()
    ));
    renderer.detail("You can apply it later like any other theme.");
    eprintln!();
    if !input::confirm(renderer, "Are you sure you want to continue?")? {
        return Ok(());
    }

    let name = prompt_new_theme_name(ctx, "Name of the theme:")?;
    match ctx.applier.backup_current(&name) {
        Ok(()) => {
            renderer.section(&format!("backed up as: {name}"));
            renderer.field(
                "saved_to",
                &paths.theme_root.join(&name).display().to_string(),
            );
        }
        Err(err) => renderer.error(&format!("failed to back up current config: {err}")),
    }
    eprintln!();
    input::wait_any_key(renderer)
}
