//! Main menu loop.

use std::io;

use crate::app::commands::{backup, choose, install, list};
use crate::app::AppContext;
use waaaybar::build_info;
use waaaybar::ui::input;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    List,
    Install,
    Choose,
    Backup,
    Quit,
}

const MENU_ENTRIES: [(&str, &str); 5] = [
    ("1", "List installed themes"),
    ("2", "Install a new theme"),
    ("3", "Choose a theme"),
    ("4", "Back up current config"),
    ("5", "Quit"),
];

/// Map a typed menu selection to a choice; anything unknown is `None`.
pub(crate) fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" => Some(MenuChoice::List),
        "2" => Some(MenuChoice::Install),
        "3" => Some(MenuChoice::Choose),
        "4" => Some(MenuChoice::Backup),
        "5" | "q" | "quit" => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Show the menu until the user quits or stdin closes. Returns the exit code.
pub(crate) async fn run_menu(ctx: &AppContext) -> i32 {
    let mut notice: Option<String> = None;
    loop {
        let _ = input::clear_screen();
        ctx.renderer.banner(&build_info::banner_line());
        ctx.renderer.detail(&build_info::credit_line());
        eprintln!();
        for (key, label) in MENU_ENTRIES {
            ctx.renderer.menu_option(key, label);
        }
        if let Some(msg) = notice.take() {
            eprintln!();
            ctx.renderer.warn(&msg);
        }

        let selection = match input::read_line(&ctx.renderer, "Choose an option:") {
            Ok(selection) => selection,
            Err(err) => return exit_code_for(ctx, &err),
        };
        let Some(choice) = parse_menu_choice(&selection) else {
            if !selection.is_empty() {
                notice = Some(format!("Unknown option `{selection}`. Choose 1-5."));
            }
            continue;
        };
        tracing::debug!(?choice, "menu selection");

        let result = match choice {
            MenuChoice::List => list::list_themes(ctx),
            MenuChoice::Install => install::install_theme(ctx).await,
            MenuChoice::Choose => choose::choose_theme(ctx),
            MenuChoice::Backup => backup::backup_theme(ctx),
            MenuChoice::Quit => return 0,
        };
        if let Err(err) = result {
            return exit_code_for(ctx, &err);
        }
    }
}

/// Closed stdin ends the session normally; other terminal failures are fatal.
fn exit_code_for(ctx: &AppContext, err: &io::Error) -> i32 {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        eprintln!();
        return 0;
    }
    ctx.renderer
        .error(&format!("failed to read terminal input: {err}"));
    1
}
