//! Startup orchestration: settings, dependency bootstrap, first-run help,
//! then the menu loop.

use std::io;

use crate::app::{menu, AppContext};
use crate::cli::Args;
use waaaybar::bootstrap::Bootstrapper;
use waaaybar::config::{load_config, LoadedConfig};
use waaaybar::system::HostSystem;
use waaaybar::ui::{input, Renderer};

/// Run the interactive application and return the process exit code.
pub(crate) async fn run(args: Args) -> i32 {
    let loaded = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            Renderer::new(!args.no_color).error(&format!("failed to load settings: {err}"));
            return 1;
        }
    };
    if let Some(source) = &loaded.source {
        tracing::info!(path = %source.display(), "loaded settings");
    }

    let renderer = Renderer::new(loaded.config.display.color && !args.no_color);
    let system = HostSystem;

    let first_run = {
        let bootstrap = Bootstrapper::new(&system, &loaded.paths, &loaded.config.target);
        match bootstrap.ensure_ready(|binary| confirm_install(&renderer, binary)) {
            Ok(first_run) => first_run,
            Err(err) => {
                renderer.error(&err.to_string());
                return 1;
            }
        }
    };

    if first_run {
        match show_first_run_help(&renderer, &loaded) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return 0,
            Err(err) => {
                renderer.error(&format!("failed to read terminal input: {err}"));
                return 1;
            }
        }
    }

    let ctx = AppContext::new(loaded, renderer, Box::new(system));
    menu::run_menu(&ctx).await
}

/// Ask for consent to install the missing target. Closed stdin declines.
fn confirm_install(renderer: &Renderer, binary: &str) -> bool {
    let question = format!("It seems {binary} is not installed. Do you want to install it?");
    match input::confirm(renderer, &question) {
        Ok(decision) => decision,
        Err(err) => {
            tracing::debug!(error = %err, "install confirmation aborted");
            false
        }
    }
}

fn show_first_run_help(renderer: &Renderer, loaded: &LoadedConfig) -> io::Result<()> {
    let binary = &loaded.config.target.binary;
    input::clear_screen()?;
    renderer.section("Welcome to waaaybar");
    renderer.detail(&format!(
        "Themes live under {}, one directory each.",
        loaded.paths.theme_root.display()
    ));
    renderer.detail("Install a theme from two links: its style.css and its config.");
    renderer.detail(&format!(
        "Choosing a theme replaces your live {binary} config and restarts {binary}."
    ));
    renderer.detail("Back up your current config first so you can switch back to it later.");
    eprintln!();
    input::wait_any_key(renderer)
}
