//! Menu option 2: download a theme from two links.

use std::io;

use crate::app::commands::prompt_new_theme_name;
use crate::app::AppContext;
use waaaybar::error::FetchError;
use waaaybar::theme::{AssetReport, InstallOutcome, CONFIG_FILE, STYLE_FILE};
use waaaybar::ui::{input, Renderer};

/// Ask for the two asset links and a name, then download the theme.
pub(crate) async fn install_theme(ctx: &AppContext) -> io::Result<()> {
    let renderer = &ctx.renderer;
    let style_url = input::read_line(renderer, "Link to the style.css:")?;
    let config_url = input::read_line(renderer, "Link to the config:")?;
    let name = prompt_new_theme_name(ctx, "Name of the theme:")?;

    match ctx.fetcher.install_theme(&style_url, &config_url, &name).await {
        Ok(outcome) => render_outcome(renderer, &outcome),
        Err(err) => renderer.error(&format!("failed to install theme: {err}")),
    }
    eprintln!();
    input::wait_any_key(renderer)
}

fn render_outcome(renderer: &Renderer, outcome: &InstallOutcome) {
    renderer.section(&format!("installing {}", outcome.name));
    render_asset(renderer, STYLE_FILE, &outcome.style);
    render_asset(renderer, CONFIG_FILE, &outcome.config);
    if outcome.is_complete() {
        renderer.detail(&format!("Theme `{}` installed.", outcome.name));
    } else {
        renderer.warn(&format!(
            "Theme `{}` is incomplete. Remove it and install again once the links work.",
            outcome.name
        ));
    }
}

fn render_asset(renderer: &Renderer, file: &str, result: &Result<AssetReport, FetchError>) {
    match result {
        Ok(report) => renderer.step(true, file, &asset_summary(report)),
        Err(err) => renderer.step(false, file, &err.to_string()),
    }
}

fn asset_summary(report: &AssetReport) -> String {
    let short = report.sha256.get(..12).unwrap_or(&report.sha256);
    format!("{} bytes, sha256 {short}", report.bytes)
}
