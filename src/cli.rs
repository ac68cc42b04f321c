//! CLI argument parsing via clap.

use clap::{ArgAction, Parser};
use waaaybar::build_info;

/// Install, switch, and back up Waybar themes from an interactive menu.
#[derive(Debug, Parser)]
#[command(name = "waaaybar", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Path to a settings file (default: ~/.config/waaaybar/waaaybar.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug). WAAAYBAR_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
