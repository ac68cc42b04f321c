//! CLI entry point for waaaybar.

mod app;
mod cli;

use clap::Parser;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    waaaybar::logging::init(args.verbose);
    let code = app::entry::run(args).await;
    std::process::exit(code);
}
