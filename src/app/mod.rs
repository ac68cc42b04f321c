//! Binary-local application orchestration.
//!
//! `main.rs` only parses flags and installs logging; startup checks, the menu
//! loop, and the per-option commands live here.

pub(crate) mod commands;
pub(crate) mod entry;
pub(crate) mod menu;

use waaaybar::config::{Config, LoadedConfig};
use waaaybar::system::SystemOps;
use waaaybar::theme::{ThemeApplier, ThemeFetcher, ThemeStore};
use waaaybar::ui::Renderer;

/// Everything a menu command needs, built once after startup checks pass.
pub(crate) struct AppContext {
    pub config: Config,
    pub renderer: Renderer,
    pub store: ThemeStore,
    pub fetcher: ThemeFetcher,
    pub applier: ThemeApplier,
    pub system: Box<dyn SystemOps>,
}

impl AppContext {
    pub(crate) fn new(
        loaded: LoadedConfig,
        renderer: Renderer,
        system: Box<dyn SystemOps>,
    ) -> Self {
        let store = ThemeStore::new(loaded.paths.clone());
        let fetcher = ThemeFetcher::new(store.clone(), loaded.config.network.fetch_timeout());
        let applier = ThemeApplier::new(store.clone());
        Self {
            config: loaded.config,
            renderer,
            store,
            fetcher,
            applier,
            system,
        }
    }
}
