//! Default configuration constants.

/// Directory name of this tool's config root under the user config dir.
pub(super) const APP_DIR_NAME: &str = "waaaybar";
/// Settings file looked up inside the config root.
pub(super) const SETTINGS_FILE_NAME: &str = "waaaybar.toml";
/// Directory name of the target application's live config.
pub(super) const LIVE_CONFIG_DIR_NAME: &str = "waybar";
/// Subdirectory of the config root holding installed themes.
pub(super) const THEMES_DIR_NAME: &str = "themes";
/// Executable name of the target status bar.
pub(super) const DEFAULT_TARGET_BINARY: &str = "waybar";
/// Package name passed to the system package manager.
pub(super) const DEFAULT_TARGET_PACKAGE: &str = "waybar";
/// Pause between terminating and relaunching the target.
pub(super) const DEFAULT_RESTART_DELAY_MS: u64 = 300;
/// Per-request timeout for theme asset downloads.
pub(super) const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;
