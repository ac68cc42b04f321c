//! Directory layout shared by every theme lifecycle component.

use std::path::{Path, PathBuf};

use super::defaults::{APP_DIR_NAME, LIVE_CONFIG_DIR_NAME, THEMES_DIR_NAME};

/// Resolved filesystem layout: the tool's own root, its theme root, and the
/// target application's live config directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePaths {
    pub config_root: PathBuf,
    pub theme_root: PathBuf,
    pub live_config: PathBuf,
}

impl ThemePaths {
    /// Build a layout with the theme root nested under `config_root`.
    pub fn new(config_root: impl Into<PathBuf>, live_config: impl Into<PathBuf>) -> Self {
        let config_root = config_root.into();
        Self {
            theme_root: config_root.join(THEMES_DIR_NAME),
            config_root,
            live_config: live_config.into(),
        }
    }

    /// Default layout under a user config directory such as `~/.config`.
    pub fn under(user_config_dir: &Path) -> Self {
        Self::new(
            user_config_dir.join(APP_DIR_NAME),
            user_config_dir.join(LIVE_CONFIG_DIR_NAME),
        )
    }
}

/// Resolve the user config directory (`$XDG_CONFIG_HOME`, else `~/.config`).
pub fn user_config_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

/// Expand a leading `~` or `~/` against `home`. Other paths pass through.
pub(super) fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    let trimmed = raw.trim();
    match (trimmed, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (path, Some(home)) if path.starts_with("~/") => home.join(&path[2..]),
        (path, _) => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_root_is_nested_under_config_root() {
        let paths = ThemePaths::new("/cfg/waaaybar", "/cfg/waybar");
        assert_eq!(paths.theme_root, PathBuf::from("/cfg/waaaybar/themes"));
        assert_eq!(paths.live_config, PathBuf::from("/cfg/waybar"));
    }

    #[test]
    fn default_layout_uses_sibling_directories() {
        let paths = ThemePaths::under(Path::new("/home/u/.config"));
        assert_eq!(paths.config_root, PathBuf::from("/home/u/.config/waaaybar"));
        assert_eq!(paths.live_config, PathBuf::from("/home/u/.config/waybar"));
    }

    #[test]
    fn expand_home_handles_tilde_forms() {
        let home = Path::new("/home/u");
        assert_eq!(expand_home("~", Some(home)), PathBuf::from("/home/u"));
        assert_eq!(
            expand_home("~/.config/waybar", Some(home)),
            PathBuf::from("/home/u/.config/waybar")
        );
        assert_eq!(expand_home("/etc/xdg/waybar", Some(home)), PathBuf::from("/etc/xdg/waybar"));
        assert_eq!(expand_home("~other/x", Some(home)), PathBuf::from("~other/x"));
        assert_eq!(expand_home("~/x", None), PathBuf::from("~/x"));
    }
}
