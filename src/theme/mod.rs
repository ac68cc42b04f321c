//! Theme lifecycle: enumerate, install, apply, and back up themes.
//!
//! A theme is a directory under the theme root holding a style sheet
//! ([`STYLE_FILE`]) and a bar config ([`CONFIG_FILE`]).

mod apply;
mod fetch;
mod fs_copy;
mod store;

pub use apply::{restart_target, ThemeApplier};
pub use fetch::{AssetReport, InstallOutcome, ThemeFetcher};
pub use store::ThemeStore;

use std::fmt;

use crate::error::ThemeError;

/// Fixed file name of a theme's style sheet.
pub const STYLE_FILE: &str = "style.css";
/// Fixed file name of a theme's bar configuration.
pub const CONFIG_FILE: &str = "config";

/// A theme name usable as exactly one directory component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThemeName(String);

impl ThemeName {
    /// Validate and trim a user-supplied name.
    pub fn parse(raw: &str) -> Result<Self, ThemeError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ThemeError::InvalidName("name is empty".to_string()));
        }
        if name == "." || name == ".." {
            return Err(ThemeError::InvalidName(format!("`{name}` is reserved")));
        }
        if let Some(bad) = name.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
            return Err(ThemeError::InvalidName(format!(
                "`{}` contains {bad:?}",
                name.escape_default()
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// Accept the name of an installed theme exactly as it appears on disk.
    ///
    /// Directory names are never trimmed or rewritten here, so `"nord "` and
    /// `"nord"` stay distinct themes. Only the checks that keep the name a
    /// single path component apply.
    pub fn existing(raw: &str) -> Result<Self, ThemeError> {
        let escapes_root = raw.is_empty()
            || raw == "."
            || raw == ".."
            || raw.chars().any(|c| c == '/' || c == '\0');
        if escapes_root {
            return Err(ThemeError::InvalidName(format!(
                "`{}` is not a single directory name",
                raw.escape_default()
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ThemeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
