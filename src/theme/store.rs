//! Theme enumeration under the theme root.

use std::fs;
use std::path::PathBuf;

use crate::config::ThemePaths;
use crate::error::ThemeError;

use super::ThemeName;

/// Read-only view over installed themes.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    paths: ThemePaths,
}

impl ThemeStore {
    pub fn new(paths: ThemePaths) -> Self {
        Self { paths }
    }

    /// Names of every theme directory, sorted. Creates the theme root if missing.
    pub fn list_themes(&self) -> Result<Vec<String>, ThemeError> {
        let root = &self.paths.theme_root;
        fs::create_dir_all(root)
            .map_err(|e| ThemeError::io(format!("create {}", root.display()), e))?;

        let entries =
            fs::read_dir(root).map_err(|e| ThemeError::io(format!("read {}", root.display()), e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ThemeError::io(format!("read {}", root.display()), e))?;
            let is_dir = entry.file_type().map(|kind| kind.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::debug!(?raw, "skipping non-UTF-8 theme directory"),
            }
        }
        names.sort();
        Ok(names)
    }

    /// Membership test against the current listing.
    pub fn theme_exists(&self, name: &str) -> Result<bool, ThemeError> {
        Ok(self.list_themes()?.iter().any(|existing| existing == name))
    }

    /// Directory a theme named `name` lives (or would live) in.
    pub fn theme_dir(&self, name: &ThemeName) -> PathBuf {
        self.paths.theme_root.join(name.as_str())
    }

    pub fn paths(&self) -> &ThemePaths {
        &self.paths
    }
}
