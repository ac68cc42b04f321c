//! Applying themes to the live config and backing the live config up.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::TargetConfig;
use crate::error::{SystemError, ThemeError};
use crate::system::SystemOps;

use super::fs_copy::{copy_dir_contents, copy_dir_recursive, has_entries, remove_dir_if_exists};
use super::{ThemeName, ThemeStore};

/// Copies themes over the live config directory and back.
#[derive(Debug, Clone)]
pub struct ThemeApplier {
    store: ThemeStore,
}

impl ThemeApplier {
    pub fn new(store: ThemeStore) -> Self {
        Self { store }
    }

    /// Replace the live config directory with a copy of theme `name`.
    ///
    /// `name` is an installed theme's directory name, taken verbatim.
    ///
    /// The theme is first copied into a staging directory next to the live
    /// config; the live config is only removed once that copy is complete.
    /// A failure while swapping leaves the staging copy on disk for recovery.
    pub fn apply_theme(&self, name: &str) -> Result<(), ThemeError> {
        let name = ThemeName::existing(name)?;
        let source = self.store.theme_dir(&name);
        if !source.is_dir() {
            return Err(ThemeError::NotFound(name.to_string()));
        }
        let populated = has_entries(&source)
            .map_err(|e| ThemeError::io(format!("read {}", source.display()), e))?;
        if !populated {
            return Err(ThemeError::EmptyTheme(name.to_string()));
        }

        let live = &self.store.paths().live_config;
        if let Some(parent) = live.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ThemeError::io(format!("create {}", parent.display()), e))?;
        }

        let staging = staging_path(live);
        remove_dir_if_exists(&staging)
            .map_err(|e| ThemeError::io(format!("clear {}", staging.display()), e))?;
        if let Err(err) = copy_dir_recursive(&source, &staging) {
            let _ = remove_dir_if_exists(&staging);
            return Err(ThemeError::io(
                format!("copy {} to {}", source.display(), staging.display()),
                err,
            ));
        }

        remove_dir_if_exists(live)
            .map_err(|e| ThemeError::io(format!("remove {}", live.display()), e))?;
        fs::rename(&staging, live).map_err(|e| {
            ThemeError::io(
                format!("move {} to {}", staging.display(), live.display()),
                e,
            )
        })?;

        tracing::info!(theme = %name, live = %live.display(), "theme applied");
        Ok(())
    }

    /// Copy the live config directory into a new theme called `name`.
    pub fn backup_current(&self, name: &str) -> Result<(), ThemeError> {
        let name = ThemeName::parse(name)?;
        let live = &self.store.paths().live_config;
        if !live.is_dir() {
            return Err(ThemeError::LiveConfigMissing(live.clone()));
        }

        let theme_root = &self.store.paths().theme_root;
        fs::create_dir_all(theme_root)
            .map_err(|e| ThemeError::io(format!("create {}", theme_root.display()), e))?;

        let dest = self.store.theme_dir(&name);
        match fs::create_dir(&dest) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(ThemeError::AlreadyExists(name.to_string()));
            }
            Err(err) => return Err(ThemeError::io(format!("create {}", dest.display()), err)),
        }
        match copy_dir_contents(live, &dest) {
            Ok(files) => {
                tracing::info!(theme = %name, files, "live config backed up");
                Ok(())
            }
            Err(err) => {
                // The directory was created above, so discarding it cannot lose user data.
                let _ = remove_dir_if_exists(&dest);
                Err(ThemeError::io(
                    format!("copy {} to {}", live.display(), dest.display()),
                    err,
                ))
            }
        }
    }
}

/// Sibling path the next live config is assembled in before the swap.
fn staging_path(live: &Path) -> PathBuf {
    let name = live
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "live".to_string());
    live.with_file_name(format!(".{name}.waaaybar-staging"))
}

/// Restart the target application so it picks up the new config.
///
/// Terminates running instances, waits for the OS to release them, then
/// relaunches the binary detached.
pub fn restart_target(system: &dyn SystemOps, target: &TargetConfig) -> Result<(), SystemError> {
    system.terminate_by_name(&target.binary)?;
    system.sleep(target.restart_delay());
    system.spawn_detached(&target.binary)
}
