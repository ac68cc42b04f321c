//! First-run detection and target-application availability checks.
//!
//! Bootstrap never prompts on its own: the caller passes a consent callback
//! that is consulted only when the target binary is missing.

use std::fs;

use crate::config::{TargetConfig, ThemePaths};
use crate::error::BootstrapError;
use crate::system::{PackageManager, SystemOps};

/// Startup checks run once before the menu is shown.
pub struct Bootstrapper<'a> {
    system: &'a dyn SystemOps,
    paths: &'a ThemePaths,
    target: &'a TargetConfig,
}

impl<'a> Bootstrapper<'a> {
    pub fn new(system: &'a dyn SystemOps, paths: &'a ThemePaths, target: &'a TargetConfig) -> Self {
        Self {
            system,
            paths,
            target,
        }
    }

    /// Make sure the target is installed and the config root exists.
    ///
    /// Returns `true` on first run, i.e. when the config root had to be
    /// created. `confirm_install` receives the missing binary's name and
    /// decides whether a package-manager install should be attempted.
    pub fn ensure_ready<F>(&self, confirm_install: F) -> Result<bool, BootstrapError>
    where
        F: FnOnce(&str) -> bool,
    {
        if !self.dependency_present() {
            tracing::warn!(binary = %self.target.binary, "target application not found on PATH");
            if !confirm_install(&self.target.binary) {
                return Err(BootstrapError::Declined {
                    binary: self.target.binary.clone(),
                });
            }
            self.install_dependency()?;
        }
        self.ensure_config_root()
    }

    /// Whether the target binary resolves on PATH.
    pub fn dependency_present(&self) -> bool {
        self.system.find_executable(&self.target.binary).is_some()
    }

    /// Install the target package with the first detected package manager.
    pub fn install_dependency(&self) -> Result<PackageManager, BootstrapError> {
        let manager =
            PackageManager::detect(self.system).ok_or(BootstrapError::NoPackageManager)?;
        tracing::info!(
            manager = manager.executable(),
            package = %self.target.package,
            "installing target"
        );
        self.system
            .run_privileged(manager.executable(), &manager.install_args(&self.target.package))?;
        Ok(manager)
    }

    /// Create the config root if absent; returns `true` when it was created.
    pub fn ensure_config_root(&self) -> Result<bool, BootstrapError> {
        let root = &self.paths.config_root;
        if root.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(root).map_err(|source| BootstrapError::ConfigRoot {
            path: root.clone(),
            source,
        })?;
        tracing::info!(root = %root.display(), "first run: created config root");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{FakeSystem, SystemCall, TestTempDir};
    use crate::theme::ThemeStore;

    fn paths_in(dir: &TestTempDir) -> ThemePaths {
        ThemePaths::new(dir.child("cfg/waaaybar"), dir.child("cfg/waybar"))
    }

    #[test]
    fn fresh_environment_reports_first_run() {
        let dir = TestTempDir::new("boot-fresh");
        let paths = paths_in(&dir);
        let system = FakeSystem::with_executables(&["waybar"]);
        let target = TargetConfig::default();

        let first_run = Bootstrapper::new(&system, &paths, &target)
            .ensure_ready(|_| panic!("must not prompt when waybar is installed"))
            .expect("bootstrap");

        assert!(first_run);
        assert!(paths.config_root.is_dir());
        assert!(ThemeStore::new(paths).list_themes().unwrap().is_empty());
        assert!(system.calls().is_empty());
    }

    #[test]
    fn existing_config_root_is_not_first_run() {
        let dir = TestTempDir::new("boot-existing");
        let paths = paths_in(&dir);
        fs::create_dir_all(&paths.config_root).unwrap();
        let system = FakeSystem::with_executables(&["waybar"]);
        let target = TargetConfig::default();

        let first_run = Bootstrapper::new(&system, &paths, &target)
            .ensure_ready(|_| false)
            .unwrap();

        assert!(!first_run);
    }

    #[test]
    fn declining_install_is_fatal_and_creates_nothing() {
        let dir = TestTempDir::new("boot-declined");
        let paths = paths_in(&dir);
        let system = FakeSystem::with_executables(&["pacman"]);
        let target = TargetConfig::default();
        let mut asked = None;

        let err = Bootstrapper::new(&system, &paths, &target)
            .ensure_ready(|binary| {
                asked = Some(binary.to_string());
                false
            })
            .unwrap_err();

        assert!(matches!(err, BootstrapError::Declined { .. }));
        assert_eq!(asked.as_deref(), Some("waybar"));
        assert!(!paths.config_root.exists());
        assert!(system.calls().is_empty());
    }

    #[test]
    fn accepted_install_uses_first_detected_manager() {
        let dir = TestTempDir::new("boot-install");
        let paths = paths_in(&dir);
        let system = FakeSystem::with_executables(&["apt", "zypper"]).installing("waybar");
        let target = TargetConfig::default();
        let boot = Bootstrapper::new(&system, &paths, &target);

        let first_run = boot.ensure_ready(|_| true).expect("install succeeds");

        assert!(first_run);
        assert!(boot.dependency_present());
        assert_eq!(
            system.calls(),
            vec![SystemCall::Privileged(
                "apt".into(),
                vec!["install".into(), "-y".into(), "waybar".into()]
            )]
        );
    }

    #[test]
    fn missing_package_manager_is_fatal() {
        let dir = TestTempDir::new("boot-nopm");
        let paths = paths_in(&dir);
        let system = FakeSystem::default();
        let target = TargetConfig::default();

        let err = Bootstrapper::new(&system, &paths, &target)
            .ensure_ready(|_| true)
            .unwrap_err();

        assert!(matches!(err, BootstrapError::NoPackageManager));
        assert!(!paths.config_root.exists());
    }

    #[test]
    fn failed_install_is_fatal() {
        let dir = TestTempDir::new("boot-failed");
        let paths = paths_in(&dir);
        let system = FakeSystem::with_executables(&["dnf"]).failing_install(1);
        let target = TargetConfig::default();

        let err = Bootstrapper::new(&system, &paths, &target)
            .ensure_ready(|_| true)
            .unwrap_err();

        assert!(matches!(err, BootstrapError::InstallFailed(_)), "got: {err}");
    }
}
