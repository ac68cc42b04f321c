//! Process-control capabilities used by bootstrap and theme reload.
//!
//! Everything that touches PATH lookup, privileged installs, or the running
//! status bar goes through [`SystemOps`] so lifecycle code can be exercised
//! against a recording fake without spawning real processes.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;

use crate::error::SystemError;

/// Host capabilities the lifecycle core depends on.
pub trait SystemOps {
    /// Resolve `name` to an executable file on `PATH`.
    fn find_executable(&self, name: &str) -> Option<PathBuf>;
    /// Run `program args..` with elevated privileges and wait for it.
    fn run_privileged(&self, program: &str, args: &[String]) -> Result<(), SystemError>;
    /// Terminate every running process named `name`. No match is not an error.
    fn terminate_by_name(&self, name: &str) -> Result<(), SystemError>;
    /// Launch `program` detached from this process and its terminal.
    fn spawn_detached(&self, program: &str) -> Result<(), SystemError>;
    /// Block for `duration`.
    fn sleep(&self, duration: Duration);
}

/// [`SystemOps`] backed by the real host (`sudo`, `pkill`, PATH scan).
#[derive(Debug, Default, Clone, Copy)]
pub struct HostSystem;

impl SystemOps for HostSystem {
    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        let path_var = std::env::var_os("PATH")?;
        find_in_path_list(name, std::env::split_paths(&path_var))
    }

    fn run_privileged(&self, program: &str, args: &[String]) -> Result<(), SystemError> {
        tracing::info!(program, ?args, "running privileged command");
        let status = Command::new("sudo")
            .arg(program)
            .args(args)
            .status()
            .map_err(|source| SystemError::Spawn {
                program: "sudo".to_string(),
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(SystemError::Exit {
                program: program.to_string(),
                code: status.code(),
            })
        }
    }

    fn terminate_by_name(&self, name: &str) -> Result<(), SystemError> {
        let status = Command::new("pkill")
            .arg("-x")
            .arg(name)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| SystemError::Spawn {
                program: "pkill".to_string(),
                source,
            })?;
        // pkill exits 1 when nothing matched, which just means the bar was not running.
        match status.code() {
            Some(0) | Some(1) => Ok(()),
            code => Err(SystemError::Exit {
                program: "pkill".to_string(),
                code,
            }),
        }
    }

    fn spawn_detached(&self, program: &str) -> Result<(), SystemError> {
        let mut command = Command::new(program);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // New process group so the bar survives this tool exiting or a Ctrl-C.
            command.process_group(0);
        }
        let child = command.spawn().map_err(|source| SystemError::Spawn {
            program: program.to_string(),
            source,
        })?;
        tracing::info!(program, pid = child.id(), "relaunched detached");
        let _ = reap_in_background(child);
        Ok(())
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Wait on `child` from a helper thread so it is reaped when it exits.
///
/// Without this a relaunched bar that is later `pkill`ed stays a zombie until
/// this process ends.
fn reap_in_background(mut child: Child) -> thread::JoinHandle<io::Result<ExitStatus>> {
    thread::spawn(move || {
        let status = child.wait();
        tracing::debug!(pid = child.id(), ?status, "detached child exited");
        status
    })
}

/// Return the first `dir/name` that is an executable regular file.
pub(crate) fn find_in_path_list<I>(name: &str, dirs: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    if name.is_empty() || name.contains('/') {
        return None;
    }
    dirs.into_iter()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

// ---------------------------------------------------------------------------
// Package managers
// ---------------------------------------------------------------------------

/// System package managers probed when the target application is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Pacman,
    Dnf,
    Yum,
    Apt,
    Zypper,
    Apk,
    Emerge,
}

impl PackageManager {
    /// Probe order; the first one found on PATH wins.
    pub const ALL: [PackageManager; 7] = [
        Self::Pacman,
        Self::Dnf,
        Self::Yum,
        Self::Apt,
        Self::Zypper,
        Self::Apk,
        Self::Emerge,
    ];

    pub fn executable(self) -> &'static str {
        match self {
            Self::Pacman => "pacman",
            Self::Dnf => "dnf",
            Self::Yum => "yum",
            Self::Apt => "apt",
            Self::Zypper => "zypper",
            Self::Apk => "apk",
            Self::Emerge => "emerge",
        }
    }

    /// Non-interactive install arguments for `package`.
    pub fn install_args(self, package: &str) -> Vec<String> {
        let prefix: &[&str] = match self {
            Self::Pacman => &["-S", "--noconfirm"],
            Self::Apk => &["add"],
            Self::Emerge => &["--ask=n"],
            Self::Dnf | Self::Yum | Self::Apt | Self::Zypper => &["install", "-y"],
        };
        prefix
            .iter()
            .map(|arg| arg.to_string())
            .chain(std::iter::once(package.to_string()))
            .collect()
    }

    /// First supported package manager available on this host.
    pub fn detect(system: &dyn SystemOps) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|manager| system.find_executable(manager.executable()).is_some())
    }
}
