//! Error types for configuration, theme lifecycle, and process control.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing `waaaybar.toml`.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// FetchError
// ---------------------------------------------------------------------------

/// Failure to download one theme asset.
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    Http { url: String, source: reqwest::Error },
    /// Server answered with a non-2xx status.
    Status { url: String, code: u16 },
    /// Body arrived but could not be written to disk.
    Write { path: PathBuf, source: io::Error },
}

impl FetchError {
    /// HTTP status code when the server rejected the request.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { url, source } => write!(f, "GET {url}: {source}"),
            Self::Status { url, code } => write!(f, "GET {url}: status {code}"),
            Self::Write { path, source } => write!(f, "write {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// Errors raised by theme store, install, apply, and backup operations.
#[derive(Debug)]
pub enum ThemeError {
    /// Name cannot be used as a single directory component.
    InvalidName(String),
    /// A theme with this name is already installed.
    AlreadyExists(String),
    /// No theme with this name is installed.
    NotFound(String),
    /// Theme directory exists but holds no files.
    EmptyTheme(String),
    /// The application's live config directory is absent.
    LiveConfigMissing(PathBuf),
    /// Filesystem failure with a short description of the step that failed.
    Io { context: String, source: io::Error },
}

impl ThemeError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(reason) => write!(f, "invalid theme name: {reason}"),
            Self::AlreadyExists(name) => write!(f, "theme '{name}' already exists"),
            Self::NotFound(name) => write!(f, "theme '{name}' does not exist"),
            Self::EmptyTheme(name) => write!(f, "theme '{name}' is empty"),
            Self::LiveConfigMissing(path) => {
                write!(f, "live config folder {} does not exist", path.display())
            }
            Self::Io { context, source } => write!(f, "{context}: {source}"),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SystemError
// ---------------------------------------------------------------------------

/// Errors from spawning or waiting on external programs.
#[derive(Debug)]
pub enum SystemError {
    /// The program could not be started at all.
    Spawn { program: String, source: io::Error },
    /// The program ran and exited unsuccessfully (`None` when killed by a signal).
    Exit { program: String, code: Option<i32> },
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { program, source } => write!(f, "failed to start `{program}`: {source}"),
            Self::Exit {
                program,
                code: Some(code),
            } => write!(f, "`{program}` exited with status {code}"),
            Self::Exit {
                program,
                code: None,
            } => write!(f, "`{program}` was terminated by a signal"),
        }
    }
}

impl std::error::Error for SystemError {}

// ---------------------------------------------------------------------------
// BootstrapError
// ---------------------------------------------------------------------------

/// Fatal startup failures; the binary exits with status 1 on any of these.
#[derive(Debug)]
pub enum BootstrapError {
    /// Target application is missing and the operator declined installation.
    Declined { binary: String },
    /// None of the supported package managers is on PATH.
    NoPackageManager,
    /// The package manager ran but the installation failed.
    InstallFailed(SystemError),
    /// The tool's own config root could not be created.
    ConfigRoot { path: PathBuf, source: io::Error },
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declined { binary } => write!(f, "{binary} is required but not installed"),
            Self::NoPackageManager => write!(f, "no supported package manager detected"),
            Self::InstallFailed(e) => write!(f, "installation failed: {e}"),
            Self::ConfigRoot { path, source } => {
                write!(f, "failed to create {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for BootstrapError {}

impl From<SystemError> for BootstrapError {
    fn from(e: SystemError) -> Self {
        Self::InstallFailed(e)
    }
}
