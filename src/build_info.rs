//! Compile-time build metadata for `--version` and the menu banner.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS revision captured at build time.
pub const GIT_COMMIT: &str = env!("WAAAYBAR_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("WAAAYBAR_BUILD_TIMESTAMP");

/// One-line banner shown above the main menu.
pub fn banner_line() -> String {
    format!("waaaybar v{VERSION} ({GIT_COMMIT})")
}

/// Maintainer credit shown under the banner.
pub fn credit_line() -> String {
    let authors = env!("CARGO_PKG_AUTHORS").replace(':', ", ");
    format!("maintained by {authors} at {}", env!("CARGO_PKG_HOMEPAGE"))
}

/// Multi-line block printed by `waaaybar --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("WAAAYBAR_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("WAAAYBAR_BUILD_TIMESTAMP")
);
