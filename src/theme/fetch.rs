//! Remote theme installation.
//!
//! Each asset is one HTTP GET whose body is written verbatim. Both downloads
//! always run; a failed one leaves the theme directory partially populated.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use sha2::{Digest, Sha256};

use crate::error::{FetchError, ThemeError};

use super::{ThemeName, ThemeStore, CONFIG_FILE, STYLE_FILE};

/// Bytes written for one successfully downloaded asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReport {
    pub bytes: u64,
    /// Lowercase hex SHA-256 of the body.
    pub sha256: String,
}

/// Per-asset result of [`ThemeFetcher::install_theme`].
#[derive(Debug)]
pub struct InstallOutcome {
    pub name: ThemeName,
    pub style: Result<AssetReport, FetchError>,
    pub config: Result<AssetReport, FetchError>,
}

impl InstallOutcome {
    /// True only when both assets were downloaded and written.
    pub fn is_complete(&self) -> bool {
        self.style.is_ok() && self.config.is_ok()
    }
}

/// Downloads theme assets into new directories under the theme root.
pub struct ThemeFetcher {
    http: reqwest::Client,
    store: ThemeStore,
}

impl ThemeFetcher {
    pub fn new(store: ThemeStore, timeout: Duration) -> Self {
        Self {
            http: build_http_client(timeout),
            store,
        }
    }

    /// Create theme `name` and download both assets into it.
    ///
    /// Fails with [`ThemeError::AlreadyExists`] before any download when the
    /// directory is already present; the existing theme is left untouched.
    pub async fn install_theme(
        &self,
        style_url: &str,
        config_url: &str,
        name: &str,
    ) -> Result<InstallOutcome, ThemeError> {
        let name = ThemeName::parse(name)?;
        let theme_root = &self.store.paths().theme_root;
        fs::create_dir_all(theme_root)
            .map_err(|e| ThemeError::io(format!("create {}", theme_root.display()), e))?;

        let dir = self.store.theme_dir(&name);
        match fs::create_dir(&dir) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(ThemeError::AlreadyExists(name.to_string()));
            }
            Err(err) => return Err(ThemeError::io(format!("create {}", dir.display()), err)),
        }
        tracing::info!(theme = %name, dir = %dir.display(), "installing theme");

        let style = self.fetch_to(style_url, &dir.join(STYLE_FILE)).await;
        let config = self.fetch_to(config_url, &dir.join(CONFIG_FILE)).await;

        let outcome = InstallOutcome {
            name,
            style,
            config,
        };
        if !outcome.is_complete() {
            tracing::warn!(
                theme = %outcome.name,
                "theme install incomplete; partial directory kept"
            );
        }
        Ok(outcome)
    }

    async fn fetch_to(&self, url: &str, dest: &Path) -> Result<AssetReport, FetchError> {
        let http_err = |source| FetchError::Http {
            url: url.to_string(),
            source,
        };
        let response = self.http.get(url).send().await.map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                code: status.as_u16(),
            });
        }
        let body = response.bytes().await.map_err(http_err)?;
        fs::write(dest, &body).map_err(|source| FetchError::Write {
            path: dest.to_path_buf(),
            source,
        })?;

        let report = AssetReport {
            bytes: body.len() as u64,
            sha256: format!("{:x}", Sha256::digest(&body)),
        };
        tracing::debug!(url, dest = %dest.display(), bytes = report.bytes, "asset downloaded");
        Ok(report)
    }
}

/// Build an HTTP client with the download timeout applied.
fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("waaaybar/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
