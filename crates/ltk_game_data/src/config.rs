//! Explicit configuration for a [`GameData`](crate::GameData) instance.

use crate::region::DEFAULT_LOCALE;
use crate::version::VERSIONS_API;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Where to read from, where to write to and which region to extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDataConfig {
    /// League of Legends install root (contains `LeagueClient` and `Game`).
    pub install_path: Utf8PathBuf,
    /// Output root; JSON goes to `<manifest_path>/<region>`, images to `<manifest_path>/images`.
    pub manifest_path: Utf8PathBuf,
    /// Directory receiving `<operation>.<region>.log` batch logs.
    pub log_path: Utf8PathBuf,
    /// Requested locale, normalized by [`GameData::new`](crate::GameData::new).
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_version_api")]
    pub version_api: String,
}

fn default_region() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_version_api() -> String {
    VERSIONS_API.to_string()
}

impl GameDataConfig {
    /// Config for the default locale with logs under `<manifest_path>/logs`.
    pub fn new(install_path: impl Into<Utf8PathBuf>, manifest_path: impl Into<Utf8PathBuf>) -> Self {
        let manifest_path = manifest_path.into();
        Self {
            install_path: install_path.into(),
            log_path: manifest_path.join("logs"),
            manifest_path,
            region: default_region(),
            version_api: default_version_api(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_log_path(mut self, log_path: impl Into<Utf8PathBuf>) -> Self {
        self.log_path = log_path.into();
        self
    }

    pub fn with_version_api(mut self, url: impl Into<String>) -> Self {
        self.version_api = url.into();
        self
    }
}
