//! Game version lookups.

use crate::error::{Error, Result};
use camino::Utf8Path;
use serde::Deserialize;

/// Data Dragon endpoint listing published versions, newest first.
pub const VERSIONS_API: &str = "https://ddragon.leagueoflegends.com/api/versions.json";

/// Version reported when the local metadata file is missing.
pub const FALLBACK_GAME_VERSION: &str = "99.99";

#[derive(Debug, Deserialize)]
struct CodeMetadata {
    version: Option<String>,
}

/// Read the installed game version from `<install>/Game/code-metadata.json`.
///
/// Returns `default` when the file does not exist. The build suffix after `+`
/// is dropped (`14.20.621.8534+branch.releases-14-20` -> `14.20.621.8534`).
pub fn game_version(install_root: &Utf8Path, default: &str) -> Result<String> {
    let meta = install_root.join("Game").join("code-metadata.json");
    if !meta.as_std_path().exists() {
        tracing::debug!("{} not found, using version {}", meta, default);
        return Ok(default.to_string());
    }

    let bytes = std::fs::read(meta.as_std_path())?;
    let data: CodeMetadata = serde_json::from_slice(&bytes)?;
    let version = data.version.ok_or(Error::InvalidMetadata(meta))?;
    Ok(strip_build_suffix(&version).to_string())
}

fn strip_build_suffix(version: &str) -> &str {
    version.split('+').next().unwrap_or(version)
}

/// Fetch the newest published version from `url`.
///
/// A single request without retries; any failure is returned to the caller.
pub fn latest_version(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(format!(
            "ltk_game_data/{} (+https://github.com/LeagueToolkit/league-mod)",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    let versions: Vec<String> = client.get(url).send()?.error_for_status()?.json()?;
    versions.into_iter().next().ok_or(Error::EmptyVersionList)
}
