//! Error types for game data extraction.
//!
//! Most of the crate degrades instead of failing: manifest reads fall back to an
//! empty mapping and per-entry extraction failures end up in a
//! [`BatchReport`](crate::BatchReport). The variants below cover the paths that
//! do surface to the caller (opening an archive, version lookups, install
//! discovery) plus the per-entry failures carried inside a report.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting game data.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem I/O failed (opening a WAD, writing an extracted entry, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or serialize JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the `ltk_wad` crate when mounting or reading a WAD file.
    #[error("WAD error: {0}")]
    Wad(#[from] ltk_wad::WadError),

    /// The version endpoint could not be reached or returned garbage.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested path has no chunk in the archive.
    #[error("Entry not found in archive: {path} ({hash:016x})")]
    EntryNotFound { path: String, hash: u64 },

    /// A worker could not open its own reader for the archive.
    #[error("Archive unavailable: {0}")]
    ArchiveUnavailable(String),

    /// The local `code-metadata.json` exists but has no usable `version`.
    #[error("Invalid game metadata: {0}")]
    InvalidMetadata(Utf8PathBuf),

    /// The version endpoint returned an empty list.
    #[error("Version list is empty")]
    EmptyVersionList,

    /// No League of Legends installation was configured or detected.
    #[error("League of Legends installation not found: {0}")]
    InstallNotFound(Utf8PathBuf),
}
