//! Extracts League of Legends client game data from WAD archives.
//!
//! The client ships its champion, skin and map data as JSON inside
//! `LeagueClient/Plugins/rcp-be-lol-game-data/<region>-assets.wad`, next to the
//! images those files reference. This crate mirrors both into a directory tree:
//!
//! - `<manifest>/<region>/*.json` and `<manifest>/<region>/champions/<id>.json`
//! - `<manifest>/images/...` (portraits, splashes, tiles, load screens, chromas)
//!
//! WAD decoding is done by `ltk_wad`; this crate decides *what* to extract and
//! *where* to put it, runs the extraction in parallel and reports per-entry
//! failures without aborting the batch.
//!
//! # Example
//!
//! ```no_run
//! use ltk_game_data::{GameData, GameDataConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GameDataConfig::new("C:/Riot Games/League of Legends", "manifest")
//!     .with_region("zh_cn");
//! let game_data = GameData::new(config);
//!
//! let update = game_data.update_manifest(&game_data.open_region_archive()?);
//! println!("{} manifest entries failed", update.failure_count());
//!
//! let report = game_data.update_images(&game_data.open_default_archive()?);
//! println!("{} of {} images extracted", report.succeeded, report.total());
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod collector;
pub mod config;
pub mod error;
pub mod extract;
pub mod game_data;
pub mod hashes;
pub mod install;
pub mod manifest;
pub mod model;
pub mod paths;
pub mod region;
pub mod version;

#[cfg(test)]
pub(crate) mod testing;

pub use archive::{ArchiveReader, ArchiveSource, WadArchive};
pub use collector::{collect, collect_and_log, BatchFailure, BatchReport};
pub use config::GameDataConfig;
pub use error::{Error, Result};
pub use game_data::{GameData, ManifestUpdate};
pub use manifest::{ManifestFile, ManifestReader};
pub use model::{ChampionDetail, ChampionSummary, Chroma, MapInfo, Skin, Skinline};
pub use paths::{rewrite, PathRewriter};
pub use region::normalize_region;
