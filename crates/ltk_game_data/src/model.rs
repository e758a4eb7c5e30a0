//! Typed views over the client's game-data JSON.
//!
//! Only the fields this crate consumes are modelled. Everything is lenient:
//! missing keys fall back to defaults so a partially extracted manifest still
//! produces a partial result.

use serde::{Deserialize, Serialize};

/// Summary id the client uses for its "None" placeholder champion.
pub const NO_CHAMPION_ID: i64 = -1;

/// An entry of `champion-summary.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionSummary {
    pub id: i64,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub name: String,
}

impl ChampionSummary {
    /// Whether this is the placeholder entry that must be skipped when iterating champions.
    pub fn is_placeholder(&self) -> bool {
        self.id == NO_CHAMPION_ID
    }
}

/// The parts of `champions/<id>.json` used to locate image assets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionDetail {
    #[serde(default)]
    pub square_portrait_path: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub skins: Vec<Skin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skin {
    pub id: i64,
    #[serde(default)]
    pub load_screen_path: Option<String>,
    /// `None` when the skin has no chroma variants at all.
    #[serde(default)]
    pub chromas: Option<Vec<Chroma>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chroma {
    pub id: i64,
}

/// An entry of `skinlines.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skinline {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// An entry of `maps.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapInfo {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}
