//! Building the lists of archive paths requested for extraction.

use crate::model::{ChampionDetail, ChampionSummary};

/// Root of the game-data plugin inside the WADs.
pub const GAME_DATA_ROOT: &str = "plugins/rcp-be-lol-game-data/global";

/// Prefix the client uses for asset URLs inside its JSON (`squarePortraitPath`, ...).
pub const PUBLIC_ASSET_PREFIX: &str = "/lol-game-data/assets/";

/// JSON files extracted for every region, in request order.
pub const MANIFEST_FILES: [&str; 6] = [
    "champion-summary.json",
    "skinlines.json",
    "skins.json",
    "maps.json",
    "items.json",
    "universes.json",
];

/// `plugins/rcp-be-lol-game-data/global/<region>`
pub fn region_root(region: &str) -> String {
    format!("{}/{}", GAME_DATA_ROOT, region)
}

/// `plugins/rcp-be-lol-game-data/global/<region>/v1/`, the prefix stripped from manifest paths.
pub fn region_data_prefix(region: &str) -> String {
    format!("{}/v1/", region_root(region))
}

/// The six fixed JSON files for `region`.
pub fn manifest_fixed_hashes(region: &str) -> Vec<String> {
    let prefix = region_data_prefix(region);
    MANIFEST_FILES
        .iter()
        .map(|file| format!("{}{}", prefix, file))
        .collect()
}

/// One `champions/<id>.json` path per summary entry, in summary order.
pub fn champion_detail_hashes(region: &str, summary: &[ChampionSummary]) -> Vec<String> {
    let prefix = region_data_prefix(region);
    summary
        .iter()
        .map(|champion| format!("{}champions/{}.json", prefix, champion.id))
        .collect()
}

/// The full manifest request list: fixed files first, then champion details.
pub fn manifest_hashes(region: &str, summary: &[ChampionSummary]) -> Vec<String> {
    let mut hashes = manifest_fixed_hashes(region);
    hashes.extend(champion_detail_hashes(region, summary));
    hashes
}

/// Re-root a public asset URL under the default region's archive root.
///
/// `/lol-game-data/assets/v1/champion-icons/1.png` ->
/// `plugins/rcp-be-lol-game-data/global/default/v1/champion-icons/1.png`
pub fn asset_hash_path(public_path: &str) -> String {
    format!(
        "{}/{}",
        region_root(crate::region::DEFAULT_REGION),
        public_path.replace(PUBLIC_ASSET_PREFIX, "")
    )
}

/// Image paths for every champion in `summary`.
///
/// Per champion: portrait, then for each skin splash, uncentered splash, tile
/// and load screen, followed by the chroma preview and one image per chroma
/// when the skin has chromas. The placeholder champion is skipped and so is
/// any champion whose detail record `detail_lookup` cannot provide.
pub fn image_hashes<F>(summary: &[ChampionSummary], mut detail_lookup: F) -> Vec<String>
where
    F: FnMut(i64) -> Option<ChampionDetail>,
{
    let head = region_root(crate::region::DEFAULT_REGION);
    let mut hashes = Vec::new();

    for champion in summary.iter().filter(|c| !c.is_placeholder()) {
        let cid = champion.id;
        let Some(detail) = detail_lookup(cid) else {
            tracing::debug!("No detail record for champion {}, skipping images", cid);
            continue;
        };

        if let Some(portrait) = &detail.square_portrait_path {
            hashes.push(asset_hash_path(portrait));
        }

        for skin in &detail.skins {
            let sid = skin.id;
            hashes.push(format!("{}/v1/champion-splashes/{}/{}.jpg", head, cid, sid));
            hashes.push(format!(
                "{}/v1/champion-splashes/uncentered/{}/{}.jpg",
                head, cid, sid
            ));
            hashes.push(format!("{}/v1/champion-tiles/{}/{}.jpg", head, cid, sid));
            if let Some(load_screen) = &skin.load_screen_path {
                hashes.push(asset_hash_path(load_screen));
            }

            if let Some(chromas) = &skin.chromas {
                hashes.push(format!("{}/v1/chromaPath/{}/{}.jpg", head, cid, sid));
                for chroma in chromas {
                    hashes.push(format!(
                        "{}/v1/champion-chroma-images/{}/{}/{}.jpg",
                        head, cid, sid, chroma.id
                    ));
                }
            }
        }
    }

    hashes
}
