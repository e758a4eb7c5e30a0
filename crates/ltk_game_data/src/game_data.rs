//! The game-data facade: queries over extracted JSON and the extraction flows.
//!
//! # Extraction flows
//!
//! - [`GameData::update_manifest`] extracts the six fixed JSON files of the
//!   region, re-reads the freshly written `champion-summary.json` and then
//!   extracts `champions/<id>.json` for every champion it lists.
//! - [`GameData::update_images`] reads the local summary and champion details
//!   and extracts portraits, splashes, tiles, load screens and chroma images
//!   from the default-region WAD into `<manifest_path>/images`.
//!
//! Both flows absorb per-entry failures into a [`BatchReport`] and append them
//! to `<log_path>/<operation>.<region>.log`.

use crate::archive::WadArchive;
use crate::collector::BatchReport;
use crate::config::GameDataConfig;
use crate::error::{Error, Result};
use crate::extract::{extract_batch, BatchLog};
use crate::hashes;
use crate::install;
use crate::manifest::ManifestReader;
use crate::model::{ChampionDetail, ChampionSummary, MapInfo, Skinline};
use crate::paths::PathRewriter;
use crate::region::{normalize_region, wad_region_name, DEFAULT_REGION};
use crate::version;
use crate::ArchiveSource;
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::collections::BTreeMap;

/// Folder under the manifest root receiving extracted images.
pub const IMAGES_DIR: &str = "images";

/// Archive prefix flattened into `champion-loadscreen` for load-screen art.
pub const LOADSCREEN_PREFIX: &str = "plugins/rcp-be-lol-game-data/global/default/ASSETS/Characters";

/// Output folder replacing [`LOADSCREEN_PREFIX`].
pub const LOADSCREEN_DIR: &str = "champion-loadscreen";

/// Reports of the two batches run by [`GameData::update_manifest`].
#[derive(Debug)]
pub struct ManifestUpdate {
    pub files: BatchReport<Error>,
    pub champions: BatchReport<Error>,
}

impl ManifestUpdate {
    pub fn failure_count(&self) -> usize {
        self.files.failures.len() + self.champions.failures.len()
    }
}

/// Game data for one region.
#[derive(Debug, Clone)]
pub struct GameData {
    config: GameDataConfig,
    region: String,
    reader: ManifestReader,
}

impl GameData {
    pub fn new(config: GameDataConfig) -> Self {
        let region = normalize_region(&config.region);
        let reader = ManifestReader::new(config.manifest_path.clone(), region.clone());
        Self {
            config,
            region,
            reader,
        }
    }

    /// Normalized region token.
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn config(&self) -> &GameDataConfig {
        &self.config
    }

    pub fn reader(&self) -> &ManifestReader {
        &self.reader
    }

    /// `<install>/LeagueClient/Plugins/rcp-be-lol-game-data`
    pub fn data_path(&self) -> Utf8PathBuf {
        install::game_data_plugin_dir(&self.config.install_path)
    }

    /// WAD holding this region's JSON, e.g. `zh_CN-assets.wad`.
    pub fn wad_file_region(&self) -> Utf8PathBuf {
        self.data_path()
            .join(format!("{}-assets.wad", wad_region_name(&self.region)))
    }

    /// WAD holding the shared images, `default-assets.wad`.
    pub fn wad_file_default(&self) -> Utf8PathBuf {
        self.data_path()
            .join(format!("{}-assets.wad", DEFAULT_REGION))
    }

    pub fn open_region_archive(&self) -> Result<WadArchive> {
        self.ensure_install()?;
        WadArchive::open(self.wad_file_region())
    }

    pub fn open_default_archive(&self) -> Result<WadArchive> {
        self.ensure_install()?;
        WadArchive::open(self.wad_file_default())
    }

    fn ensure_install(&self) -> Result<()> {
        if install::is_valid_install(&self.config.install_path) {
            Ok(())
        } else {
            Err(Error::InstallNotFound(self.config.install_path.clone()))
        }
    }

    pub fn summary(&self) -> Vec<ChampionSummary> {
        self.reader.read_list(&["champion-summary.json"])
    }

    pub fn skins(&self) -> Value {
        self.reader.read(&["skins.json"])
    }

    /// Skinline id -> name.
    pub fn skinlines(&self) -> BTreeMap<i64, String> {
        self.reader
            .read_list::<Skinline, _>(&["skinlines.json"])
            .into_iter()
            .map(|line| (line.id, line.name))
            .collect()
    }

    pub fn maps(&self) -> Vec<MapInfo> {
        self.reader.read_list(&["maps.json"])
    }

    pub fn champion_detail(&self, id: i64) -> Option<ChampionDetail> {
        self.reader
            .read_record(&["champions".to_string(), format!("{}.json", id)])
    }

    /// Look up a champion by alias (case-insensitive), returning `(alias, name)`.
    pub fn champion_name(&self, alias: &str) -> Option<(String, String)> {
        self.summary()
            .into_iter()
            .find(|c| c.alias.eq_ignore_ascii_case(alias))
            .map(|c| (c.alias, c.name))
    }

    /// Alias -> title from each champion's detail record.
    pub fn champions_title(&self) -> BTreeMap<String, String> {
        self.summary()
            .into_iter()
            .filter(|c| !c.is_placeholder())
            .filter_map(|c| {
                let detail = self.champion_detail(c.id)?;
                Some((c.alias, detail.title))
            })
            .collect()
    }

    /// Lowercased alias -> display name.
    pub fn champions_alias(&self) -> BTreeMap<String, String> {
        self.summary()
            .into_iter()
            .filter(|c| !c.is_placeholder())
            .map(|c| (c.alias.to_lowercase(), c.name))
            .collect()
    }

    pub fn champion_ids(&self) -> Vec<i64> {
        self.summary().into_iter().map(|c| c.id).collect()
    }

    pub fn map_ids(&self) -> Vec<i64> {
        self.maps().into_iter().map(|m| m.id).collect()
    }

    /// Output path function for this region's JSON files.
    pub fn manifest_rewriter(&self) -> PathRewriter {
        PathRewriter::new(
            hashes::region_data_prefix(&self.region),
            self.reader.region_dir(),
        )
    }

    /// Output path function for image assets.
    pub fn image_rewriter(&self) -> PathRewriter {
        PathRewriter::new(
            hashes::region_data_prefix(DEFAULT_REGION),
            self.images_dir(),
        )
        .with_substitution(LOADSCREEN_PREFIX, LOADSCREEN_DIR)
    }

    /// `<manifest_path>/images`
    pub fn images_dir(&self) -> Utf8PathBuf {
        self.config.manifest_path.join(IMAGES_DIR)
    }

    fn batch_log<'a>(&'a self, operation: &'a str) -> BatchLog<'a> {
        BatchLog {
            operation,
            region: &self.region,
            log_dir: &self.config.log_path,
        }
    }

    /// Extract the region's JSON files, then every champion detail file.
    pub fn update_manifest<S: ArchiveSource>(&self, archive: &S) -> ManifestUpdate {
        let rewriter = self.manifest_rewriter();

        let files = extract_batch(
            archive,
            &hashes::manifest_fixed_hashes(&self.region),
            |path| rewriter.rewrite(path),
            self.batch_log("update_manifest"),
        );

        // The summary was just written by the first batch.
        let summary = self.summary();
        let champions = extract_batch(
            archive,
            &hashes::champion_detail_hashes(&self.region, &summary),
            |path| rewriter.rewrite(path),
            self.batch_log("update_champions"),
        );

        ManifestUpdate { files, champions }
    }

    /// Extract champion images described by the local manifest.
    pub fn update_images<S: ArchiveSource>(&self, archive: &S) -> BatchReport<Error> {
        let summary = self.summary();
        let requests = hashes::image_hashes(&summary, |id| self.champion_detail(id));
        let rewriter = self.image_rewriter();

        extract_batch(
            archive,
            &requests,
            |path| rewriter.rewrite(path),
            self.batch_log("update_images"),
        )
    }

    /// Installed game version, or `default` when the metadata file is missing.
    pub fn game_version(&self, default: &str) -> Result<String> {
        version::game_version(&self.config.install_path, default)
    }

    /// Newest published version. Network failures are returned as is.
    pub fn latest_version(&self) -> Result<String> {
        version::latest_version(&self.config.version_api)
    }

    pub fn log_path(&self) -> &Utf8Path {
        &self.config.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::testing::MemoryArchive;
    use tempfile::tempdir;

    const SUMMARY: &str = r#"[
        {"id":-1,"alias":"None","name":"None"},
        {"id":1,"alias":"Annie","name":"Annie"},
        {"id":266,"alias":"Aatrox","name":"Aatrox"}
    ]"#;

    const ANNIE: &str = r#"{
        "title":"the Dark Child",
        "squarePortraitPath":"/lol-game-data/assets/v1/champion-icons/1.png",
        "skins":[
            {"id":1000,"loadScreenPath":"/lol-game-data/assets/ASSETS/Characters/Annie/Skins/Base/AnnieLoadScreen.jpg"},
            {"id":1001,"loadScreenPath":"/lol-game-data/assets/ASSETS/Characters/Annie/Skins/Skin01/AnnieLoadScreen_1.jpg",
             "chromas":[{"id":1002}]}
        ]
    }"#;

    fn setup(region: &str) -> (tempfile::TempDir, GameData) {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let config = GameDataConfig::new(root.join("lol"), root.join("manifest")).with_region(region);
        (dir, GameData::new(config))
    }

    fn write(game_data: &GameData, segments: &[&str], contents: &str) {
        let path = game_data.reader().path(segments);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    fn v1(region: &str, tail: &str) -> String {
        format!("plugins/rcp-be-lol-game-data/global/{}/v1/{}", region, tail)
    }

    #[test]
    fn region_is_normalized() {
        let (_dir, game_data) = setup("EN_US");
        assert_eq!(game_data.region(), "default");
        assert!(game_data.wad_file_region().ends_with("default-assets.wad"));

        let (_dir, game_data) = setup("zh_cn");
        assert!(game_data.wad_file_region().ends_with("zh_CN-assets.wad"));
        assert!(game_data.wad_file_default().ends_with("default-assets.wad"));
    }

    #[test]
    fn queries_on_empty_manifest_are_empty() {
        let (_dir, game_data) = setup("en_us");
        assert!(game_data.summary().is_empty());
        assert!(game_data.skinlines().is_empty());
        assert!(game_data.champion_ids().is_empty());
        assert!(game_data.champions_title().is_empty());
        assert_eq!(game_data.champion_name("annie"), None);
        assert_eq!(game_data.champion_detail(1), None);
    }

    #[test]
    fn champion_queries() {
        let (_dir, game_data) = setup("en_us");
        write(&game_data, &["champion-summary.json"], SUMMARY);
        write(&game_data, &["champions", "1.json"], ANNIE);
        write(
            &game_data,
            &["skinlines.json"],
            r#"[{"id":0,"name":""},{"id":1,"name":"Pool Party"}]"#,
        );
        write(&game_data, &["maps.json"], r#"[{"id":11,"name":"Summoner's Rift"},{"id":12}]"#);

        assert_eq!(game_data.champion_ids(), vec![-1, 1, 266]);
        assert_eq!(
            game_data.champion_name("ANNIE"),
            Some(("Annie".to_string(), "Annie".to_string()))
        );

        // Aatrox has no detail file and -1 is skipped.
        let titles = game_data.champions_title();
        assert_eq!(titles.len(), 1);
        assert_eq!(titles["Annie"], "the Dark Child");

        let aliases = game_data.champions_alias();
        assert_eq!(aliases.get("aatrox").map(String::as_str), Some("Aatrox"));
        assert!(!aliases.contains_key("none"));

        assert_eq!(game_data.skinlines()[&1], "Pool Party");
        assert_eq!(game_data.map_ids(), vec![11, 12]);
    }

    #[test]
    fn update_manifest_extracts_files_then_champions() {
        let (dir, game_data) = setup("zh_cn");
        let archive = MemoryArchive::new([
            (v1("zh_cn", "champion-summary.json"), SUMMARY.as_bytes().to_vec()),
            (v1("zh_cn", "skinlines.json"), b"[]".to_vec()),
            (v1("zh_cn", "skins.json"), b"{}".to_vec()),
            (v1("zh_cn", "maps.json"), b"[]".to_vec()),
            (v1("zh_cn", "items.json"), b"[]".to_vec()),
            (v1("zh_cn", "universes.json"), b"[]".to_vec()),
            (v1("zh_cn", "champions/-1.json"), b"{}".to_vec()),
            (v1("zh_cn", "champions/1.json"), ANNIE.as_bytes().to_vec()),
        ]);

        let update = game_data.update_manifest(&archive);

        assert!(update.files.is_clean());
        assert_eq!(update.files.succeeded, 6);
        assert_eq!(update.champions.succeeded, 2);
        assert_eq!(update.champions.failures.len(), 1);
        assert_eq!(update.champions.failures[0].descriptor, v1("zh_cn", "champions/266.json"));
        assert_eq!(update.failure_count(), 1);

        let region_dir = dir.path().join("manifest").join("zh_cn");
        assert!(region_dir.join("universes.json").exists());
        assert!(region_dir.join("champions").join("1.json").exists());
        assert_eq!(game_data.champion_detail(1).unwrap().title, "the Dark Child");

        let log = std::fs::read_to_string(
            dir.path().join("manifest").join("logs").join("update_champions.zh_cn.log"),
        )
        .unwrap();
        assert_eq!(log.lines().count(), 1);
    }

    #[test]
    fn update_images_writes_flattened_paths() {
        let (dir, game_data) = setup("en_us");
        write(&game_data, &["champion-summary.json"], SUMMARY);
        write(&game_data, &["champions", "1.json"], ANNIE);

        let head = "plugins/rcp-be-lol-game-data/global/default";
        let archive = MemoryArchive::new([
            (format!("{}/v1/champion-icons/1.png", head), b"png".to_vec()),
            (format!("{}/v1/champion-splashes/1/1000.jpg", head), b"jpg".to_vec()),
            (
                format!("{}/ASSETS/Characters/Annie/Skins/Base/AnnieLoadScreen.jpg", head),
                b"jpg".to_vec(),
            ),
            (format!("{}/v1/champion-chroma-images/1/1001/1002.jpg", head), b"jpg".to_vec()),
        ]);

        let report = game_data.update_images(&archive);

        // 1 portrait + 4 for skin 1000 + 6 for skin 1001 (one chroma).
        assert_eq!(report.total(), 11);
        assert_eq!(report.succeeded, 4);

        let images = dir.path().join("manifest").join("images");
        assert!(images.join("champion-icons").join("1.png").exists());
        assert!(images
            .join("champion-splashes")
            .join("1")
            .join("1000.jpg")
            .exists());
        assert!(images
            .join("champion-loadscreen")
            .join("Annie")
            .join("Skins")
            .join("Base")
            .join("AnnieLoadScreen.jpg")
            .exists());
        assert!(images
            .join("champion-chroma-images")
            .join("1")
            .join("1001")
            .join("1002.jpg")
            .exists());

        let log = std::fs::read_to_string(
            dir.path().join("manifest").join("logs").join("update_images.default.log"),
        )
        .unwrap();
        assert_eq!(log.lines().count(), 7);
    }

    #[test]
    fn archives_require_an_install() {
        let (_dir, game_data) = setup("en_us");
        assert!(matches!(
            game_data.open_region_archive(),
            Err(Error::InstallNotFound(_))
        ));
    }
}
