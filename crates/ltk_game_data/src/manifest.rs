//! Reading previously extracted game-data JSON.
//!
//! Files live under `<manifest_root>/<region>/...`. A read never fails: a
//! missing or malformed file is reported once at warning level and replaced by
//! an empty mapping, so consumers built on top of it produce empty or partial
//! results instead of erroring.
//!
//! [`ManifestReader::load`] exposes the tagged outcome for callers (and tests)
//! that need to tell "loaded" apart from "missing" without looking at logs.

use camino::{Utf8Path, Utf8PathBuf};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Outcome of loading a manifest file.
#[derive(Debug)]
pub enum ManifestFile {
    Loaded(Value),
    Missing {
        path: Utf8PathBuf,
    },
    Unreadable {
        path: Utf8PathBuf,
        error: std::io::Error,
    },
    Invalid {
        path: Utf8PathBuf,
        error: serde_json::Error,
    },
}

impl ManifestFile {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ManifestFile::Loaded(_))
    }

    /// Return the parsed value, emitting the warning for a missing or invalid file.
    pub fn into_loaded(self) -> Option<Value> {
        match self {
            ManifestFile::Loaded(value) => Some(value),
            ManifestFile::Missing { path } => {
                tracing::warn!("Manifest file does not exist: {}", path);
                None
            }
            ManifestFile::Unreadable { path, error } => {
                tracing::warn!("Failed to read manifest file '{}': {}", path, error);
                None
            }
            ManifestFile::Invalid { path, error } => {
                tracing::warn!(
                    "Failed to parse manifest file '{}': {} (line {}, column {})",
                    path,
                    error,
                    error.line(),
                    error.column()
                );
                None
            }
        }
    }

    /// Return the parsed value, or an empty mapping (with a warning) when unavailable.
    pub fn into_value(self) -> Value {
        self.into_loaded()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }
}

/// Reads JSON files extracted for one region.
#[derive(Debug, Clone)]
pub struct ManifestReader {
    root: Utf8PathBuf,
    region: String,
}

impl ManifestReader {
    pub fn new(root: impl Into<Utf8PathBuf>, region: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            region: region.into(),
        }
    }

    /// `<root>/<region>`
    pub fn region_dir(&self) -> Utf8PathBuf {
        self.root.join(&self.region)
    }

    /// Build `<root>/<region>/<segments...>`.
    pub fn path<S: AsRef<str>>(&self, segments: &[S]) -> Utf8PathBuf {
        let mut path = self.region_dir();
        for segment in segments {
            path.push(segment.as_ref());
        }
        path
    }

    /// Load a file without degrading, returning the tagged outcome.
    pub fn load<S: AsRef<str>>(&self, segments: &[S]) -> ManifestFile {
        load_json_file(&self.path(segments))
    }

    /// Read a file, degrading to an empty mapping.
    pub fn read<S: AsRef<str>>(&self, segments: &[S]) -> Value {
        self.load(segments).into_value()
    }

    /// Read a JSON list and deserialize each element, skipping the ones that don't fit `T`.
    pub fn read_list<T: DeserializeOwned, S: AsRef<str>>(&self, segments: &[S]) -> Vec<T> {
        list_of(self.read(segments))
    }

    /// Read a JSON object into `T`, or `None` when the file is unavailable or doesn't fit.
    pub fn read_record<T: DeserializeOwned, S: AsRef<str>>(&self, segments: &[S]) -> Option<T> {
        let value = self.load(segments).into_loaded()?;
        match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(
                    "Unexpected record shape in '{}': {}",
                    self.path(segments),
                    e
                );
                None
            }
        }
    }
}

fn load_json_file(path: &Utf8Path) -> ManifestFile {
    let bytes = match std::fs::read(path.as_std_path()) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return ManifestFile::Missing {
                path: path.to_path_buf(),
            };
        }
        Err(e) => {
            return ManifestFile::Unreadable {
                path: path.to_path_buf(),
                error: e,
            };
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => ManifestFile::Loaded(value),
        Err(error) => ManifestFile::Invalid {
            path: path.to_path_buf(),
            error,
        },
    }
}

/// Deserialize every element of a JSON list into `T`.
///
/// Anything other than a list yields an empty vector; an empty mapping (the
/// degraded read result) does so silently.
pub fn list_of<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Skipping malformed manifest entry: {}", e);
                    None
                }
            })
            .collect(),
        Value::Object(map) if map.is_empty() => Vec::new(),
        other => {
            tracing::warn!("Expected a JSON list, found {}", json_kind(&other));
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChampionSummary;
    use crate::testing::capture_logs;
    use std::fs;
    use tracing::Level;
    use tempfile::tempdir;

    fn reader_in(dir: &std::path::Path) -> ManifestReader {
        let root = Utf8PathBuf::from_path_buf(dir.to_path_buf()).unwrap();
        ManifestReader::new(root, "default")
    }

    #[test]
    fn missing_file_is_tagged_and_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let reader = reader_in(dir.path());

        let loaded = reader.load(&["champion-summary.json"]);
        assert!(matches!(loaded, ManifestFile::Missing { .. }));

        let value = reader.read(&["champion-summary.json"]);
        assert_eq!(value, Value::Object(Map::new()));
    }

    #[test]
    fn missing_file_warns_once() {
        let dir = tempdir().unwrap();
        let reader = reader_in(dir.path());

        let (value, logs) = capture_logs(|| reader.read(&["missing.json"]));
        assert_eq!(value, Value::Object(Map::new()));
        assert_eq!(logs.count(Level::WARN), 1);
        assert!(logs.lines()[0].contains("missing.json"));

        // Loading alone stays quiet until the result is degraded.
        let (_, logs) = capture_logs(|| reader.load(&["missing.json"]));
        assert_eq!(logs.count(Level::WARN), 0);
    }

    #[test]
    fn invalid_json_is_tagged_and_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let reader = reader_in(dir.path());
        fs::create_dir_all(dir.path().join("default")).unwrap();
        fs::write(dir.path().join("default/maps.json"), b"{ not json").unwrap();

        assert!(matches!(
            reader.load(&["maps.json"]),
            ManifestFile::Invalid { .. }
        ));
        assert_eq!(reader.read(&["maps.json"]), Value::Object(Map::new()));
    }

    #[test]
    fn nested_segments_are_joined_under_region() {
        let dir = tempdir().unwrap();
        let reader = reader_in(dir.path());
        fs::create_dir_all(dir.path().join("default/champions")).unwrap();
        fs::write(
            dir.path().join("default/champions/1.json"),
            br#"{"title":"the Dark Child"}"#,
        )
        .unwrap();

        let value = reader.read(&["champions", "1.json"]);
        assert_eq!(value["title"], "the Dark Child");
        assert!(reader.path(&["champions", "1.json"]).ends_with("default/champions/1.json"));
    }

    #[test]
    fn read_list_skips_malformed_entries() {
        let dir = tempdir().unwrap();
        let reader = reader_in(dir.path());
        fs::create_dir_all(dir.path().join("default")).unwrap();
        fs::write(
            dir.path().join("default/champion-summary.json"),
            br#"[{"id":-1,"alias":"None"},{"alias":"NoId"},{"id":1,"alias":"Annie","name":"Annie"}]"#,
        )
        .unwrap();

        let summary: Vec<ChampionSummary> = reader.read_list(&["champion-summary.json"]);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[1].alias, "Annie");
    }

    #[test]
    fn read_list_of_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let reader = reader_in(dir.path());
        let summary: Vec<ChampionSummary> = reader.read_list(&["champion-summary.json"]);
        assert!(summary.is_empty());
    }
}
