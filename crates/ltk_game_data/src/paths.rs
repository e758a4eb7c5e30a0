//! Mapping archive paths to on-disk destinations.
//!
//! Archive paths always use `/` and carry a long plugin prefix such as
//! `plugins/rcp-be-lol-game-data/global/default/v1/`. Extraction strips that
//! prefix and mirrors the rest of the path under an output directory.

use camino::{Utf8Path, Utf8PathBuf};

/// Normalize a relative archive path into host path components.
///
/// Both `/` and `\` separate components, empty and `.` components are dropped
/// and `..` pops the previous component (never above the start).
pub fn normalize_relative(path: &str) -> Utf8PathBuf {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split(['/', '\\']) {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Strip `prefix` from `source` and join the remainder onto `root`.
///
/// A source that doesn't start with `prefix` is joined as a whole.
pub fn rewrite(source: &str, prefix: &str, root: &Utf8Path) -> Utf8PathBuf {
    let tail = source.strip_prefix(prefix).unwrap_or(source);
    root.join(normalize_relative(tail))
}

/// A reusable output path function.
///
/// Substitutions are tried first, in order, against the full archive path; a
/// match replaces that leading part with an output folder. Every other path
/// goes through [`rewrite`] with the configured prefix.
#[derive(Debug, Clone)]
pub struct PathRewriter {
    prefix: String,
    root: Utf8PathBuf,
    substitutions: Vec<(String, String)>,
}

impl PathRewriter {
    pub fn new(prefix: impl Into<String>, root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            root: root.into(),
            substitutions: Vec::new(),
        }
    }

    /// Map archive paths starting with `from` to `<root>/<to>/...`.
    pub fn with_substitution(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.substitutions.push((from.into(), to.into()));
        self
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn rewrite(&self, source: &str) -> Utf8PathBuf {
        let substituted = self.substitutions.iter().find_map(|(from, to)| {
            source
                .strip_prefix(from.as_str())
                .map(|rest| format!("{}/{}", to, rest))
        });

        match substituted {
            Some(tail) => rewrite(&tail, "", &self.root),
            None => {
                if !source.starts_with(self.prefix.as_str()) {
                    tracing::warn!(
                        "Archive path '{}' does not start with '{}', mirroring it as is",
                        source,
                        self.prefix
                    );
                }
                rewrite(source, &self.prefix, &self.root)
            }
        }
    }
}
