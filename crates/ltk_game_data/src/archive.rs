//! Archive access for extraction.
//!
//! An [`ArchiveSource`] hands out one [`ArchiveReader`] per worker so entries
//! can be read in parallel without sharing a file cursor. [`WadArchive`] is the
//! implementation backed by `ltk_wad`.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use ltk_wad::Wad;
use std::fs::File;
use xxhash_rust::xxh64::xxh64;

/// Reads entries by their archive path.
pub trait ArchiveReader {
    fn read_entry(&mut self, path: &str) -> Result<Vec<u8>>;
}

/// Something that can open independent readers over the same archive.
pub trait ArchiveSource: Sync {
    type Reader: ArchiveReader;

    fn open_reader(&self) -> Result<Self::Reader>;

    /// Human readable name used in log lines.
    fn describe(&self) -> String;
}

/// Compute the WAD chunk path hash (XXH64 of the lowercased path, seed 0).
pub fn path_hash(path: &str) -> u64 {
    xxh64(path.to_lowercase().as_bytes(), 0)
}

/// A `.wad` / `.wad.client` file on disk.
#[derive(Debug, Clone)]
pub struct WadArchive {
    path: Utf8PathBuf,
}

impl WadArchive {
    /// Mount the WAD once to make sure it is usable before a batch starts.
    pub fn open(path: impl Into<Utf8PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::open(path.as_std_path())?;
        let wad = Wad::mount(file)?;
        tracing::info!("Mounted WAD {} ({} chunks)", path, wad.chunks().iter().count());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl ArchiveSource for WadArchive {
    type Reader = WadReader;

    fn open_reader(&self) -> Result<WadReader> {
        let file = File::open(self.path.as_std_path())?;
        let wad = Wad::mount(file)?;
        Ok(WadReader { wad })
    }

    fn describe(&self) -> String {
        self.path.to_string()
    }
}

/// A mounted WAD owned by a single worker.
pub struct WadReader {
    wad: Wad<File>,
}

impl ArchiveReader for WadReader {
    fn read_entry(&mut self, path: &str) -> Result<Vec<u8>> {
        let hash = path_hash(path);
        let chunk = *self
            .wad
            .chunks()
            .get(hash)
            .ok_or_else(|| Error::EntryNotFound {
                path: path.to_string(),
                hash,
            })?;

        Ok(self.wad.load_chunk_decompressed(&chunk)?.to_vec())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory archive used by extraction tests.

    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone, Default)]
    pub struct MemoryArchive {
        entries: Arc<HashMap<u64, Vec<u8>>>,
        unavailable: bool,
        opened: Arc<AtomicUsize>,
    }

    impl MemoryArchive {
        pub fn new<P: AsRef<str>, B: Into<Vec<u8>>>(entries: impl IntoIterator<Item = (P, B)>) -> Self {
            Self {
                entries: Arc::new(
                    entries
                        .into_iter()
                        .map(|(p, b)| (path_hash(p.as_ref()), b.into()))
                        .collect(),
                ),
                unavailable: false,
                opened: Arc::default(),
            }
        }

        /// How many readers have been opened so far.
        pub fn open_count(&self) -> usize {
            self.opened.load(Ordering::SeqCst)
        }

        pub fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }
    }

    pub struct MemoryReader(Arc<HashMap<u64, Vec<u8>>>);

    impl ArchiveReader for MemoryReader {
        fn read_entry(&mut self, path: &str) -> Result<Vec<u8>> {
            let hash = path_hash(path);
            self.0
                .get(&hash)
                .cloned()
                .ok_or_else(|| Error::EntryNotFound {
                    path: path.to_string(),
                    hash,
                })
        }
    }

    impl ArchiveSource for MemoryArchive {
        type Reader = MemoryReader;

        fn open_reader(&self) -> Result<MemoryReader> {
            self.opened.fetch_add(1, Ordering::SeqCst);
            if self.unavailable {
                return Err(Error::Io(std::io::Error::other("archive is gone")));
            }
            Ok(MemoryReader(self.entries.clone()))
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }
}
