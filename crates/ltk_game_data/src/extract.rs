//! Parallel per-entry extraction.
//!
//! Every requested path is an independent task on the rayon pool. The request
//! list is split into at most one piece per pool thread and each piece opens its
//! own reader through [`ArchiveSource::open_reader`], reads the
//! entry and writes it to the path produced by the output path function.
//! Outcomes are sent over a channel as soon as they complete; the calling thread
//! drains that channel through the [`collector`](crate::collector), so the batch
//! report reflects completion order and the call returns only once every entry
//! has finished.

use crate::archive::{ArchiveReader, ArchiveSource};
use crate::collector::{collect_and_log, BatchReport};
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use std::sync::mpsc::{self, Sender};

/// Outcome of a single entry: the archive path and where it was written.
pub type EntryOutcome = (String, Result<Utf8PathBuf>);

/// Where a batch logs its failures.
#[derive(Debug, Clone, Copy)]
pub struct BatchLog<'a> {
    pub operation: &'a str,
    pub region: &'a str,
    pub log_dir: &'a Utf8Path,
}

/// Extract every request, sending each outcome to `sink` as it completes.
pub fn extract_entries<S, F>(source: &S, requests: &[String], out_path: &F, sink: Sender<EntryOutcome>)
where
    S: ArchiveSource,
    F: Fn(&str) -> Utf8PathBuf + Sync,
{
    // Mounting a WAD reads its whole table of contents, so keep the number of
    // splits (and readers) close to the number of pool threads.
    let min_len = requests
        .len()
        .div_ceil(rayon::current_num_threads())
        .max(1);

    requests
        .par_iter()
        .with_min_len(min_len)
        .map_init(
            || source.open_reader(),
            |reader, request| {
                let outcome = match reader {
                    Ok(reader) => extract_entry(reader, request, out_path(request.as_str())),
                    Err(e) => Err(Error::ArchiveUnavailable(format!(
                        "{}: {}",
                        source.describe(),
                        e
                    ))),
                };
                (request.clone(), outcome)
            },
        )
        .for_each_with(sink, |sink, outcome| {
            // The receiver only goes away once the collector is done.
            let _ = sink.send(outcome);
        });
}

/// Extract `requests` from `source` and collect the outcomes into a logged report.
pub fn extract_batch<S, F>(
    source: &S,
    requests: &[String],
    out_path: F,
    log: BatchLog<'_>,
) -> BatchReport<Error>
where
    S: ArchiveSource,
    F: Fn(&str) -> Utf8PathBuf + Sync,
{
    tracing::info!(
        "{}: extracting {} entries from {}",
        log.operation,
        requests.len(),
        source.describe()
    );

    let (sender, receiver) = mpsc::channel();
    let out_path = &out_path;

    std::thread::scope(|scope| {
        scope.spawn(move || extract_entries(source, requests, out_path, sender));
        collect_and_log(log.operation, log.region, log.log_dir, receiver)
    })
}

fn extract_entry<R: ArchiveReader>(
    reader: &mut R,
    request: &str,
    destination: Utf8PathBuf,
) -> Result<Utf8PathBuf> {
    let bytes = reader.read_entry(request)?;
    if let Some(parent) = destination.parent() {
        std::fs::create_dir_all(parent.as_std_path())?;
    }
    std::fs::write(destination.as_std_path(), bytes)?;
    Ok(destination)
}
