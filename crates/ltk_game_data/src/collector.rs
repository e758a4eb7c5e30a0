//! Collecting the outcomes of a bulk extraction.
//!
//! Entries are extracted independently; a failing entry never aborts the rest
//! of the batch. [`collect`] drains outcomes in whatever order they complete,
//! logs each one and returns a [`BatchReport`]. Persisting the failures is a
//! separate step ([`BatchReport::append_to_log`]) so the report can be
//! inspected without touching the filesystem.
//!
//! Log files are named `<operation>.<region>.log` and only ever appended to, so
//! repeated runs accumulate history.

use camino::{Utf8Path, Utf8PathBuf};
use std::error::Error as StdError;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};

/// A single failed entry.
#[derive(Debug)]
pub struct BatchFailure<E> {
    /// What was being extracted (the archive path for WAD extraction).
    pub descriptor: String,
    pub error: E,
}

/// Summary of a drained batch.
#[derive(Debug)]
pub struct BatchReport<E> {
    pub operation: String,
    pub succeeded: usize,
    pub failures: Vec<BatchFailure<E>>,
}

impl<E: StdError> BatchReport<E> {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            succeeded: 0,
            failures: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// `<log_dir>/<operation>.<region>.log`
    pub fn log_file_path(&self, log_dir: &Utf8Path, region: &str) -> Utf8PathBuf {
        log_dir.join(format!("{}.{}.log", self.operation, region))
    }

    /// Append one `("<descriptor>", "<error>")` line per failure to the batch log.
    pub fn append_to_log(&self, log_dir: &Utf8Path, region: &str) -> io::Result<Utf8PathBuf> {
        std::fs::create_dir_all(log_dir.as_std_path())?;
        let path = self.log_file_path(log_dir, region);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_std_path())?;
        let mut writer = BufWriter::new(file);
        for failure in &self.failures {
            writeln!(
                writer,
                "({:?}, {:?})",
                failure.descriptor,
                error_chain(&failure.error)
            )?;
        }
        writer.flush()?;

        Ok(path)
    }
}

/// Render an error followed by all of its sources, separated by `: `.
///
/// A source whose text the rendering already ends with (wrappers that print
/// their inner error) is not repeated.
pub fn error_chain(error: &dyn StdError) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}

/// Drain `outcomes` in arrival order into a report.
///
/// Each failure is logged at warn level with its source chain, each success at
/// debug level; a single error-level line lists every failure once the batch
/// is drained.
pub fn collect<T, E, I>(operation: &str, outcomes: I) -> BatchReport<E>
where
    E: StdError,
    I: IntoIterator<Item = (String, Result<T, E>)>,
{
    let mut report = BatchReport::new(operation);

    for (descriptor, outcome) in outcomes {
        match outcome {
            Ok(_) => {
                tracing::debug!("{}, done: {}", operation, descriptor);
                report.succeeded += 1;
            }
            Err(error) => {
                tracing::warn!(
                    "{}, failed: {}: {}",
                    operation,
                    descriptor,
                    error_chain(&error)
                );
                report.failures.push(BatchFailure { descriptor, error });
            }
        }
    }

    if !report.is_clean() {
        tracing::error!(
            "{}, {} of {} entries failed: [{}]",
            operation,
            report.failures.len(),
            report.total(),
            report
                .failures
                .iter()
                .map(|f| format!("({}, {})", f.descriptor, f.error))
                .collect::<Vec<_>>()
                .join(", ")
        );
    } else {
        tracing::info!("{}, {} entries done", operation, report.succeeded);
    }

    report
}

/// [`collect`] followed by [`BatchReport::append_to_log`]; never fails.
///
/// A failure to write the log is reported at error level and otherwise ignored.
pub fn collect_and_log<T, E, I>(
    operation: &str,
    region: &str,
    log_dir: &Utf8Path,
    outcomes: I,
) -> BatchReport<E>
where
    E: StdError,
    I: IntoIterator<Item = (String, Result<T, E>)>,
{
    let report = collect(operation, outcomes);
    if let Err(e) = report.append_to_log(log_dir, region) {
        tracing::error!(
            "Failed to write {}: {}",
            report.log_file_path(log_dir, region),
            e
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::capture_logs;
    use std::fmt;
    use tempfile::tempdir;
    use tracing::Level;

    #[derive(Debug)]
    struct Outer(io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "write failed")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    fn outcomes(n: usize, failing: &[usize]) -> Vec<(String, Result<(), Outer>)> {
        (0..n)
            .map(|i| {
                let outcome = if failing.contains(&i) {
                    Err(Outer(io::Error::other(format!("disk full {}", i))))
                } else {
                    Ok(())
                };
                (format!("entry/{}.json", i), outcome)
            })
            .collect()
    }

    fn utf8(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn counts_failures_without_aborting() {
        let report = collect("update_images", outcomes(5, &[1, 3]));
        assert_eq!(report.succeeded, 3);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].descriptor, "entry/1.json");
        assert_eq!(report.failures[1].descriptor, "entry/3.json");
        assert_eq!(report.total(), 5);
    }

    #[test]
    fn logs_each_outcome_and_one_aggregate_error() {
        let (report, logs) = capture_logs(|| collect("update_images", outcomes(6, &[0, 2, 5])));
        assert_eq!(report.failures.len(), 3);

        assert_eq!(logs.count(Level::WARN), 3);
        assert_eq!(logs.count(Level::DEBUG), 3);
        assert_eq!(logs.count(Level::ERROR), 1);
        assert_eq!(logs.count(Level::INFO), 0);

        let aggregate = logs
            .lines()
            .iter()
            .find(|line| line.trim_start().starts_with("ERROR"))
            .unwrap();
        assert!(aggregate.contains("3 of 6"));
        assert!(aggregate.contains("entry/5.json"));
    }

    #[test]
    fn clean_batch_logs_no_error() {
        let (_, logs) = capture_logs(|| collect("update_manifest", outcomes(4, &[])));
        assert_eq!(logs.count(Level::WARN), 0);
        assert_eq!(logs.count(Level::ERROR), 0);
        assert_eq!(logs.count(Level::INFO), 1);
    }

    #[test]
    fn renders_source_chain() {
        let error = Outer(io::Error::other("disk full"));
        assert_eq!(error_chain(&error), "write failed: disk full");
    }

    #[test]
    fn wrapped_source_is_not_repeated() {
        let error = crate::Error::Io(io::Error::other("disk full"));
        assert_eq!(error_chain(&error), "IO error: disk full");

        let error = crate::Error::ArchiveUnavailable("default-assets.wad".to_string());
        assert_eq!(error_chain(&error), "Archive unavailable: default-assets.wad");
    }

    #[test]
    fn log_is_appended_across_runs() {
        let dir = tempdir().unwrap();
        let log_dir = utf8(&dir).join("logs");

        let first = collect_and_log("update_manifest", "default", &log_dir, outcomes(4, &[0, 2]));
        assert_eq!(first.failures.len(), 2);

        let log_path = log_dir.join("update_manifest.default.log");
        let content = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert_eq!(
            content.lines().next().unwrap(),
            r#"("entry/0.json", "write failed: disk full 0")"#
        );

        collect_and_log("update_manifest", "default", &log_dir, outcomes(3, &[1]));
        let content = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn clean_batch_appends_nothing() {
        let dir = tempdir().unwrap();
        let log_dir = utf8(&dir);

        let report = collect_and_log("update_images", "zh_cn", &log_dir, outcomes(3, &[]));
        assert!(report.is_clean());

        let content = std::fs::read_to_string(log_dir.join("update_images.zh_cn.log")).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn unwritable_log_dir_is_absorbed() {
        let dir = tempdir().unwrap();
        let blocker = utf8(&dir).join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        let report = collect_and_log("update_images", "default", &blocker, outcomes(2, &[0]));
        assert_eq!(report.failures.len(), 1);
    }
}
