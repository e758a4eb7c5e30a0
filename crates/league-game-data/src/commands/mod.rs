mod champions;
mod config;
mod images;
mod manifest;
mod version;

pub use champions::*;
pub use config::*;
pub use images::*;
pub use manifest::*;
pub use version::*;

use crate::println_pad;
use colored::Colorize;
use ltk_game_data::BatchReport;

/// Print one line per batch: extracted count, failure count and where failures were logged.
pub(crate) fn print_batch_report<E: std::error::Error>(report: &BatchReport<E>, log_file: &camino::Utf8Path) {
    if report.is_clean() {
        println_pad!(
            "{} {} {}",
            "✓".bright_green(),
            report.operation.bright_white().bold(),
            format!("{}/{} extracted", report.succeeded, report.total()).bright_green()
        );
    } else {
        println_pad!(
            "{} {} {} {}",
            "✗".bright_yellow(),
            report.operation.bright_white().bold(),
            format!("{}/{} extracted", report.succeeded, report.total()).bright_yellow(),
            format!("({} failed, see {})", report.failures.len(), log_file).bright_red()
        );
    }
}
