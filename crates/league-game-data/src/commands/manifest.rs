use super::print_batch_report;
use crate::errors::CliError;
use crate::println_pad;
use crate::utils::config::require_install;
use colored::Colorize;
use ltk_game_data::GameData;
use miette::Result;

pub fn update_manifest(game_data: &GameData) -> Result<()> {
    require_install(game_data.config())?;

    let wad_path = game_data.wad_file_region();
    let archive = game_data
        .open_region_archive()
        .map_err(|e| CliError::archive_open_failed(wad_path.clone(), e))?;

    println_pad!(
        "{} {}",
        "📄 Extracting manifest from".bright_blue().bold(),
        wad_path.as_str().bright_cyan()
    );
    println!();

    let update = game_data.update_manifest(&archive);
    let log_dir = game_data.log_path();
    print_batch_report(
        &update.files,
        &update.files.log_file_path(log_dir, game_data.region()),
    );
    print_batch_report(
        &update.champions,
        &update.champions.log_file_path(log_dir, game_data.region()),
    );

    println!();
    println_pad!(
        "{} {}",
        "Output:".bright_white().bold(),
        game_data.reader().region_dir().as_str().bright_green()
    );

    Ok(())
}
