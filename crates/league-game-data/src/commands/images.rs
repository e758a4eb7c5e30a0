use super::print_batch_report;
use crate::errors::CliError;
use crate::println_pad;
use crate::utils::config::require_install;
use colored::Colorize;
use ltk_game_data::GameData;
use miette::Result;

pub fn update_images(game_data: &GameData) -> Result<()> {
    require_install(game_data.config())?;

    if game_data.summary().is_empty() {
        println_pad!(
            "{}",
            "No champion summary found, run 'league-game-data manifest' first.".bright_yellow()
        );
        return Ok(());
    }

    let wad_path = game_data.wad_file_default();
    let archive = game_data
        .open_default_archive()
        .map_err(|e| CliError::archive_open_failed(wad_path.clone(), e))?;

    println_pad!(
        "{} {}",
        "🖼  Extracting images from".bright_blue().bold(),
        wad_path.as_str().bright_cyan()
    );
    println!();

    let report = game_data.update_images(&archive);
    print_batch_report(
        &report,
        &report.log_file_path(game_data.log_path(), game_data.region()),
    );

    println!();
    println_pad!(
        "{} {}",
        "Output:".bright_white().bold(),
        game_data.images_dir().as_str().bright_green()
    );

    Ok(())
}
