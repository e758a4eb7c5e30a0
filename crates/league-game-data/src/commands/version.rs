use crate::errors::CliError;
use crate::println_pad;
use colored::Colorize;
use ltk_game_data::version::FALLBACK_GAME_VERSION;
use ltk_game_data::GameData;
use miette::Result;

pub struct VersionArgs {
    pub latest: bool,
}

pub fn show_version(game_data: &GameData, args: VersionArgs) -> Result<()> {
    let installed = game_data
        .game_version(FALLBACK_GAME_VERSION)
        .map_err(|source| CliError::GameVersionFailed { source })?;
    println_pad!(
        "{} {}",
        "Installed:".bright_white().bold(),
        installed.bright_green()
    );

    if args.latest {
        let latest = game_data
            .latest_version()
            .map_err(|source| CliError::VersionLookupFailed { source })?;
        println_pad!("{} {}", "Latest:".bright_white().bold(), latest.bright_cyan());
    }

    Ok(())
}
