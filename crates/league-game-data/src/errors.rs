use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("League of Legends installation not found")]
    #[diagnostic(
        code(config::league_path_missing),
        help("Run 'league-game-data config auto-detect' or pass --league-path <install root>")
    )]
    LeaguePathNotSet,

    #[error("Invalid League of Legends installation: {path}")]
    #[diagnostic(
        code(config::invalid_league_path),
        help("The path must be the install root containing LeagueClient/Plugins/rcp-be-lol-game-data (e.g. C:\\Riot Games\\League of Legends)")
    )]
    InvalidLeaguePath { path: Utf8PathBuf },

    #[error("Failed to open WAD archive: {path}")]
    #[diagnostic(
        code(wad::open_failed),
        help("Make sure the client is fully installed and not currently patching")
    )]
    ArchiveOpenFailed {
        path: Utf8PathBuf,
        #[source]
        source: ltk_game_data::Error,
    },

    #[error("Failed to look up the latest game version")]
    #[diagnostic(
        code(version::lookup_failed),
        help("Check your internet connection")
    )]
    VersionLookupFailed {
        #[source]
        source: ltk_game_data::Error,
    },

    #[error("Failed to read the installed game version")]
    #[diagnostic(code(version::metadata_invalid))]
    GameVersionFailed {
        #[source]
        source: ltk_game_data::Error,
    },

    #[error("Failed to save configuration")]
    #[diagnostic(
        code(config::save_failed),
        help("Check file permissions next to the executable")
    )]
    ConfigSaveFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("Champion not found: {alias}")]
    #[diagnostic(
        code(champion::not_found),
        help("Run 'league-game-data manifest' first, or check the alias spelling")
    )]
    ChampionNotFound { alias: String },
}

impl CliError {
    pub fn archive_open_failed(path: Utf8PathBuf, source: ltk_game_data::Error) -> Self {
        Self::ArchiveOpenFailed { path, source }
    }

    pub fn config_save_failed(source: std::io::Error) -> Self {
        Self::ConfigSaveFailed { source }
    }
}
