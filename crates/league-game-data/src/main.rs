use camino::Utf8PathBuf;
use clap::builder::{styling::AnsiColor, Styles};
use clap::ColorChoice;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use commands::{ChampionsArgs, VersionArgs};
use ltk_game_data::install::auto_detect_install;
use ltk_game_data::GameData;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utils::config::{load_config, resolve_game_data_config, Overrides};

mod commands;
mod errors;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Locale to extract (e.g. en_us, zh_cn)
    #[arg(short, long, global = true)]
    region: Option<String>,

    /// League of Legends install root
    #[arg(long, global = true)]
    league_path: Option<Utf8PathBuf>,

    /// Output root for extracted JSON and images
    #[arg(short, long, global = true)]
    output_dir: Option<Utf8PathBuf>,

    /// Directory receiving per-batch failure logs
    #[arg(long, global = true)]
    log_dir: Option<Utf8PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the region's JSON files and champion details
    Manifest,
    /// Extract champion images referenced by the local manifest
    Images,
    /// List champions from the local manifest
    Champions {
        /// Show a single champion by alias
        alias: Option<String>,
    },
    /// Show the installed game version
    Version {
        /// Also look up the newest published version
        #[arg(long)]
        latest: bool,
    },
    /// Manage config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set the League of Legends install root
    SetLeaguePath { path: String },
    /// Set the output root
    SetOutputDir { path: String },
    /// Set the default region
    SetRegion { region: String },
    /// Detect the League of Legends install and save it
    AutoDetect,
    /// Reset the configuration to defaults
    Reset,
}

fn parse_args() -> Result<Args> {
    // Configure colored/styled help output
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Blue.on_default());

    let matches = Args::command()
        .styles(styles)
        .color(ColorChoice::Auto)
        .get_matches();

    Args::from_arg_matches(&matches).map_err(|e| miette::miette!("{}", e))
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "league_game_data=debug,ltk_game_data=debug"
    } else {
        "league_game_data=info,ltk_game_data=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let args = parse_args()?;
    init_logging(args.verbose);

    if let Commands::Config { command } = args.command {
        return match command {
            ConfigCommands::Show => commands::show_config(),
            ConfigCommands::SetLeaguePath { path } => commands::set_league_path(path),
            ConfigCommands::SetOutputDir { path } => commands::set_output_dir(path),
            ConfigCommands::SetRegion { region } => commands::set_region(region),
            ConfigCommands::AutoDetect => commands::auto_detect_league_path(),
            ConfigCommands::Reset => commands::reset_config(),
        };
    }

    let overrides = Overrides {
        league_path: args.league_path,
        output_dir: args.output_dir,
        log_dir: args.log_dir,
        region: args.region,
    };
    let config = resolve_game_data_config(&load_config(), overrides, auto_detect_install);
    tracing::debug!(?config, "resolved configuration");
    let game_data = GameData::new(config);

    match args.command {
        Commands::Manifest => commands::update_manifest(&game_data),
        Commands::Images => commands::update_images(&game_data),
        Commands::Champions { alias } => {
            commands::list_champions(&game_data, ChampionsArgs { alias })
        }
        Commands::Version { latest } => commands::show_version(&game_data, VersionArgs { latest }),
        Commands::Config { .. } => Ok(()),
    }
}
