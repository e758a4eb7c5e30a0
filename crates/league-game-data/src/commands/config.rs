use crate::errors::CliError;
use crate::utils::config::{self, AppConfig};
use camino::Utf8PathBuf;
use colored::Colorize;
use ltk_game_data::install::{auto_detect_install, is_valid_install};
use ltk_game_data::normalize_region;
use miette::Result;

fn update_config(apply: impl FnOnce(&mut AppConfig)) -> Result<Utf8PathBuf> {
    let mut cfg = config::load_config();
    apply(&mut cfg);
    Ok(config::save_config(&cfg).map_err(CliError::config_save_failed)?)
}

/// Print a config path entry with status indicator
fn print_path_config(
    name: &str,
    path: Option<&Utf8PathBuf>,
    validator: impl Fn(&Utf8PathBuf) -> bool,
) {
    match path {
        Some(p) => {
            let status = if validator(p) {
                "✓".bright_green()
            } else {
                "✗".bright_red()
            };
            println!("  {} {} {}", format!("{}:", name).bright_white(), p, status);
        }
        None => {
            println!(
                "  {} {}",
                format!("{}:", name).bright_white(),
                "(not set)".bright_yellow()
            );
        }
    }
}

pub fn show_config() -> Result<()> {
    let cfg = config::load_config();
    let config_path = config::default_config_path()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    println!();
    println!("  {} {}", "config_file:".bright_white(), config_path);

    print_path_config("league_path", cfg.league_path.as_ref(), |p| {
        is_valid_install(p)
    });
    print_path_config("output_dir", cfg.output_dir.as_ref(), |p| p.exists());
    print_path_config("log_dir", cfg.log_dir.as_ref(), |p| p.exists());

    match &cfg.region {
        Some(region) => println!("  {} {}", "region:".bright_white(), region),
        None => println!(
            "  {} {}",
            "region:".bright_white(),
            "(not set, en_us)".bright_yellow()
        ),
    }

    println!();
    Ok(())
}

pub fn set_league_path(path: String) -> Result<()> {
    let path = Utf8PathBuf::from(&path);
    if !is_valid_install(&path) {
        eprintln!(
            "  {}",
            "The path must be the League of Legends install root.".bright_yellow()
        );
        eprintln!(
            "  {}",
            "Example: C:\\Riot Games\\League of Legends".bright_yellow()
        );
        eprintln!();
        eprintln!(
            "  {} LeagueClient\\Plugins\\rcp-be-lol-game-data does not exist under it",
            "•".bright_red()
        );

        return Err(CliError::InvalidLeaguePath { path }.into());
    }

    update_config(|cfg| cfg.league_path = Some(path.clone()))?;

    println!(
        "{}",
        "✓ League path set successfully!".bright_green().bold()
    );
    println!();
    println!(
        "  {} {}",
        "Path:".bright_white().bold(),
        path.as_str().bright_green()
    );

    Ok(())
}

pub fn set_output_dir(path: String) -> Result<()> {
    let path = Utf8PathBuf::from(&path);
    update_config(|cfg| cfg.output_dir = Some(path.clone()))?;

    println!(
        "{}",
        "✓ Output directory set successfully!".bright_green().bold()
    );
    println!();
    println!(
        "  {} {}",
        "Path:".bright_white().bold(),
        path.as_str().bright_green()
    );

    Ok(())
}

pub fn set_region(region: String) -> Result<()> {
    let region = region.to_lowercase();
    update_config(|cfg| cfg.region = Some(region.clone()))?;

    println!("{}", "✓ Region set successfully!".bright_green().bold());
    println!();
    println!(
        "  {} {} {}",
        "Region:".bright_white().bold(),
        region.bright_green(),
        format!("(manifest folder: {})", normalize_region(&region)).bright_black()
    );

    Ok(())
}

pub fn auto_detect_league_path() -> Result<()> {
    println!(
        "{}",
        "Searching for League of Legends installation...".bright_cyan()
    );
    println!();

    match auto_detect_install() {
        Some(detected_path) => {
            println!("{}", "✓ Found League of Legends!".bright_green().bold());
            println!();
            println!(
                "  {} {}",
                "Path:".bright_white().bold(),
                detected_path.as_str().bright_green()
            );
            println!();

            update_config(|cfg| cfg.league_path = Some(detected_path.clone()))?;

            println!(
                "{}",
                "✓ Configuration updated successfully!"
                    .bright_green()
                    .bold()
            );
        }
        None => {
            println!(
                "{}",
                "✗ Could not automatically detect League of Legends installation"
                    .bright_red()
                    .bold()
            );
            println!();
            println!(
                "  {}",
                "League of Legends may not be installed, or it's in a non-standard location."
                    .bright_yellow()
            );
            println!();
            println!(
                "  {} Use 'league-game-data config set-league-path <path>' to set the path manually",
                "•".bright_cyan()
            );
            println!(
                "  {} C:\\Riot Games\\League of Legends",
                "Example:".bright_white().bold()
            );
        }
    }

    Ok(())
}

pub fn reset_config() -> Result<()> {
    let config_path = config::save_config(&AppConfig::default())
        .map_err(CliError::config_save_failed)?;

    println!(
        "{}",
        "✓ Configuration reset to defaults".bright_green().bold()
    );
    println!();
    println!("  {} {}", "Config file:".bright_white().bold(), config_path);
    println!();
    println!(
        "  {}",
        "Run 'league-game-data config auto-detect' to find your League installation"
            .bright_cyan()
    );

    Ok(())
}
