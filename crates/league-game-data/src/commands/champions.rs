use crate::errors::CliError;
use crate::println_pad;
use colored::Colorize;
use ltk_game_data::GameData;
use miette::Result;

pub struct ChampionsArgs {
    pub alias: Option<String>,
}

pub fn list_champions(game_data: &GameData, args: ChampionsArgs) -> Result<()> {
    if let Some(alias) = args.alias {
        return show_champion(game_data, &alias);
    }

    let names = game_data.champions_alias();
    if names.is_empty() {
        println_pad!(
            "{}",
            "No champions found, run 'league-game-data manifest' first.".bright_yellow()
        );
        return Ok(());
    }

    let titles = game_data.champions_title();
    println_pad!(
        "{} {}",
        "🏆 Champions:".bright_blue().bold(),
        names.len().to_string().bright_white()
    );
    println!();
    for (alias, name) in &names {
        let title = titles
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(alias))
            .map(|(_, title)| title.as_str())
            .unwrap_or_default();
        println_pad!("  {} {}", name.bright_cyan(), title.bright_black());
    }

    Ok(())
}

fn show_champion(game_data: &GameData, alias: &str) -> Result<()> {
    let (alias, name) = game_data
        .champion_name(alias)
        .ok_or_else(|| CliError::ChampionNotFound {
            alias: alias.to_string(),
        })?;
    let id = game_data
        .summary()
        .into_iter()
        .find(|c| c.alias == alias)
        .map(|c| c.id)
        .ok_or_else(|| CliError::ChampionNotFound {
            alias: alias.clone(),
        })?;

    println_pad!("{} {}", "Name:".bright_white().bold(), name.bright_cyan().bold());
    println_pad!("{} {}", "Alias:".bright_white().bold(), alias);
    println_pad!("{} {}", "Id:".bright_white().bold(), id);

    match game_data.champion_detail(id) {
        Some(detail) => {
            println_pad!("{} {}", "Title:".bright_white().bold(), detail.title);
            let chromas: usize = detail
                .skins
                .iter()
                .map(|skin| skin.chromas.as_ref().map_or(0, Vec::len))
                .sum();
            println_pad!(
                "{} {} ({} chromas)",
                "Skins:".bright_white().bold(),
                detail.skins.len(),
                chromas
            );
        }
        None => println_pad!(
            "{}",
            "No detail file extracted for this champion.".bright_yellow()
        ),
    }

    Ok(())
}
