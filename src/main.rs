mod display;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use display::output::{
    display_champion, display_champions, display_error, display_info, display_items,
    display_masteries, display_profile_icons, display_success, display_summoner_spells,
    display_version,
};
use indicatif::{ProgressBar, ProgressStyle};
use league_dragon::{Config, DataDragon, Dataset, Region};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "League Dragon")]
#[command(about = "Browse Data Dragon reference data through a read-through cache", long_about = None)]
struct Args {
    /// Region used to resolve the current version and locale (default: na1)
    #[arg(short, long)]
    region: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the resolved version and locale
    Version,
    /// List all champions
    Champions,
    /// Show the full record of one champion (by id, e.g. MonkeyKing)
    Champion { name: String },
    /// List all items
    Items,
    /// List legacy runes (pinned to 7.23.1)
    Runes,
    /// List legacy masteries (pinned to 7.23.1)
    Masteries,
    /// List profile icons
    ProfileIcons,
    /// List summoner spells
    SummonerSpells,
    /// Fetch every dataset once, then clear the caches
    Warm,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(region) = args.region {
        config.region = region.parse::<Region>()?;
    }

    display_info(&format!("Resolving Data Dragon version for region {}", config.region));
    let dragon = DataDragon::from_config(&config).context("failed to build HTTP client")?;

    match args.command {
        Command::Version => display_version(dragon.version(), dragon.language()),
        Command::Champions => {
            let champions = dragon.get_champions().context("failed to fetch champions")?;
            display_champions(&champions);
        }
        Command::Champion { name } => {
            let champion = dragon
                .get_champion(&name)
                .with_context(|| format!("failed to fetch champion {}", name))?;
            let icon = dragon.image_url(&champion.image).ok();
            display_champion(&champion, icon.as_deref());
        }
        Command::Items => {
            let items = dragon.get_items().context("failed to fetch items")?;
            display_items("🛡️ ITEMS", &items);
        }
        Command::Runes => {
            let runes = dragon.get_runes().context("failed to fetch runes")?;
            display_items("🔮 RUNES", &runes);
        }
        Command::Masteries => {
            let masteries = dragon.get_masteries().context("failed to fetch masteries")?;
            display_masteries(&masteries);
        }
        Command::ProfileIcons => {
            let icons = dragon.get_profile_icons().context("failed to fetch profile icons")?;
            display_profile_icons(&icons);
        }
        Command::SummonerSpells => {
            let spells = dragon
                .get_summoner_spells()
                .context("failed to fetch summoner spells")?;
            display_summoner_spells(&spells);
        }
        Command::Warm => warm(&dragon)?,
    }

    Ok(())
}

fn warm(dragon: &DataDragon) -> Result<()> {
    let pb = ProgressBar::new(Dataset::ALL.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}") {
        pb.set_style(style);
    }

    let mut counts = Vec::with_capacity(Dataset::ALL.len());
    for dataset in Dataset::ALL {
        pb.set_message(dataset.name());
        let count = match dataset {
            Dataset::Champions => dragon.get_champions()?.len(),
            Dataset::Items => dragon.get_items()?.len(),
            Dataset::ProfileIcons => dragon.get_profile_icons()?.len(),
            Dataset::Masteries => dragon.get_masteries()?.len(),
            Dataset::Runes => dragon.get_runes()?.len(),
            Dataset::SummonerSpells => dragon.get_summoner_spells()?.len(),
        };
        counts.push((dataset, count));
        pb.inc(1);
    }
    pb.finish_with_message("✓ all datasets fetched");

    for (dataset, count) in counts {
        display_success(&format!("{}: {} records", dataset, count));
    }

    dragon.clear_caches();
    display_info("Caches cleared");
    Ok(())
}
