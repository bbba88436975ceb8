use colored::*;
use league_dragon::{Champion, Item, Mastery, ProfileIcon, SummonerSpell};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ChampionRow {
    id: String,
    name: String,
    title: String,
    tags: String,
    detail: String,
}

#[derive(Tabled)]
struct ItemRow {
    id: String,
    name: String,
    gold: String,
    tags: String,
}

#[derive(Tabled)]
struct MasteryRow {
    id: String,
    name: String,
    ranks: String,
}

#[derive(Tabled)]
struct SpellRow {
    id: String,
    name: String,
    level: String,
    cooldown: String,
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn print_header(title: &str, count: usize) {
    println!("\n{}", format!("{} ({})", title, count).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_version(version: &str, language: &str) {
    println!("{} {}", "📦 Version:".bold(), version.green());
    println!("{} {}", "🌐 Locale: ".bold(), language.green());
}

pub fn display_champions(champions: &[Champion]) {
    print_header("🏆 CHAMPIONS", champions.len());

    let rows = champions
        .iter()
        .map(|c| ChampionRow {
            id: c.id.clone(),
            name: c.name.clone(),
            title: c.title.clone(),
            tags: c.tags.join(", "),
            detail: if c.is_detailed() {
                "yes".green().to_string()
            } else {
                "-".to_string()
            },
        })
        .collect();
    print_table::<ChampionRow>(rows);
}

pub fn display_champion(champion: &Champion, icon_url: Option<&str>) {
    println!(
        "\n{}",
        format!("🎮 {}, {}", champion.name, champion.title).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if !champion.tags.is_empty() {
        println!("{} {}", "Tags:".bold(), champion.tags.join(", "));
    }
    println!(
        "{} attack {} / defense {} / magic {} / difficulty {}",
        "Info:".bold(),
        champion.info.attack,
        champion.info.defense,
        champion.info.magic,
        champion.info.difficulty
    );
    if let Some(url) = icon_url {
        println!("{} {}", "Icon:".bold(), url);
    }

    println!("\n{}", "Lore".bold().yellow());
    println!("{}\n", champion.lore);

    if let Some(passive) = &champion.passive {
        println!("{} {}", "Passive:".bold(), passive.name);
    }
    for spell in &champion.spells {
        println!("  • {} ({})", spell.name, spell.id);
    }
    if !champion.skins.is_empty() {
        println!("{} {}", "Skins:".bold(), champion.skins.len());
    }
    println!();
}

pub fn display_items(title: &str, items: &[Item]) {
    print_header(title, items.len());

    let rows = items
        .iter()
        .map(|i| ItemRow {
            id: i.id.clone(),
            name: i.name.clone(),
            gold: i.gold.total.to_string(),
            tags: i.tags.join(", "),
        })
        .collect();
    print_table::<ItemRow>(rows);
}

pub fn display_masteries(masteries: &[Mastery]) {
    print_header("📜 MASTERIES", masteries.len());

    let rows = masteries
        .iter()
        .map(|m| MasteryRow {
            id: m.id.to_string(),
            name: m.name.clone(),
            ranks: m.ranks.to_string(),
        })
        .collect();
    print_table::<MasteryRow>(rows);
}

pub fn display_summoner_spells(spells: &[SummonerSpell]) {
    print_header("✨ SUMMONER SPELLS", spells.len());

    let rows = spells
        .iter()
        .map(|s| SpellRow {
            id: s.id.clone(),
            name: s.name.clone(),
            level: s.summoner_level.to_string(),
            cooldown: s
                .cooldown
                .first()
                .map(|c| format!("{}s", c))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    print_table::<SpellRow>(rows);
}

pub fn display_profile_icons(icons: &[ProfileIcon]) {
    print_header("🖼️ PROFILE ICONS", icons.len());

    let ids: Vec<String> = icons.iter().take(20).map(|i| i.id.to_string()).collect();
    println!("{} {}", "First ids:".bold(), ids.join(", "));
    if icons.len() > ids.len() {
        println!("{}", format!("… and {} more", icons.len() - ids.len()).yellow());
    }
    println!();
}
