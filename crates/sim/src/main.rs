//! Headless arena run.
//!
//! Rolls a hero shop, recruits a party, takes artifact offers, then fights a
//! generated enemy wave and prints the battle log. Every roll comes from one
//! seeded generator, so the same seed and flags replay the same run.
//!
//! ```bash
//! cargo run -p arena-sim -- --seed 7 --level 10 --picks 2
//! RUST_LOG=arena_core=debug cargo run -p arena-sim -- --format json
//! ```

mod config;

use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use arena_content::{ArtifactCatalog, ContentFactory, TraitCatalog};
use arena_core::{
    Artifact, BattleConfig, BattleEngine, BattleResult, Character, DEFAULT_CHOICE_COUNT, GameError,
    PcgRng, RngOracle, RunState, Synergy, apply_effects, generate_choices, generate_enemies,
    generate_hero_shop,
};
use arena_core::generation::{DEFAULT_ENEMY_COUNT, DEFAULT_SHOP_SIZE};

use config::SimConfig;

/// Simulate one shop, artifact and battle round of the arena
#[derive(Parser)]
#[command(name = "arena-sim")]
#[command(about = "Headless arena auto-battler run", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for every roll (falls back to ARENA_SEED, then entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run level (falls back to ARENA_LEVEL, then 1)
    #[arg(short, long)]
    level: Option<u32>,

    /// Heroes offered by the shop
    #[arg(long, default_value_t = DEFAULT_SHOP_SIZE)]
    shop_size: usize,

    /// Heroes recruited from the shop, strongest first
    #[arg(long, default_value_t = 3)]
    party: usize,

    /// Enemies requested for the wave (boss levels field one fewer)
    #[arg(long, default_value_t = DEFAULT_ENEMY_COUNT)]
    enemies: usize,

    /// Artifact offers taken before the battle
    #[arg(long, default_value_t = 1)]
    picks: usize,

    /// Override the battle's step budget
    #[arg(long)]
    max_steps: Option<u32>,

    /// Load content from a data directory instead of the built-in catalogs
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Party, artifacts and the battle log
    Summary,
    /// Battle result as JSON
    Json,
}

/// Catalogs and battle tuning for a run.
struct Content {
    traits: Cow<'static, TraitCatalog>,
    artifacts: Cow<'static, ArtifactCatalog>,
    battle: BattleConfig,
}

impl Content {
    fn builtin() -> Self {
        Self {
            traits: Cow::Borrowed(TraitCatalog::builtin()),
            artifacts: Cow::Borrowed(ArtifactCatalog::builtin()),
            battle: BattleConfig::default(),
        }
    }

    fn load(data_dir: PathBuf) -> Result<Self> {
        let factory = ContentFactory::new(data_dir);
        tracing::info!("Loading content from {}", factory.data_dir().display());

        Ok(Self {
            traits: Cow::Owned(factory.load_traits()?),
            artifacts: Cow::Owned(factory.load_artifacts()?),
            battle: factory.load_config()?,
        })
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let env_config = SimConfig::from_env();

    let seed = cli.seed.or(env_config.seed).unwrap_or_else(entropy_seed);
    let level = cli.level.unwrap_or(env_config.level).clamp(1, 100);

    let mut content = match cli.data_dir.clone() {
        Some(dir) => Content::load(dir)?,
        None => Content::builtin(),
    };
    if let Some(max_steps) = cli.max_steps {
        content.battle = content.battle.with_max_steps(max_steps);
    }

    tracing::info!(seed, level, "Starting arena run");
    let mut rng = PcgRng::new(seed);

    let mut shop = generate_hero_shop(&*content.traits, level, cli.shop_size, &mut rng)
        .map_err(rejected)
        .context("Failed to roll the hero shop")?;
    shop.sort_by(|a, b| b.power.cmp(&a.power));
    let party: Vec<Character> = shop.into_iter().take(cli.party).collect();

    let mut owned: Vec<Artifact> = Vec::new();
    for round in 0..cli.picks {
        let held: Vec<&str> = owned.iter().map(|a| a.id.as_str()).collect();
        let offer = generate_choices(
            &*content.artifacts,
            level,
            DEFAULT_CHOICE_COUNT,
            &held,
            &mut rng,
        );
        // Keep the rarest artifact on offer
        let Some(pick) = offer.into_iter().max_by_key(|a| a.rarity) else {
            tracing::warn!(round, "Artifact pool exhausted");
            break;
        };
        tracing::debug!(round, artifact = %pick.id, "Artifact taken");
        owned.push(pick);
    }

    let applied = apply_effects(&party, &owned, &RunState::default(), &*content.artifacts);
    let enemies = generate_enemies(&*content.traits, level, cli.enemies, &mut rng)
        .map_err(rejected)
        .context("Failed to roll the enemy wave")?;

    if matches!(cli.format, OutputFormat::Summary) {
        print_roster("Party", &applied.heroes);
        print_artifacts(&owned, &applied.synergies);
        print_roster("Enemies", &enemies);
    }

    let mut engine = BattleEngine::new(applied.heroes, enemies, content.battle, rng)
        .map_err(rejected)
        .context("Failed to set up the battle")?;
    let result = engine.run();
    tracing::info!(
        victory = result.victory,
        turns = result.turns,
        "Battle finished"
    );

    match cli.format {
        OutputFormat::Summary => print_result(&result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}

/// Traces a core error with its code and severity before handing it to anyhow.
fn rejected<E>(err: E) -> anyhow::Error
where
    E: GameError + std::error::Error + Send + Sync + 'static,
{
    tracing::error!(
        code = err.error_code(),
        severity = err.severity().as_str(),
        "{err}"
    );
    anyhow::Error::new(err)
}

fn entropy_seed() -> u64 {
    let mut rng = PcgRng::from_entropy();
    (u64::from(rng.next_u32()) << 32) | u64::from(rng.next_u32())
}

fn print_roster(title: &str, roster: &[Character]) {
    println!("== {title} ==");
    for unit in roster {
        let stats = &unit.stats;
        println!(
            "  {} (Lv {} {} {} {}) HP {} ATK {} DEF {} SPD {} CRIT {} | power {}",
            unit.name,
            unit.level,
            unit.rarity_name(),
            unit.race.name,
            unit.class.name,
            stats.hp,
            stats.atk,
            stats.def,
            stats.spd,
            stats.crit,
            unit.power,
        );
    }
    println!();
}

fn print_artifacts(owned: &[Artifact], synergies: &[Synergy]) {
    println!("== Artifacts ==");
    for artifact in owned {
        println!("  {} [{}] {}", artifact.name, artifact.rarity, artifact.description);
    }
    for synergy in synergies {
        println!("  * synergy: {} {}", synergy.name, synergy.description);
    }
    println!();
}

fn print_result(result: &BattleResult) {
    println!("== Battle ==");
    for entry in &result.log {
        println!("  [{:>3}] {:<8} {}", entry.turn, entry.category, entry.message);
    }
    println!();
    let verdict = if result.victory { "Victory" } else { "Defeat" };
    println!(
        "{verdict} after {} turns: {} heroes standing, {} enemies down",
        result.turns, result.remaining_heroes, result.killed_enemies
    );
}
