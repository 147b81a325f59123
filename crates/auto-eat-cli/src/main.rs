//! auto-eat CLI - drive the controller against a simulated host.
//!
//! - `auto-eat simulate` - run a seeded simulation and print a summary
//! - `auto-eat check` - load and validate a config file
//! - `auto-eat defaults` - print the default config as YAML

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use auto_eat::catalog::items;
use auto_eat::{
    AutoEat, AutoEatConfig, ItemCatalog, SimHost, SimRules, StopReason, TickOutcome,
    VanillaCatalog, DEFAULT_SIBLINGS,
};
use eat_core::{TickContext, VitalsView};

#[derive(Parser)]
#[command(name = "auto-eat")]
#[command(about = "Tick-driven auto-eat controller", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the controller against a simulated player
    Simulate {
        /// Config file (YAML); defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of ticks to simulate
        #[arg(long, default_value_t = 6_000)]
        ticks: u64,

        /// Seed for the simulated damage
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Ticks of held input needed to finish one item
        #[arg(long, default_value_t = 32)]
        eat_ticks: u32,

        /// Chance per tick of taking damage
        #[arg(long, default_value_t = 0.01)]
        damage_chance: f32,

        /// Make the exclusive consumer busy for 32 ticks out of every N (0 disables)
        #[arg(long, default_value_t = 0)]
        exclusive_every: u64,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load and validate a config file
    Check {
        path: PathBuf,
    },

    /// Print the default config
    Defaults,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    ticks: u64,
    sessions: u32,
    stopped_satisfied: u32,
    stopped_out_of_food: u32,
    yielded_ticks: u64,
    eating_ticks: u64,
    items_eaten: Vec<String>,
    final_health: f32,
    final_food_level: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Simulate {
            config,
            ticks,
            seed,
            eat_ticks,
            damage_chance,
            exclusive_every,
            json,
        } => {
            let config = load_config(config.as_deref())?;
            let rules = SimRules {
                eat_ticks,
                damage_chance,
                ..SimRules::default()
            };
            let summary = simulate(config, rules, ticks, seed, exclusive_every);
            print_summary(&summary, json)
        }
        Commands::Check { path } => check(&path),
        Commands::Defaults => {
            let yaml = AutoEatConfig::default()
                .to_yaml()
                .context("Failed to serialize default config")?;
            print!("{yaml}");
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AutoEatConfig> {
    let Some(path) = path else {
        return Ok(AutoEatConfig::default());
    };

    let mut config = AutoEatConfig::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    config.sanitize(&VanillaCatalog);
    Ok(config)
}

fn check(path: &Path) -> Result<()> {
    let config = AutoEatConfig::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    config
        .validate(&VanillaCatalog)
        .with_context(|| format!("Invalid config {}", path.display()))?;

    println!("{}: ok", path.display());
    println!("  mode: {:?}", config.threshold.mode);
    println!("  health threshold: {}", config.threshold.health);
    println!("  hunger threshold: {}", config.threshold.hunger);
    println!("  blacklist: {} items", config.blacklist.len());
    println!("  pause siblings: {}", config.pause_siblings);
    println!("  pause pathing: {}", config.pause_pathing);
    Ok(())
}

/// A player mid-trip: sword in hand, a few foods on the hotbar, auras and pathing running.
fn scenario(rules: SimRules) -> SimHost {
    let catalog = VanillaCatalog;
    let mut host = SimHost::new(rules)
        .with_vitals(20.0, 20)
        .with_hotbar(0, catalog.stack(items::DIAMOND_SWORD, 1))
        .with_hotbar(1, catalog.stack(items::BREAD, 16))
        .with_hotbar(2, catalog.stack(items::COOKED_BEEF, 8))
        .with_hotbar(3, catalog.stack(items::GOLDEN_APPLE, 2))
        .with_hotbar(5, catalog.stack(items::ROTTEN_FLESH, 8))
        .with_offhand(catalog.stack(items::TOTEM_OF_UNDYING, 1))
        .with_sibling(DEFAULT_SIBLINGS[0], true)
        .with_sibling(DEFAULT_SIBLINGS[1], false);
    host.navigating = true;
    host
}

fn simulate(
    config: AutoEatConfig,
    rules: SimRules,
    ticks: u64,
    seed: u64,
    exclusive_every: u64,
) -> Summary {
    let mut host = scenario(rules);
    let mut controller = AutoEat::new(config);
    let mut summary = Summary {
        ticks,
        ..Summary::default()
    };

    info!(ticks, seed, "starting simulation");

    let mut ctx = TickContext::new(0).with_seed(seed);
    for _ in 0..ticks {
        host.exclusive_busy = exclusive_every > 0 && ctx.tick % exclusive_every < 32;

        match controller.on_tick(&ctx, &mut host) {
            TickOutcome::Started(slot) => {
                summary.sessions += 1;
                debug!(tick = ctx.tick, %slot, "session started");
            }
            TickOutcome::Stopped(StopReason::Satisfied) => summary.stopped_satisfied += 1,
            TickOutcome::Stopped(StopReason::OutOfFood) => summary.stopped_out_of_food += 1,
            TickOutcome::Yielded => summary.yielded_ticks += 1,
            TickOutcome::Stopped(StopReason::Deactivated)
            | TickOutcome::Idle
            | TickOutcome::Continued(_) => {}
        }
        if controller.is_active() {
            summary.eating_ticks += 1;
        }
        host.step(&ctx);
        ctx = ctx.next();
    }
    controller.deactivate(&ctx, &mut host);

    summary.items_eaten = host.eaten.iter().map(|id| id.to_string()).collect();
    summary.final_health = host.health();
    summary.final_food_level = host.food_level();
    summary
}

fn print_summary(summary: &Summary, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(summary).context("Failed to encode summary")?;
        println!("{out}");
        return Ok(());
    }

    println!("Simulated {} ticks", summary.ticks);
    println!(
        "  sessions: {} (satisfied: {}, out of food: {})",
        summary.sessions, summary.stopped_satisfied, summary.stopped_out_of_food
    );
    println!("  eating ticks: {}", summary.eating_ticks);
    println!("  yielded ticks: {}", summary.yielded_ticks);
    println!("  items eaten: {}", summary.items_eaten.len());
    println!(
        "  final vitals: health {:.1}, food {}",
        summary.final_health, summary.final_food_level
    );
    Ok(())
}
