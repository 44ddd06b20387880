//! ALIFE - CLI Entry Point
//!
//! Predator/prey artificial life simulator.

use alife::checkpoint::{Checkpoint, CheckpointManager};
use alife::stats::TrackedTrait;
use alife::{benchmark, Config, Kind, World};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "alife")]
#[command(version)]
#[command(about = "Predator/prey artificial life simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a new simulation
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Number of ticks to simulate
        #[arg(short, long, default_value = "10000")]
        ticks: u64,

        /// Output directory for checkpoints
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Fast-forward multiplier (1-10), overrides the config
        #[arg(short, long)]
        fast_forward: Option<u32>,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Resume simulation from checkpoint
    Resume {
        /// Checkpoint file to resume from
        #[arg(short, long)]
        checkpoint: PathBuf,

        /// Number of additional ticks
        #[arg(short, long, default_value = "10000")]
        ticks: u64,

        /// Output directory
        #[arg(short, long, default_value = "output")]
        output: PathBuf,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of ticks
        #[arg(short, long, default_value = "1000")]
        ticks: u64,

        /// Initial prey
        #[arg(long, default_value = "500")]
        prey: usize,

        /// Initial predators
        #[arg(long, default_value = "100")]
        predators: usize,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },

    /// Analyze a checkpoint file
    Analyze {
        /// Checkpoint file
        checkpoint: PathBuf,
    },
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            ticks,
            output,
            seed,
            fast_forward,
            quiet,
        } => run_simulation(config, ticks, output, seed, fast_forward, quiet),

        Commands::Resume {
            checkpoint,
            ticks,
            output,
        } => resume_simulation(checkpoint, ticks, output),

        Commands::Benchmark {
            ticks,
            prey,
            predators,
        } => run_benchmark(ticks, prey, predators),

        Commands::Init { output } => generate_config(output),

        Commands::Analyze { checkpoint } => analyze_checkpoint(checkpoint),
    }
}

fn run_simulation(
    config_path: PathBuf,
    ticks: u64,
    output: PathBuf,
    seed: Option<u64>,
    fast_forward: Option<u32>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let mut config = if config_path.exists() {
        Config::from_file(&config_path)?
    } else {
        Config::default()
    };
    if let Some(value) = fast_forward {
        alife::config::validate_fast_forward(value)?;
        config.speed.fast_forward = value;
    }
    init_logging(&config.logging.log_level);

    if config_path.exists() {
        log::info!("Loaded config from {:?}", config_path);
    } else {
        log::info!("No config at {:?}, using defaults", config_path);
    }

    // Create output directory
    std::fs::create_dir_all(&output)?;

    // Create world
    let mut world = match seed {
        Some(s) => World::new_with_seed(config.clone(), s),
        None => World::try_new(config.clone())?,
    };

    println!("Starting simulation");
    println!("  Predators: {}", world.count(Kind::Predator));
    println!("  Prey: {}", world.count(Kind::Prey));
    println!("  Plane: {0}x{0}", config.world.size);
    println!("  Seed: {}", world.seed());
    println!("  Ticks: {}", ticks);
    println!();

    let mut checkpoint_mgr = CheckpointManager::new(
        output.to_string_lossy().to_string(),
        config.logging.checkpoint_interval,
        10, // Keep last 10 checkpoints
    );

    let start = Instant::now();
    drive(&mut world, ticks, &mut checkpoint_mgr, quiet);

    let elapsed = start.elapsed();
    println!();
    println!("=== Simulation Complete ===");
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Ticks: {}", world.turn());
    println!("Speed: {:.1} ticks/s", world.turn() as f64 / elapsed.as_secs_f64());
    println!("Final population: {}", world.population());
    println!(
        "Max generation: predators {} prey {}",
        world.stats.predator.generation, world.stats.prey.generation
    );

    finish(&world, &output)
}

fn resume_simulation(
    checkpoint_path: PathBuf,
    ticks: u64,
    output: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let checkpoint = Checkpoint::load(&checkpoint_path)?;
    init_logging(&checkpoint.config.logging.log_level);
    let mut world = World::from_checkpoint(checkpoint);

    println!("Resumed at turn {}", world.turn());
    println!("Population: {}", world.population());
    println!("Running {} additional ticks", ticks);
    println!();

    std::fs::create_dir_all(&output)?;

    let mut checkpoint_mgr = CheckpointManager::new(
        output.to_string_lossy().to_string(),
        world.config.logging.checkpoint_interval,
        10,
    );

    let start = Instant::now();
    let start_turn = world.turn();
    drive(&mut world, ticks, &mut checkpoint_mgr, false);

    let elapsed = start.elapsed();
    println!();
    println!("=== Resume Complete ===");
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Final turn: {}", world.turn());
    println!(
        "Speed: {:.1} ticks/s",
        (world.turn() - start_turn) as f64 / elapsed.as_secs_f64()
    );
    println!("Population: {}", world.population());

    finish(&world, &output)
}

/// Tick until `ticks` have run or the world is empty, printing and checkpointing as configured
fn drive(world: &mut World, ticks: u64, checkpoint_mgr: &mut CheckpointManager, quiet: bool) {
    let stats_interval = world.config.logging.stats_interval.max(1);

    for _ in 0..ticks {
        world.tick();

        if !quiet && world.turn() % stats_interval == 0 {
            println!("{}", world.stats.summary());
        }

        if checkpoint_mgr.should_save(world.turn()) {
            let checkpoint = world.create_checkpoint();
            match checkpoint_mgr.save(&checkpoint) {
                Ok(path) => log::info!("Checkpoint saved: {}", path),
                Err(e) => log::error!("Checkpoint error: {}", e),
            }
        }

        if world.is_extinct() {
            println!("\nPopulation extinct at turn {}", world.turn());
            break;
        }
    }
}

/// Write the final checkpoint and stats history
fn finish(world: &World, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let final_path = output.join("checkpoint_final.bin");
    world.create_checkpoint().save(&final_path)?;
    println!("Final checkpoint: {:?}", final_path);

    let stats_path = output.join("stats_history.json");
    world.stats.history.save(&stats_path.to_string_lossy())?;
    println!("Stats history: {:?}", stats_path);

    Ok(())
}

fn run_benchmark(ticks: u64, prey: usize, predators: usize) -> Result<(), Box<dyn std::error::Error>> {
    init_logging("warn");
    println!("=== ALIFE Benchmark ===");
    println!("Ticks: {}", ticks);
    println!("Prey: {} Predators: {}", prey, predators);
    println!();

    let result = benchmark(ticks, prey, predators);
    println!("{}", result);

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    init_logging("info");
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}

fn analyze_checkpoint(checkpoint_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    init_logging("info");
    println!("=== Checkpoint Analysis ===");
    println!("File: {:?}", checkpoint_path);
    println!();

    let checkpoint = Checkpoint::load(&checkpoint_path)?;

    println!("Turn: {}", checkpoint.turn());
    println!("Population: {}", checkpoint.population.len());
    println!("Seed: {}", checkpoint.random_seed);

    for kind in Kind::ALL {
        let agents: Vec<_> = checkpoint.population.iter().filter(|a| a.kind == kind).collect();
        let stats = checkpoint.stats.kind(kind);

        println!();
        println!("[{}]", kind);
        println!("  Alive: {}", agents.len());
        println!("  Births: {} Deaths: {}", stats.births, stats.deaths);
        println!("  Max generation: {}", stats.generation);

        if agents.is_empty() {
            continue;
        }
        let oldest = agents.iter().map(|a| a.generation).max().unwrap_or(0);
        println!("  Highest living generation: {}", oldest);

        for tracked in TrackedTrait::ALL {
            let mean = agents.iter().map(|a| tracked.of(&a.traits())).sum::<f64>()
                / agents.len() as f64;
            println!("  Mean {}: {:.3}", tracked.label(), mean);
        }
    }

    println!();
    println!(
        "Checkpoint size: {:.2} KB",
        checkpoint.size_bytes() as f64 / 1_000.0
    );

    Ok(())
}
