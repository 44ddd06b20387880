//! # ALIFE
//!
//! Predator/prey artificial life simulator.
//!
//! ## Features
//!
//! - **Steering**: prey flock and flee, predators hunt, everyone keeps apart
//! - **Evolvable**: offspring inherit mutated vision, speed, damage and field of view
//! - **Adaptive**: per-step movement scales with population size and fast-forward
//! - **Configurable**: YAML configuration files
//! - **Reproducible**: Seeded random number generation and checkpoints
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use alife::{Config, Kind, World};
//!
//! // Create world with default config
//! let config = Config::default();
//! let mut world = World::new(config);
//!
//! // Run simulation
//! world.run(1000);
//!
//! // Check results
//! println!("Prey: {}", world.count(Kind::Prey));
//! println!("Max prey generation: {}", world.stats.prey.generation);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use alife::Config;
//!
//! let mut config = Config::default();
//! config.prey.population = 200;
//! config.predator.mutation_rate = 0.1;
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Checkpoints
//!
//! ```rust,no_run
//! use alife::{Config, World};
//! use alife::checkpoint::Checkpoint;
//!
//! let mut world = World::new(Config::default());
//! world.run(1000);
//!
//! // Save checkpoint
//! let checkpoint = world.create_checkpoint();
//! checkpoint.save("checkpoint.bin").unwrap();
//!
//! // Load checkpoint
//! let loaded = Checkpoint::load("checkpoint.bin").unwrap();
//! let restored_world = World::from_checkpoint(loaded);
//! ```

pub mod agent;
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod geometry;
pub mod population;
pub mod shared;
pub mod speed;
pub mod stats;
pub mod world;

// Re-export main types
pub use agent::{Agent, Kind, Traits};
pub use config::Config;
pub use error::{CheckpointError, ConfigError};
pub use population::Population;
pub use world::{TickReport, World};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a quick benchmark
pub fn benchmark(ticks: u64, prey: usize, predators: usize) -> BenchmarkResult {
    use std::time::Instant;

    let mut config = Config::default();
    config.prey.population = prey;
    config.predator.population = predators;

    let mut world = World::new(config);
    let initial_population = world.population();

    let start = Instant::now();
    world.run(ticks);
    let elapsed = start.elapsed();

    BenchmarkResult {
        ticks,
        initial_population,
        final_population: world.population(),
        elapsed_secs: elapsed.as_secs_f64(),
        ticks_per_second: ticks as f64 / elapsed.as_secs_f64().max(f64::EPSILON),
        max_generation: world.stats.prey.generation.max(world.stats.predator.generation),
    }
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub ticks: u64,
    pub initial_population: usize,
    pub final_population: usize,
    pub elapsed_secs: f64,
    pub ticks_per_second: f64,
    pub max_generation: u32,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Ticks: {}", self.ticks)?;
        writeln!(f, "Population: {} -> {}", self.initial_population, self.final_population)?;
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} ticks/s", self.ticks_per_second)?;
        writeln!(f, "Max generation: {}", self.max_generation)?;
        Ok(())
    }
}
