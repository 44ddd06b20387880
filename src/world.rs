//! World simulation engine - main turn loop.
//!
//! Each tick walks the population by index and runs four phases for the
//! agent in the current slot: target, move, combat, conclude. A death removes
//! the agent immediately and the next agent slides into the same index; a
//! birth appends to the end, so agents later in the pass see newborns.

use crate::agent::{random_point, Agent, Kind};
use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::config::Config;
use crate::error::ConfigError;
use crate::population::Population;
use crate::shared::commands::{SimState, SimulationController};
use crate::speed::SpeedScale;
use crate::stats::StatsTracker;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::path::Path;

/// Lifecycle events from one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub births: usize,
    pub deaths: usize,
}

/// The simulation world
pub struct World {
    // Population
    pub population: Population,

    // Bookkeeping
    pub stats: StatsTracker,
    pub speed: SpeedScale,

    // Configuration
    pub config: Config,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,
}

impl World {
    /// Create a new world with the given configuration
    pub fn new(config: Config) -> Self {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(config, seed)
    }

    /// Validate the configuration before creating the world
    pub fn try_new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a new world with a specific seed for reproducibility.
    /// Predators are seeded first, then prey, at random points with random destinations.
    pub fn new_with_seed(config: Config, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let size = config.world.size;
        let mut agents = Vec::with_capacity(config.predator.population + config.prey.population);

        for kind in Kind::ALL {
            let seed_config = config.kind(kind);
            let traits = seed_config.base_traits();
            for _ in 0..seed_config.population {
                let position = random_point(size, &mut rng);
                let destination = random_point(size, &mut rng);
                agents.push(Agent::new(kind, position, destination, &traits, &mut rng));
            }
        }

        Self::assemble(config, agents, rng, seed)
    }

    /// Create a world from explicitly placed agents
    pub fn from_agents(config: Config, agents: Vec<Agent>, seed: u64) -> Self {
        Self::assemble(config, agents, ChaCha8Rng::seed_from_u64(seed), seed)
    }

    fn assemble(config: Config, agents: Vec<Agent>, rng: ChaCha8Rng, seed: u64) -> Self {
        let mut stats = StatsTracker::new(&config);
        for agent in &agents {
            stats.seed(agent.kind, &agent.traits());
        }
        stats.record_baseline();

        log::info!(
            "World created: predators={} prey={} seed={}",
            stats.population(Kind::Predator),
            stats.population(Kind::Prey),
            seed
        );

        Self {
            population: Population::from(agents),
            stats,
            speed: SpeedScale::new(&config.speed),
            config,
            rng,
            seed,
        }
    }

    /// Restore world from checkpoint
    pub fn from_checkpoint(checkpoint: Checkpoint) -> Self {
        let mut stats = checkpoint.stats;
        stats.reset_start_time();

        Self {
            population: checkpoint.population,
            stats,
            speed: checkpoint.speed,
            config: checkpoint.config,
            rng: checkpoint.rng,
            seed: checkpoint.random_seed,
        }
    }

    /// Create checkpoint of current state
    pub fn create_checkpoint(&self) -> Checkpoint {
        Checkpoint::new(
            self.config.clone(),
            self.population.clone(),
            self.stats.frozen(),
            self.speed.clone(),
            self.seed,
            self.rng.clone(),
        )
    }

    /// Replace this world with a saved one. On error the current state is left untouched.
    pub fn load_checkpoint<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CheckpointError> {
        let checkpoint = Checkpoint::load(path)?;
        *self = Self::from_checkpoint(checkpoint);
        log::info!(
            "Checkpoint loaded: turn={} population={}",
            self.turn(),
            self.population()
        );
        Ok(())
    }

    /// Run one full pass over the population
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();

        let mut index = 0;
        while index < self.population.len() {
            match self.take_turn(index) {
                Outcome::Died => report.deaths += 1,
                Outcome::Survived { gave_birth } => {
                    if gave_birth {
                        report.births += 1;
                    }
                    index += 1;
                }
            }
        }

        self.stats.next_turn();
        self.speed.recompute(self.stats.total_population());

        report
    }

    /// Target, move, combat and conclude for the agent at `index`
    fn take_turn(&mut self, index: usize) -> Outcome {
        let fast_forward = self.speed.fast_forward();
        let time_scale = self.speed.current_factor();
        let world = &self.config.world;

        let Some((agent, mut others)) = self.population.split(index) else {
            return Outcome::Survived { gave_birth: false };
        };

        agent.sense_and_retarget(others.iter(), fast_forward, world.proximity, &mut self.rng);
        agent.advance(world.size, time_scale);
        agent.engage(others.iter_mut(), world.combat_radius, fast_forward);

        if agent.age_and_check_death(fast_forward, &mut self.rng) {
            let dead = self.population.remove(index);
            self.stats.remove(dead.kind, &dead.traits());
            return Outcome::Died;
        }

        let prey_population = self.stats.population(Kind::Prey);
        if !agent.attempt_reproduction(fast_forward, prey_population, &mut self.rng) {
            return Outcome::Survived { gave_birth: false };
        }

        let child = agent.spawn_offspring(world.offspring_spread, world.size, &mut self.rng);
        self.stats.add(child.kind, &child.traits());
        self.stats.observe_generation(child.kind, child.generation);
        self.population.push(child);

        Outcome::Survived { gave_birth: true }
    }

    /// Run simulation for specified number of ticks
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Run simulation with callback for progress updates
    pub fn run_with_callback<F>(&mut self, ticks: u64, mut callback: F)
    where
        F: FnMut(&World, TickReport),
    {
        for _ in 0..ticks {
            let report = self.tick();
            callback(self, report);
        }
    }

    /// Tick up to `max_ticks` times while the controller says Running.
    ///
    /// The controller is consulted between passes only. Pausing freezes the
    /// stats stopwatch; resuming rebases it. Returns the number of ticks run.
    pub fn run_controlled(&mut self, controller: &SimulationController, max_ticks: u64) -> u64 {
        let mut ticks = 0;
        while ticks < max_ticks {
            match controller.state() {
                SimState::Running => {
                    if self.stats.is_paused() {
                        self.stats.reset_start_time();
                    }
                    self.tick();
                    ticks += 1;
                }
                SimState::Paused => {
                    self.stats.pause();
                    break;
                }
                SimState::Stopped => break,
            }
        }
        ticks
    }

    /// Change the fast-forward multiplier; applies from the next recompute
    pub fn set_fast_forward(&mut self, value: u32) -> Result<(), ConfigError> {
        self.speed.set_fast_forward(value)
    }

    /// Get current population count
    pub fn population(&self) -> usize {
        self.population.len()
    }

    /// Live agents of one kind
    pub fn count(&self, kind: Kind) -> usize {
        self.population.count(kind)
    }

    /// Turns completed so far
    pub fn turn(&self) -> u64 {
        self.stats.turn
    }

    /// Check if population is extinct
    pub fn is_extinct(&self) -> bool {
        self.population.is_empty()
    }

    /// Get seed for reproducibility
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

enum Outcome {
    Died,
    Survived { gave_birth: bool },
}
