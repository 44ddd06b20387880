//! Statistics tracking for the simulation.
//!
//! Counters and trait means are maintained incrementally as agents are born
//! and die, never recomputed from the population. Snapshots of population
//! and of each mean's drift from its seeded baseline are taken every
//! `snapshot_interval` turns.

use crate::agent::{Kind, Traits};
use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Trait tracked as a running mean per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackedTrait {
    Vision,
    Speed,
    Damage,
    Peripheral,
}

impl TrackedTrait {
    pub const ALL: [TrackedTrait; 4] = [
        TrackedTrait::Vision,
        TrackedTrait::Speed,
        TrackedTrait::Damage,
        TrackedTrait::Peripheral,
    ];

    pub fn of(self, traits: &Traits) -> f64 {
        match self {
            TrackedTrait::Vision => traits.vision,
            TrackedTrait::Speed => traits.speed,
            TrackedTrait::Damage => traits.damage,
            TrackedTrait::Peripheral => traits.peripheral,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrackedTrait::Vision => "vision",
            TrackedTrait::Speed => "speed",
            TrackedTrait::Damage => "damage",
            TrackedTrait::Peripheral => "peripheral",
        }
    }
}

/// One value per tracked trait
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitMeans {
    pub vision: f64,
    pub speed: f64,
    pub damage: f64,
    pub peripheral: f64,
}

impl TraitMeans {
    pub fn from_traits(traits: &Traits) -> Self {
        Self {
            vision: traits.vision,
            speed: traits.speed,
            damage: traits.damage,
            peripheral: traits.peripheral,
        }
    }

    pub fn get(&self, tracked: TrackedTrait) -> f64 {
        match tracked {
            TrackedTrait::Vision => self.vision,
            TrackedTrait::Speed => self.speed,
            TrackedTrait::Damage => self.damage,
            TrackedTrait::Peripheral => self.peripheral,
        }
    }

    fn get_mut(&mut self, tracked: TrackedTrait) -> &mut f64 {
        match tracked {
            TrackedTrait::Vision => &mut self.vision,
            TrackedTrait::Speed => &mut self.speed,
            TrackedTrait::Damage => &mut self.damage,
            TrackedTrait::Peripheral => &mut self.peripheral,
        }
    }

    /// `self - other`, trait by trait
    pub fn minus(&self, other: &TraitMeans) -> TraitMeans {
        TraitMeans {
            vision: self.vision - other.vision,
            speed: self.speed - other.speed,
            damage: self.damage - other.damage,
            peripheral: self.peripheral - other.peripheral,
        }
    }
}

/// Running counters for one kind
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KindStats {
    /// Live agents
    pub population: usize,
    /// Agents born through reproduction
    pub births: u64,
    pub deaths: u64,
    /// Highest generation seen
    pub generation: u32,
    /// Running means over live agents
    pub means: TraitMeans,
}

impl KindStats {
    fn include(&mut self, traits: &Traits) {
        self.population += 1;
        let n = self.population as f64;
        for tracked in TrackedTrait::ALL {
            let mean = self.means.get_mut(tracked);
            *mean = ((n - 1.0) * *mean + tracked.of(traits)) / n;
        }
        self.observe_generation(traits.generation);
    }

    fn exclude(&mut self, traits: &Traits) -> bool {
        if self.population == 0 {
            return false;
        }
        self.population -= 1;
        self.deaths += 1;

        if self.population == 0 {
            self.means = TraitMeans::default();
            return true;
        }
        let n = self.population as f64;
        for tracked in TrackedTrait::ALL {
            let mean = self.means.get_mut(tracked);
            *mean = ((n + 1.0) * *mean - tracked.of(traits)) / n;
        }
        true
    }

    fn observe_generation(&mut self, generation: u32) {
        self.generation = self.generation.max(generation);
    }
}

/// Population and trait drift at one point in time
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub turn: u64,
    pub predator_population: usize,
    pub prey_population: usize,
    /// Seeded baseline minus current mean
    pub predator_deviation: TraitMeans,
    pub prey_deviation: TraitMeans,
}

impl Snapshot {
    pub fn population(&self, kind: Kind) -> usize {
        match kind {
            Kind::Predator => self.predator_population,
            Kind::Prey => self.prey_population,
        }
    }

    pub fn deviation(&self, kind: Kind) -> &TraitMeans {
        match kind {
            Kind::Predator => &self.predator_deviation,
            Kind::Prey => &self.prey_deviation,
        }
    }
}

/// Historical statistics tracker
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsHistory {
    /// All recorded snapshots
    pub snapshots: Vec<Snapshot>,
    /// Recording interval
    pub interval: u64,
}

impl StatsHistory {
    pub fn new(interval: u64) -> Self {
        Self {
            snapshots: Vec::new(),
            interval,
        }
    }

    pub fn record(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Population of one kind over time
    pub fn population_series(&self, kind: Kind) -> Vec<(u64, usize)> {
        self.snapshots
            .iter()
            .map(|s| (s.turn, s.population(kind)))
            .collect()
    }

    /// Drift of one trait mean from its baseline over time
    pub fn deviation_series(&self, kind: Kind, tracked: TrackedTrait) -> Vec<(u64, f64)> {
        self.snapshots
            .iter()
            .map(|s| (s.turn, s.deviation(kind).get(tracked)))
            .collect()
    }

    /// Save history to file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }

    /// Load history from file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

/// Session statistics: per-kind counters, running means, turn count and wall clock
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatsTracker {
    pub turn: u64,
    pub predator: KindStats,
    pub prey: KindStats,
    /// Seeded trait values each kind's drift is measured against
    pub predator_baseline: TraitMeans,
    pub prey_baseline: TraitMeans,
    pub history: StatsHistory,
    /// Wall-clock time accumulated up to the last save or pause
    elapsed: Duration,
    #[serde(skip, default = "Instant::now")]
    started: Instant,
    #[serde(skip)]
    paused: bool,
}

impl StatsTracker {
    pub fn new(config: &Config) -> Self {
        Self {
            turn: 0,
            predator: KindStats::default(),
            prey: KindStats::default(),
            predator_baseline: TraitMeans::from_traits(&config.predator.base_traits()),
            prey_baseline: TraitMeans::from_traits(&config.prey.base_traits()),
            history: StatsHistory::new(config.stats.snapshot_interval.max(1)),
            elapsed: Duration::ZERO,
            started: Instant::now(),
            paused: false,
        }
    }

    pub fn kind(&self, kind: Kind) -> &KindStats {
        match kind {
            Kind::Predator => &self.predator,
            Kind::Prey => &self.prey,
        }
    }

    fn kind_mut(&mut self, kind: Kind) -> &mut KindStats {
        match kind {
            Kind::Predator => &mut self.predator,
            Kind::Prey => &mut self.prey,
        }
    }

    fn baseline(&self, kind: Kind) -> &TraitMeans {
        match kind {
            Kind::Predator => &self.predator_baseline,
            Kind::Prey => &self.prey_baseline,
        }
    }

    /// Record a newborn: population, births and running means
    pub fn add(&mut self, kind: Kind, traits: &Traits) {
        let stats = self.kind_mut(kind);
        stats.include(traits);
        stats.births += 1;
    }

    /// Record an initial agent; counted in population and means but not births
    pub fn seed(&mut self, kind: Kind, traits: &Traits) {
        self.kind_mut(kind).include(traits);
    }

    /// Record a death. No-op when the kind's population is already zero.
    pub fn remove(&mut self, kind: Kind, traits: &Traits) {
        if !self.kind_mut(kind).exclude(traits) {
            log::debug!("Ignoring {} death with zero population", kind);
        }
    }

    /// Raise the kind's max generation if `generation` exceeds it
    pub fn observe_generation(&mut self, kind: Kind, generation: u32) {
        self.kind_mut(kind).observe_generation(generation);
    }

    pub fn population(&self, kind: Kind) -> usize {
        self.kind(kind).population
    }

    pub fn total_population(&self) -> usize {
        self.predator.population + self.prey.population
    }

    /// Advance the turn counter, snapshotting every `interval` turns
    pub fn next_turn(&mut self) {
        self.turn += 1;
        if self.turn % self.history.interval == 0 {
            let snapshot = self.snapshot();
            log::debug!(
                "Snapshot at turn {}: predators={} prey={}",
                snapshot.turn,
                snapshot.predator_population,
                snapshot.prey_population
            );
            self.history.record(snapshot);
        }
    }

    /// Current population and drift from baseline
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            turn: self.turn,
            predator_population: self.predator.population,
            prey_population: self.prey.population,
            predator_deviation: self.baseline(Kind::Predator).minus(&self.predator.means),
            prey_deviation: self.baseline(Kind::Prey).minus(&self.prey.means),
        }
    }

    /// Record the state right after seeding as the first history point
    pub fn record_baseline(&mut self) {
        let snapshot = self.snapshot();
        self.history.record(snapshot);
    }

    /// Wall-clock time the simulation has been running, excluding pauses
    pub fn elapsed(&self) -> Duration {
        if self.paused {
            self.elapsed
        } else {
            self.started.elapsed()
        }
    }

    /// Elapsed seconds with two decimals
    pub fn time_str(&self) -> String {
        format!("{:.2}", self.elapsed().as_secs_f64())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze the stopwatch
    pub fn pause(&mut self) {
        if !self.paused {
            self.elapsed = self.started.elapsed();
            self.paused = true;
        }
    }

    /// Restart the stopwatch from the stored elapsed time
    pub fn reset_start_time(&mut self) {
        self.started = Instant::now()
            .checked_sub(self.elapsed)
            .unwrap_or_else(Instant::now);
        self.paused = false;
    }

    /// Copy with the elapsed time captured, ready to persist
    pub fn frozen(&self) -> Self {
        let mut copy = self.clone();
        copy.elapsed = self.elapsed();
        copy
    }

    /// Format stats as a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "T:{:6} | Pred:{:4} gen {:3} (+{} -{}) | Prey:{:5} gen {:3} (+{} -{}) | {}s",
            self.turn,
            self.predator.population,
            self.predator.generation,
            self.predator.births,
            self.predator.deaths,
            self.prey.population,
            self.prey.generation,
            self.prey.births,
            self.prey.deaths,
            self.time_str(),
        )
    }
}
