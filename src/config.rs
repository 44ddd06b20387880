//! Configuration system for the simulation.
//!
//! Supports YAML configuration files with sensible defaults. The defaults
//! reproduce the classic 100 prey / 20 predator session on a 600x600 plane.

use crate::agent::{Kind, Traits};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::Path;

/// Highest accepted fast-forward multiplier
pub const MAX_FAST_FORWARD: u32 = 10;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub world: WorldConfig,
    pub speed: SpeedConfig,
    pub prey: KindConfig,
    pub predator: KindConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// World/plane configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Side length of the square plane, centred on the origin
    pub size: f64,
    /// Distance to the destination below which an agent picks a new one
    pub proximity: f64,
    /// Omnidirectional radius within which opposing agents fight
    pub combat_radius: f64,
    /// Offspring spawn within +/- this distance of the parent on each axis
    pub offspring_spread: f64,
}

/// Movement scaling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedConfig {
    /// Movement divisor used until the first recompute
    pub initial_time_scale: f64,
    /// Fast-forward multiplier (1 - 10)
    pub fast_forward: u32,
}

/// Seed parameters for one agent kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindConfig {
    /// Number of agents seeded at start
    pub population: usize,
    pub lifespan: f64,
    pub health: f64,
    /// Scan radius
    pub vision: f64,
    /// Half-angle of the forward viewing cone (radians)
    pub peripheral: f64,
    pub speed: f64,
    pub damage: f64,
    pub separation_weight: f64,
    /// Per-turn reproduction probability
    pub birth_rate: f64,
    /// Amplitude of the uniform perturbation applied at creation
    pub mutation_rate: f64,
}

/// Statistics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Turns between history snapshots
    pub snapshot_interval: u64,
}

/// Logging and checkpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Turns between checkpoints
    pub checkpoint_interval: u64,
    /// Turns between console summaries
    pub stats_interval: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            speed: SpeedConfig::default(),
            prey: KindConfig::default_prey(),
            predator: KindConfig::default_predator(),
            stats: StatsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 600.0,
            proximity: 10.0,
            combat_radius: 5.0,
            offspring_spread: 10.0,
        }
    }
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            initial_time_scale: 30.0,
            fast_forward: 1,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            snapshot_interval: 100,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            checkpoint_interval: 5000,
            stats_interval: 100,
            log_level: "info".to_string(),
        }
    }
}

impl KindConfig {
    pub fn default_prey() -> Self {
        Self {
            population: 100,
            lifespan: 8.0,
            health: 1.0,
            vision: 10.0,
            peripheral: PI / 4.0,
            speed: 10.0,
            damage: 0.0,
            separation_weight: 1.0,
            birth_rate: 0.005,
            mutation_rate: 0.25,
        }
    }

    pub fn default_predator() -> Self {
        Self {
            population: 20,
            lifespan: 10.0,
            health: 10.0,
            vision: 30.0,
            peripheral: PI / 2.0,
            speed: 20.0,
            damage: 1.0,
            separation_weight: 1.0,
            birth_rate: 0.005,
            mutation_rate: 0.25,
        }
    }

    /// Base traits for a generation-0 agent of this kind
    pub fn base_traits(&self) -> Traits {
        Traits {
            generation: 0,
            lifespan: self.lifespan,
            health: self.health,
            vision: self.vision,
            peripheral: self.peripheral,
            speed: self.speed,
            damage: self.damage,
            separation_weight: self.separation_weight,
            birth_rate: self.birth_rate,
            mutation_rate: self.mutation_rate,
        }
    }

    /// Check the seed ranges accepted from the parameters form
    pub fn validate(&self, kind: Kind) -> Result<(), ConfigError> {
        let field = |name: &str| format!("{}.{}", kind.label(), name);

        if !(self.health >= 1.0) {
            return Err(ConfigError::out_of_range(field("health"), self.health, ">= 1"));
        }
        if !(0.0..=100.0).contains(&self.speed) {
            return Err(ConfigError::out_of_range(field("speed"), self.speed, "0 - 100"));
        }
        if !(self.damage >= 0.0) {
            return Err(ConfigError::out_of_range(field("damage"), self.damage, ">= 0"));
        }
        if !(self.birth_rate > 0.0 && self.birth_rate <= 0.01) {
            return Err(ConfigError::out_of_range(
                field("birth_rate"),
                self.birth_rate,
                "(0, 0.01]",
            ));
        }
        if !(self.mutation_rate >= 0.0) {
            return Err(ConfigError::out_of_range(
                field("mutation_rate"),
                self.mutation_rate,
                ">= 0",
            ));
        }
        for (name, value) in [
            ("lifespan", self.lifespan),
            ("vision", self.vision),
            ("peripheral", self.peripheral),
            ("separation_weight", self.separation_weight),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::out_of_range(field(name), value, "finite and >= 0"));
            }
        }
        Ok(())
    }
}

impl Config {
    /// Seed parameters for the given kind
    pub fn kind(&self, kind: Kind) -> &KindConfig {
        match kind {
            Kind::Prey => &self.prey,
            Kind::Predator => &self.predator,
        }
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.world.size.is_finite() && self.world.size > 0.0) {
            return Err(ConfigError::out_of_range("world.size", self.world.size, "> 0"));
        }
        if !(self.world.proximity >= 0.0 && self.world.combat_radius >= 0.0) {
            return Err(ConfigError::out_of_range(
                "world.proximity",
                self.world.proximity.min(self.world.combat_radius),
                ">= 0",
            ));
        }
        if !(self.speed.initial_time_scale > 0.0) {
            return Err(ConfigError::out_of_range(
                "speed.initial_time_scale",
                self.speed.initial_time_scale,
                "> 0",
            ));
        }
        validate_fast_forward(self.speed.fast_forward)?;
        if self.stats.snapshot_interval == 0 {
            return Err(ConfigError::out_of_range("stats.snapshot_interval", 0.0, ">= 1"));
        }
        self.prey.validate(Kind::Prey)?;
        self.predator.validate(Kind::Predator)?;
        Ok(())
    }
}

/// Fast-forward must be an integer in 1..=10
pub fn validate_fast_forward(value: u32) -> Result<(), ConfigError> {
    if value == 0 || value > MAX_FAST_FORWARD {
        return Err(ConfigError::out_of_range("speed.fast_forward", value as f64, "1 - 10"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_birth_rate_bounds() {
        let mut config = Config::default();
        config.prey.birth_rate = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { ref field, .. }) if field == "prey.birth_rate"
        ));

        config.prey.birth_rate = 0.01;
        assert!(config.validate().is_ok());

        config.predator.birth_rate = 0.011;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seed_ranges() {
        let mut config = Config::default();
        config.predator.health = 0.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.prey.speed = 101.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.prey.damage = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.predator.mutation_rate = -0.1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.prey.population = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fast_forward_bounds() {
        assert!(validate_fast_forward(0).is_err());
        assert!(validate_fast_forward(1).is_ok());
        assert!(validate_fast_forward(10).is_ok());
        assert!(validate_fast_forward(11).is_err());
    }

    #[test]
    fn test_missing_optional_sections() {
        let config = Config::default();
        let mut value = serde_yaml::to_value(&config).unwrap();
        let map = value.as_mapping_mut().unwrap();
        map.remove(&serde_yaml::Value::from("stats"));
        map.remove(&serde_yaml::Value::from("logging"));
        let loaded: Config = serde_yaml::from_value(value).unwrap();
        assert_eq!(loaded.stats.snapshot_interval, 100);
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.predator.health = 0.0;
        std::fs::write(&path, serde_yaml::to_string(&config).unwrap()).unwrap();

        assert!(matches!(Config::from_file(&path), Err(ConfigError::OutOfRange { .. })));
    }
}
