//! Checkpoint system for saving and loading simulation state.

use crate::agent::Kind;
use crate::config::{validate_fast_forward, Config};
use crate::population::Population;
use crate::speed::SpeedScale;
use crate::stats::StatsTracker;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub use crate::error::CheckpointError;

const MAGIC: &[u8; 4] = b"ALFE";

/// Complete simulation state for checkpointing
#[derive(Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Version for compatibility checking
    pub version: u32,
    /// Configuration
    pub config: Config,
    /// All live agents in turn order
    pub population: Population,
    /// Counters, means, history and elapsed time
    pub stats: StatsTracker,
    /// Movement scaling state
    pub speed: SpeedScale,
    /// Random seed (for reproducibility)
    pub random_seed: u64,
    /// RNG state, so a resumed run continues the same stream
    pub rng: ChaCha8Rng,
}

impl Checkpoint {
    /// Current checkpoint version
    pub const VERSION: u32 = 1;

    /// Create a new checkpoint
    pub fn new(
        config: Config,
        population: Population,
        stats: StatsTracker,
        speed: SpeedScale,
        random_seed: u64,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            version: Self::VERSION,
            config,
            population,
            stats,
            speed,
            random_seed,
            rng,
        }
    }

    /// Turn the checkpoint was taken at
    pub fn turn(&self) -> u64 {
        self.stats.turn
    }

    /// Save checkpoint to binary file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CheckpointError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(MAGIC)?;
        let encoded = bincode::serialize(self)?;
        writer.write_all(&encoded)?;
        writer.flush()?;

        Ok(())
    }

    /// Load checkpoint from binary file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CheckpointError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Self::from_bytes(&buffer)
    }

    /// Decode a checkpoint from an in-memory buffer
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let Some(payload) = bytes.strip_prefix(MAGIC.as_slice()) else {
            return Err(CheckpointError::InvalidFormat("Invalid magic bytes".to_string()));
        };

        let checkpoint: Checkpoint = bincode::deserialize(payload)?;

        if checkpoint.version != Self::VERSION {
            return Err(CheckpointError::VersionMismatch {
                expected: Self::VERSION,
                found: checkpoint.version,
            });
        }

        checkpoint.check_contents()?;
        Ok(checkpoint)
    }

    /// Reject decoded state the engine cannot run from
    fn check_contents(&self) -> Result<(), CheckpointError> {
        let invalid = |reason: String| Err(CheckpointError::InvalidFormat(reason));

        if let Err(e) = self.config.validate() {
            return invalid(format!("config: {}", e));
        }
        if let Err(e) = validate_fast_forward(self.speed.fast_forward()) {
            return invalid(e.to_string());
        }
        let time_scale = self.speed.current_factor();
        if !(time_scale.is_finite() && time_scale > 0.0) {
            return invalid(format!("time scale {} must be finite and > 0", time_scale));
        }
        if self.stats.history.interval == 0 {
            return invalid("snapshot interval is 0".to_string());
        }
        for kind in Kind::ALL {
            let live = self.population.count(kind);
            let counted = self.stats.population(kind);
            if live != counted {
                return invalid(format!(
                    "{} count {} does not match {} live agents",
                    kind, counted, live
                ));
            }
        }
        Ok(())
    }

    /// Get approximate size in bytes
    pub fn size_bytes(&self) -> usize {
        bincode::serialized_size(self).unwrap_or(0) as usize + MAGIC.len()
    }
}

/// Checkpoint manager for automatic saving
pub struct CheckpointManager {
    /// Base directory for checkpoints
    pub base_dir: String,
    /// Interval between checkpoints (turns)
    pub interval: u64,
    /// Maximum checkpoints to keep
    pub max_checkpoints: usize,
    /// Last checkpoint turn
    last_checkpoint: u64,
}

impl CheckpointManager {
    /// Create a new checkpoint manager
    pub fn new(base_dir: String, interval: u64, max_checkpoints: usize) -> Self {
        if let Err(e) = std::fs::create_dir_all(&base_dir) {
            log::warn!("Could not create checkpoint directory {}: {}", base_dir, e);
        }

        Self {
            base_dir,
            interval,
            max_checkpoints,
            last_checkpoint: 0,
        }
    }

    /// Check if a checkpoint should be saved
    pub fn should_save(&self, turn: u64) -> bool {
        self.interval > 0 && turn > 0 && turn % self.interval == 0 && turn != self.last_checkpoint
    }

    /// Generate checkpoint filename
    pub fn checkpoint_path(&self, turn: u64) -> String {
        format!("{}/checkpoint_{:08}.bin", self.base_dir, turn)
    }

    /// Save checkpoint and update state
    pub fn save(&mut self, checkpoint: &Checkpoint) -> Result<String, CheckpointError> {
        let path = self.checkpoint_path(checkpoint.turn());
        checkpoint.save(&path)?;
        self.last_checkpoint = checkpoint.turn();

        self.cleanup()?;

        Ok(path)
    }

    fn checkpoint_entries(&self) -> std::io::Result<Vec<std::fs::DirEntry>> {
        Ok(std::fs::read_dir(&self.base_dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with("checkpoint_")
            })
            .collect())
    }

    /// Remove old checkpoints beyond max limit
    fn cleanup(&self) -> Result<(), CheckpointError> {
        let mut checkpoints = self.checkpoint_entries()?;

        if checkpoints.len() > self.max_checkpoints {
            // Zero-padded turn numbers sort chronologically
            checkpoints.sort_by_key(|e| e.file_name());

            let to_remove = checkpoints.len() - self.max_checkpoints;
            for entry in checkpoints.into_iter().take(to_remove) {
                std::fs::remove_file(entry.path())?;
            }
        }

        Ok(())
    }
}
