//! Commands for controlling a running simulation.

use serde::{Deserialize, Serialize};

/// Commands sent from a controlling thread to the simulation thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimCommand {
    /// Pause the simulation
    Pause,
    /// Resume the simulation
    Resume,
    /// Execute a single tick
    Step,
    /// Set the fast-forward multiplier (1 - 10)
    SetFastForward(u32),
    /// Save checkpoint to the given path
    SaveCheckpoint(String),
    /// Load checkpoint from file
    LoadCheckpoint(String),
    /// Shutdown the simulation thread
    Shutdown,
}

/// Current simulation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimState {
    /// Simulation is running
    Running,
    /// Simulation is paused
    #[default]
    Paused,
    /// Simulation has stopped (extinct or shutdown)
    Stopped,
}

/// Run state consulted by the world between passes
#[derive(Debug, Clone, Default)]
pub struct SimulationController {
    state: SimState,
}

impl SimulationController {
    /// New controllers start paused
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimState::Running
    }

    pub fn pause(&mut self) {
        if self.state == SimState::Running {
            self.state = SimState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == SimState::Paused {
            self.state = SimState::Running;
        }
    }

    /// Flip between running and paused. No effect once stopped.
    pub fn toggle_pause(&mut self) {
        match self.state {
            SimState::Running => self.state = SimState::Paused,
            SimState::Paused => self.state = SimState::Running,
            SimState::Stopped => {}
        }
    }

    /// Stopping is final
    pub fn stop(&mut self) {
        self.state = SimState::Stopped;
    }

    /// Apply a command's effect on run state
    pub fn apply(&mut self, command: &SimCommand) {
        match command {
            SimCommand::Pause => self.pause(),
            SimCommand::Resume => self.resume(),
            SimCommand::Shutdown => self.stop(),
            _ => {}
        }
    }
}
