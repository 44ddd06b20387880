//! Simulation thread that runs independently from its observers.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::World;

use super::commands::{SimCommand, SimState, SimulationController};
use super::snapshot::WorldSnapshot;

/// Handle for controlling the simulation thread
pub struct SimulationHandle {
    /// Thread handle
    thread: Option<JoinHandle<()>>,
    /// Channel to send commands to simulation
    command_tx: Sender<SimCommand>,
    /// Channel to receive snapshots from simulation
    snapshot_rx: Receiver<WorldSnapshot>,
    /// Last requested state
    pub state: SimState,
}

impl SimulationHandle {
    /// Spawn a thread that owns `world`. It starts paused.
    pub fn spawn(world: World) -> Self {
        let (command_tx, command_rx) = mpsc::channel();
        let (snapshot_tx, snapshot_rx) = mpsc::channel();

        let thread = thread::spawn(move || {
            run_simulation(world, command_rx, snapshot_tx);
        });

        Self {
            thread: Some(thread),
            command_tx,
            snapshot_rx,
            state: SimState::Paused,
        }
    }

    /// Send a command to the simulation
    pub fn send(&mut self, command: SimCommand) {
        match &command {
            SimCommand::Pause => self.state = SimState::Paused,
            SimCommand::Resume => self.state = SimState::Running,
            SimCommand::Shutdown => self.state = SimState::Stopped,
            _ => {}
        }
        if self.command_tx.send(command).is_err() {
            log::debug!("Simulation thread already exited");
        }
    }

    /// Block until the next snapshot arrives or the thread exits
    pub fn recv_snapshot(&self) -> Option<WorldSnapshot> {
        self.snapshot_rx.recv().ok()
    }

    /// Check if simulation is running
    pub fn is_running(&self) -> bool {
        self.state == SimState::Running
    }

    /// Shutdown the simulation thread
    pub fn shutdown(&mut self) {
        self.send(SimCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("Simulation thread panicked");
            }
        }
    }

    pub fn save_checkpoint(&mut self, path: &str) {
        self.send(SimCommand::SaveCheckpoint(path.to_string()));
    }

    pub fn load_checkpoint(&mut self, path: &str) {
        self.send(SimCommand::LoadCheckpoint(path.to_string()));
    }
}

impl Drop for SimulationHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Main simulation loop running in separate thread
fn run_simulation(
    mut world: World,
    command_rx: Receiver<SimCommand>,
    snapshot_tx: Sender<WorldSnapshot>,
) {
    let mut controller = SimulationController::new();
    world.stats.pause();

    // Send initial snapshot
    let _ = snapshot_tx.send(WorldSnapshot::from_world(&world));

    loop {
        // Commands are only handled between passes
        loop {
            let command = match command_rx.try_recv() {
                Ok(command) => command,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return,
            };
            controller.apply(&command);

            match command {
                SimCommand::Pause | SimCommand::Resume => {}
                SimCommand::Step => {
                    world.tick();
                    let _ = snapshot_tx.send(WorldSnapshot::from_world(&world));
                }
                SimCommand::SetFastForward(value) => match world.set_fast_forward(value) {
                    Ok(()) => log::info!("Fast-forward set to {}", value),
                    Err(e) => log::warn!("Rejected fast-forward {}: {}", value, e),
                },
                SimCommand::SaveCheckpoint(path) => {
                    match world.create_checkpoint().save(&path) {
                        Ok(()) => log::info!("Checkpoint saved: {}", path),
                        Err(e) => log::error!("Checkpoint save failed: {}", e),
                    }
                }
                SimCommand::LoadCheckpoint(path) => match world.load_checkpoint(&path) {
                    Ok(()) => {
                        world.stats.pause();
                        controller.pause();
                        let _ = snapshot_tx.send(WorldSnapshot::from_world(&world));
                    }
                    Err(e) => log::error!("Checkpoint load failed: {}", e),
                },
                SimCommand::Shutdown => {
                    log::info!("Simulation thread stopping at turn {}", world.turn());
                    return;
                }
            }
        }

        if controller.is_running() && world.is_extinct() {
            log::info!("Population extinct at turn {}, pausing", world.turn());
            controller.pause();
        }

        if world.run_controlled(&controller, 1) == 1 {
            if snapshot_tx.send(WorldSnapshot::from_world(&world)).is_err() {
                return;
            }
            thread::yield_now();
        } else {
            // Small sleep to avoid busy-waiting when paused
            thread::sleep(Duration::from_millis(16));
        }
    }
}
