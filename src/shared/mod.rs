//! Types for driving a simulation from another thread.
//!
//! A `SimulationHandle` owns a `World` on a background thread, accepts
//! `SimCommand`s and publishes `WorldSnapshot`s after every tick.

pub mod commands;
pub mod sim_thread;
pub mod snapshot;

pub use commands::{SimCommand, SimState, SimulationController};
pub use sim_thread::SimulationHandle;
pub use snapshot::{AgentView, WorldSnapshot};
