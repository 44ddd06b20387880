//! Snapshot structures for observers of a running simulation.
//!
//! These are lightweight copies of simulation state, cheap to send
//! between the simulation thread and whoever is watching it.

use crate::agent::Kind;
use crate::stats::KindStats;

/// Lightweight view of an agent for rendering
#[derive(Clone, Debug, PartialEq)]
pub struct AgentView {
    pub kind: Kind,
    pub x: f64,
    pub y: f64,
}

/// Complete world snapshot
#[derive(Clone, Debug)]
pub struct WorldSnapshot {
    /// Turns completed
    pub turn: u64,
    /// All agents in turn order
    pub agents: Vec<AgentView>,
    pub predator: KindStats,
    pub prey: KindStats,
    /// Wall-clock seconds, paused time excluded
    pub elapsed_secs: f64,
    pub time_scale: f64,
    pub fast_forward: u32,
}

impl WorldSnapshot {
    /// Create a snapshot from the current world state
    pub fn from_world(world: &crate::World) -> Self {
        let agents = world
            .population
            .iter()
            .map(|a| AgentView {
                kind: a.kind,
                x: a.position.x,
                y: a.position.y,
            })
            .collect();

        Self {
            turn: world.turn(),
            agents,
            predator: world.stats.predator.clone(),
            prey: world.stats.prey.clone(),
            elapsed_secs: world.stats.elapsed().as_secs_f64(),
            time_scale: world.speed.current_factor(),
            fast_forward: world.speed.fast_forward(),
        }
    }

    pub fn kind(&self, kind: Kind) -> &KindStats {
        match kind {
            Kind::Predator => &self.predator,
            Kind::Prey => &self.prey,
        }
    }
}
