//! Ordered collection of live agents.
//!
//! Iteration order is insertion order. During a turn the engine walks the
//! sequence by index: removing an agent shifts the next one into its slot,
//! and newborns are appended so that agents later in the same pass can see them.

use crate::agent::{Agent, Kind};
use serde::{Deserialize, Serialize};
use std::iter::Chain;
use std::slice::{Iter, IterMut};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    pub fn push(&mut self, agent: Agent) {
        self.agents.push(agent);
    }

    /// Remove the agent at `index`, shifting later agents down one slot
    pub fn remove(&mut self, index: usize) -> Agent {
        self.agents.remove(index)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Agent> {
        self.agents.get_mut(index)
    }

    pub fn iter(&self) -> Iter<'_, Agent> {
        self.agents.iter()
    }

    /// Number of live agents of one kind
    pub fn count(&self, kind: Kind) -> usize {
        self.agents.iter().filter(|a| a.kind == kind).count()
    }

    /// Borrow the agent at `index` mutably alongside everyone else
    pub fn split(&mut self, index: usize) -> Option<(&mut Agent, Others<'_>)> {
        if index >= self.agents.len() {
            return None;
        }
        let (before, rest) = self.agents.split_at_mut(index);
        let (agent, after) = rest.split_first_mut()?;
        Some((agent, Others { before, after }))
    }
}

impl From<Vec<Agent>> for Population {
    fn from(agents: Vec<Agent>) -> Self {
        Self { agents }
    }
}

/// Every agent except the one currently taking its turn
pub struct Others<'a> {
    before: &'a mut [Agent],
    after: &'a mut [Agent],
}

impl<'a> Others<'a> {
    pub fn iter(&self) -> Chain<Iter<'_, Agent>, Iter<'_, Agent>> {
        self.before.iter().chain(self.after.iter())
    }

    pub fn iter_mut(&mut self) -> Chain<IterMut<'_, Agent>, IterMut<'_, Agent>> {
        self.before.iter_mut().chain(self.after.iter_mut())
    }
}
