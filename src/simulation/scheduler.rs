//! Random-activation scheduler
//!
//! One step activates every registered agent exactly once, in an order
//! freshly shuffled from the run's RNG. Activations mutate shared state
//! in place, so an agent late in the permutation sees the already-moved
//! positions of agents before it. That sequential semantic is the
//! model's deliberate update policy, not an accident (a synchronous
//! compute-all-then-apply-all barrier produces different dynamics).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::error::Result;
use crate::core::types::{BoidId, Tick};

/// Ordered agent roster with a per-tick shuffled activation order
#[derive(Debug, Clone, Default)]
pub struct RandomActivation {
    agents: Vec<BoidId>,
    ticks: Tick,
}

impl RandomActivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent; membership is fixed once the run starts.
    pub fn add(&mut self, id: BoidId) {
        self.agents.push(id);
    }

    pub fn agents(&self) -> &[BoidId] {
        &self.agents
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> Tick {
        self.ticks
    }

    /// Run one tick: draw a fresh permutation, activate each agent once,
    /// then advance the tick counter. Runs to completion before
    /// returning; there is no suspension mid-tick.
    pub fn step<R, F>(&mut self, rng: &mut R, mut activate: F) -> Result<()>
    where
        R: Rng,
        F: FnMut(BoidId) -> Result<()>,
    {
        let mut order = self.agents.clone();
        order.shuffle(rng);
        for id in order {
            activate(id)?;
        }
        self.ticks += 1;
        Ok(())
    }
}
