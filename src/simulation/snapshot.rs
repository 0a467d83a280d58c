//! Read-only per-tick view of the whole population
//!
//! This is the engine's sole output contract toward external consumers
//! (renderers, exporters): agent kinematics plus the tick they were
//! taken at, serializable as-is.

use serde::{Deserialize, Serialize};

use crate::core::types::{BoidId, Tick, Vec2};

/// Kinematic state of one agent at snapshot time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoidState {
    pub id: BoidId,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Full-population snapshot taken after `tick` completed ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: Tick,
    pub boids: Vec<BoidState>,
}

impl Snapshot {
    pub fn population(&self) -> usize {
        self.boids.len()
    }
}
