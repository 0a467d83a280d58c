//! Single flocking agent and the Reynolds steering rule
//!
//! A boid blends three drives over its vision neighborhood: cohere
//! toward the mean neighbor position, separate from neighbors closer
//! than the separation radius, and match the mean neighbor velocity.
//! The blend is added to the current velocity and renormalized to the
//! cruise speed.

use serde::{Deserialize, Serialize};

use crate::core::types::{BoidId, Vec2};

/// Relative importance of the three steering drives
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SteeringWeights {
    pub cohere: f32,
    pub separate: f32,
    pub match_velocity: f32,
}

/// What a boid sees of one neighbor.
///
/// `position` is the neighbor translated to its toroidal image nearest
/// to the observing boid, so a flock straddling the wrap seam averages
/// correctly. `distance` is the toroidal distance, which the straight
/// line to that image realizes.
#[derive(Debug, Clone, Copy)]
pub struct NeighborView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub distance: f32,
}

/// One flocking agent
#[derive(Debug, Clone)]
pub struct Boid {
    pub id: BoidId,
    /// Cached copy of the space's entry, written back after each move
    pub position: Vec2,
    /// Renormalized to `speed` after every update with a non-zero
    /// steering sum. The raw creation-time velocity keeps its drawn
    /// magnitude until the first such update.
    pub velocity: Vec2,
    pub speed: f32,
    pub vision_radius: f32,
    pub separation_radius: f32,
    pub weights: SteeringWeights,
}

impl Boid {
    pub fn new(
        id: BoidId,
        position: Vec2,
        velocity: Vec2,
        speed: f32,
        vision_radius: f32,
        separation_radius: f32,
        weights: SteeringWeights,
    ) -> Self {
        Self {
            id,
            position,
            velocity,
            speed,
            vision_radius,
            separation_radius,
            weights,
        }
    }

    /// Compute the next velocity from the current neighborhood.
    ///
    /// With no neighbors the boid keeps flying straight: the velocity is
    /// returned unchanged, magnitude included. If the steering sum comes
    /// out exactly zero there is no direction to renormalize to, so the
    /// previous velocity is kept as-is.
    pub fn steer(&self, neighbors: &[NeighborView]) -> Vec2 {
        if neighbors.is_empty() {
            return self.velocity;
        }

        let count = neighbors.len() as f32;
        let mut position_sum = Vec2::ZERO;
        let mut velocity_sum = Vec2::ZERO;
        let mut repulsion = Vec2::ZERO;

        for neighbor in neighbors {
            position_sum += neighbor.position;
            velocity_sum += neighbor.velocity;
            if neighbor.distance <= self.separation_radius {
                repulsion += self.position - neighbor.position;
            }
        }

        let cohere = (position_sum * (1.0 / count) - self.position) * self.weights.cohere;
        let separate = repulsion * self.weights.separate;
        let match_velocity =
            (velocity_sum * (1.0 / count) - self.velocity) * self.weights.match_velocity;

        let sum = self.velocity + cohere + separate + match_velocity;
        match sum.scaled_to(self.speed) {
            Some(next) => next,
            None => self.velocity,
        }
    }
}
