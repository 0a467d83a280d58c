//! Simulation configuration with documented parameters
//!
//! These are the knobs a flocking run exposes; the defaults are the
//! nominal tuning. Changing them alters flock dynamics (tighter
//! flocks, faster dispersal, etc.).

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Configuration for one flocking run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockingConfig {
    /// Number of boids; the population is fixed for the run
    pub population: usize,

    /// Width of the toroidal space (world units)
    pub width: f32,

    /// Height of the toroidal space (world units)
    pub height: f32,

    /// Cruise speed every boid is renormalized to after steering
    pub speed: f32,

    /// Neighbor-query cutoff for cohesion and velocity matching
    pub vision: f32,

    /// Tighter cutoff within vision for the repulsion term.
    /// Must not exceed `vision`.
    pub separation: f32,

    /// Weight of the drive toward the mean neighbor position
    pub cohere: f32,

    /// Weight of the drive away from too-close neighbors
    pub separate: f32,

    /// Weight of the drive toward the mean neighbor velocity
    #[serde(rename = "match", alias = "match_velocity")]
    pub match_velocity: f32,

    /// Seed for the run's RNG. `None` draws one from OS entropy; the
    /// model records whichever seed it ends up using, so every run is
    /// reproducible after the fact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for FlockingConfig {
    fn default() -> Self {
        Self {
            population: 100,
            width: 100.0,
            height: 100.0,
            speed: 1.0,
            vision: 10.0,
            separation: 2.0,
            cohere: 0.025,
            separate: 0.25,
            match_velocity: 0.04,
            seed: None,
        }
    }
}

impl FlockingConfig {
    /// Validate configuration for internal consistency.
    ///
    /// Called once at model construction; a bad configuration is fatal
    /// to the run.
    pub fn validate(&self) -> Result<()> {
        if self.population == 0 {
            return Err(SimError::InvalidConfig(
                "population must be positive".into(),
            ));
        }

        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "space dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if self.speed < 0.0 || self.vision < 0.0 || self.separation < 0.0 {
            return Err(SimError::InvalidConfig(
                "speed, vision and separation must be non-negative".into(),
            ));
        }

        if self.separation > self.vision {
            return Err(SimError::InvalidConfig(format!(
                "separation ({}) must be <= vision ({})",
                self.separation, self.vision
            )));
        }

        Ok(())
    }
}
