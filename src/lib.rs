//! Flockers - toroidal boid flocking simulation
//!
//! The engine simulates Reynolds' cohesion/separation/alignment rules
//! for a fixed population of point agents on a wrap-around 2D plane.
//! Rendering, video encoding and other presentation concerns consume
//! the per-tick [`Snapshot`](simulation::Snapshot)s; they are not part
//! of this crate.

pub mod core;
pub mod runner;
pub mod simulation;
pub mod spatial;

pub use crate::core::config::FlockingConfig;
pub use crate::core::error::{Result, SimError};
pub use crate::core::types::{BoidId, Tick, Vec2};
pub use crate::simulation::{Boid, FlockModel, Snapshot};
pub use crate::spatial::ToroidalSpace;
