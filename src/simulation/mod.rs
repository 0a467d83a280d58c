pub mod boid;
pub mod model;
pub mod scheduler;
pub mod snapshot;

pub use boid::{Boid, NeighborView, SteeringWeights};
pub use model::FlockModel;
pub use scheduler::RandomActivation;
pub use snapshot::{BoidState, Snapshot};
