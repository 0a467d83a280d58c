//! Flocker model - agent creation, placement and scheduling
//!
//! Composes the toroidal space, the boid population and the
//! random-activation scheduler, and owns the run's RNG. A single seed
//! fully determines a run: it drives initial placement, initial
//! headings and every per-tick activation order.

use rand::rngs::OsRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::FlockingConfig;
use crate::core::error::Result;
use crate::core::types::{BoidId, Tick, Vec2};
use crate::simulation::boid::{Boid, NeighborView, SteeringWeights};
use crate::simulation::scheduler::RandomActivation;
use crate::simulation::snapshot::{BoidState, Snapshot};
use crate::spatial::ToroidalSpace;

/// The flocking simulation
pub struct FlockModel {
    config: FlockingConfig,
    space: ToroidalSpace,
    boids: Vec<Boid>,
    scheduler: RandomActivation,
    /// Run RNG, never a global (deterministic per seed)
    rng: ChaCha8Rng,
    /// The seed actually in use, recorded even when drawn from entropy
    seed: u64,
}

impl FlockModel {
    /// Create a model with `config.population` boids at uniformly random
    /// positions and raw component-uniform headings in `[-1, 1)`.
    ///
    /// Initial velocities deliberately keep their drawn magnitude; the
    /// first steering update with a non-zero sum renormalizes them to
    /// `speed`, so an isolated boid keeps its raw magnitude until then.
    pub fn new(config: FlockingConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| OsRng.gen());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut agents = Vec::with_capacity(config.population);
        for _ in 0..config.population {
            let position = Vec2::new(
                rng.gen::<f32>() * config.width,
                rng.gen::<f32>() * config.height,
            );
            let velocity = Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            agents.push((position, velocity));
        }

        Self::build(config, seed, rng, agents)
    }

    /// Create a model from explicit `(position, velocity)` pairs, for
    /// scripted scenarios and tests that need pinned agents. The number
    /// of pairs becomes the population; `config.population` is ignored.
    /// Positions must already be inside bounds.
    pub fn with_agents(config: FlockingConfig, agents: Vec<(Vec2, Vec2)>) -> Result<Self> {
        let config = FlockingConfig {
            population: agents.len(),
            ..config
        };
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| OsRng.gen());
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Self::build(config, seed, rng, agents)
    }

    fn build(
        config: FlockingConfig,
        seed: u64,
        rng: ChaCha8Rng,
        agents: Vec<(Vec2, Vec2)>,
    ) -> Result<Self> {
        let mut space = ToroidalSpace::new(config.width, config.height);
        let mut scheduler = RandomActivation::new();
        let weights = SteeringWeights {
            cohere: config.cohere,
            separate: config.separate,
            match_velocity: config.match_velocity,
        };

        let mut boids = Vec::with_capacity(agents.len());
        for (index, (position, velocity)) in agents.into_iter().enumerate() {
            let id = BoidId(index as u32);
            // random draws land in [0, extent) already, but a rounding
            // artifact at the boundary must not abort the run
            let position = space.wrap(position);
            space.place(id, position)?;
            scheduler.add(id);
            boids.push(Boid::new(
                id,
                position,
                velocity,
                config.speed,
                config.vision,
                config.separation,
                weights,
            ));
        }

        tracing::info!(
            population = boids.len(),
            seed,
            "spawned flock in {}x{} space",
            config.width,
            config.height
        );

        Ok(Self {
            config,
            space,
            boids,
            scheduler,
            rng,
            seed,
        })
    }

    /// Advance the whole population by one tick.
    ///
    /// Activations run sequentially in the freshly shuffled order;
    /// each boid observes the partially-updated world left behind by
    /// the agents activated before it.
    pub fn step(&mut self) -> Result<()> {
        let space = &mut self.space;
        let boids = &mut self.boids;
        self.scheduler
            .step(&mut self.rng, |id| Self::activate(space, boids, id))
    }

    fn activate(space: &mut ToroidalSpace, boids: &mut [Boid], id: BoidId) -> Result<()> {
        let (position, vision) = {
            let boid = &boids[id.index()];
            (boid.position, boid.vision_radius)
        };

        let neighbors: Vec<NeighborView> = space
            .neighbors_within(position, vision, id)
            .into_iter()
            .map(|(neighbor_id, raw_position)| NeighborView {
                position: space.nearest_image(position, raw_position),
                velocity: boids[neighbor_id.index()].velocity,
                distance: space.torus_distance(position, raw_position),
            })
            .collect();

        let next_velocity = boids[id.index()].steer(&neighbors);
        let wrapped = space.relocate(id, position + next_velocity)?;

        let boid = &mut boids[id.index()];
        boid.velocity = next_velocity;
        boid.position = wrapped;
        Ok(())
    }

    /// Current `(id, position, velocity)` for every agent
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.scheduler.ticks(),
            boids: self
                .boids
                .iter()
                .map(|boid| BoidState {
                    id: boid.id,
                    position: boid.position,
                    velocity: boid.velocity,
                })
                .collect(),
        }
    }

    pub fn config(&self) -> &FlockingConfig {
        &self.config
    }

    /// Ticks completed so far
    pub fn tick(&self) -> Tick {
        self.scheduler.ticks()
    }

    /// The seed this run uses (recorded for reproducibility)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn space(&self) -> &ToroidalSpace {
        &self.space
    }
}
