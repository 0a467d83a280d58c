//! Toroidal continuous space for agent positions
//!
//! The space exclusively owns the id -> position mapping. Positions it
//! stores or returns always satisfy `0 <= x < width`, `0 <= y < height`;
//! distance is measured along the shortest wrap-aware path.

use crate::core::error::{Result, SimError};
use crate::core::types::{BoidId, Vec2};

/// Bounded wrap-around 2D plane with radius-bounded neighbor queries
#[derive(Debug, Clone)]
pub struct ToroidalSpace {
    width: f32,
    height: f32,
    /// Current position per agent, indexed by `BoidId`
    positions: Vec<Vec2>,
}

impl ToroidalSpace {
    /// Create an empty space. Dimensions are assumed validated by the
    /// caller (`FlockingConfig::validate`).
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            positions: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// True if `position` lies inside `[0,width) x [0,height)`
    pub fn contains(&self, position: Vec2) -> bool {
        position.x >= 0.0 && position.x < self.width && position.y >= 0.0 && position.y < self.height
    }

    /// Register a new agent at a position already inside bounds.
    ///
    /// Ids register densely in order; the caller wraps coordinates
    /// before first placement. An out-of-bounds position is a caller
    /// error, not something the space silently fixes.
    pub fn place(&mut self, id: BoidId, position: Vec2) -> Result<()> {
        if !self.contains(position) {
            return Err(SimError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            });
        }
        if id.index() != self.positions.len() {
            return Err(SimError::UnknownAgent(id));
        }
        self.positions.push(position);
        Ok(())
    }

    /// Current position of an agent, if it is registered
    pub fn position(&self, id: BoidId) -> Option<Vec2> {
        self.positions.get(id.index()).copied()
    }

    /// Move an agent, wrapping the target into bounds. Always succeeds
    /// for a registered agent; returns the wrapped position actually
    /// stored.
    pub fn relocate(&mut self, id: BoidId, target: Vec2) -> Result<Vec2> {
        let wrapped = self.wrap(target);
        let slot = self
            .positions
            .get_mut(id.index())
            .ok_or(SimError::UnknownAgent(id))?;
        *slot = wrapped;
        Ok(wrapped)
    }

    /// Wrap an arbitrary point into `[0,width) x [0,height)`
    pub fn wrap(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            wrap_axis(point.x, self.width),
            wrap_axis(point.y, self.height),
        )
    }

    /// Shortest wrap-aware distance between two in-bounds points.
    ///
    /// Per axis the separation is the minimum of the direct gap and the
    /// gap through the seam; Euclidean over the two per-axis minima.
    pub fn torus_distance(&self, a: Vec2, b: Vec2) -> f32 {
        let dx = axis_gap(a.x, b.x, self.width);
        let dy = axis_gap(a.y, b.y, self.height);
        (dx * dx + dy * dy).sqrt()
    }

    /// Translate `point` to its toroidal image nearest to `anchor`.
    ///
    /// The result may lie outside bounds; it is meant for local frames
    /// (e.g. averaging neighbor positions around an agent) where the
    /// straight-line vector to the returned image realizes the toroidal
    /// distance.
    pub fn nearest_image(&self, anchor: Vec2, point: Vec2) -> Vec2 {
        Vec2::new(
            nearest_image_axis(anchor.x, point.x, self.width),
            nearest_image_axis(anchor.y, point.y, self.height),
        )
    }

    /// All agents within toroidal `radius` of `center`, excluding
    /// `exclude`, as `(id, stored position)` pairs.
    ///
    /// Brute-force scan in id order: the populations this engine runs
    /// (tens to low hundreds) never justify a grid, and id order keeps
    /// float accumulation downstream deterministic.
    pub fn neighbors_within(&self, center: Vec2, radius: f32, exclude: BoidId) -> Vec<(BoidId, Vec2)> {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(idx, &pos)| {
                let id = BoidId(idx as u32);
                if id == exclude {
                    return None;
                }
                if self.torus_distance(center, pos) <= radius {
                    Some((id, pos))
                } else {
                    None
                }
            })
            .collect()
    }
}

#[inline]
fn wrap_axis(value: f32, extent: f32) -> f32 {
    let mut wrapped = value.rem_euclid(extent);
    // rem_euclid of a tiny negative can round up to the extent itself
    if wrapped >= extent {
        wrapped -= extent;
    }
    wrapped
}

#[inline]
fn axis_gap(a: f32, b: f32, extent: f32) -> f32 {
    let direct = (a - b).abs();
    direct.min(extent - direct)
}

#[inline]
fn nearest_image_axis(anchor: f32, point: f32, extent: f32) -> f32 {
    let delta = point - anchor;
    if delta > extent / 2.0 {
        point - extent
    } else if delta < -extent / 2.0 {
        point + extent
    } else {
        point
    }
}
