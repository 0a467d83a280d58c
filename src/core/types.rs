//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for boids, assigned densely from zero at spawn time
/// and stable for the agent's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoidId(pub u32);

impl BoidId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Index into dense per-agent storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Simulation tick counter (one tick = every agent activated once)
pub type Tick = u64;

/// 2D position or velocity
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, or `None` for the zero vector
    /// (the zero vector has no direction).
    pub fn normalized(&self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 {
            Some(Self {
                x: self.x / len,
                y: self.y / len,
            })
        } else {
            None
        }
    }

    /// Vector with the same direction scaled to `len`, or `None` for the
    /// zero vector.
    pub fn scaled_to(&self, len: f32) -> Option<Self> {
        self.normalized().map(|unit| unit * len)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
