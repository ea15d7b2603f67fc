//! Collision detection
//!
//! Everything is an axis-aligned rectangle here, so the whole check is an
//! edge comparison against the screen followed by an overlap test against
//! every obstacle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::obstacle::ObstacleField;

/// Axis-aligned rectangle (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from its top-left corner and size
    pub fn from_origin(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Outcome of a per-frame collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionResult {
    /// Body is clear
    None,
    /// Body touched the top edge or reached the bottom edge
    Bounds,
    /// Body overlaps an obstacle
    Obstacle,
}

impl CollisionResult {
    pub fn is_hit(self) -> bool {
        self != CollisionResult::None
    }
}

/// Check the body against the screen bounds, then against every obstacle.
///
/// Bounds take priority when both apply in the same frame.
pub fn check(body: &Body, field: &ObstacleField, screen_height: f32) -> CollisionResult {
    if body_out_of_bounds(body, screen_height) {
        return CollisionResult::Bounds;
    }

    let bounds = body.bounds();
    if field.obstacles().any(|o| o.bounds().intersects(&bounds)) {
        return CollisionResult::Obstacle;
    }

    CollisionResult::None
}

/// The bottom edge ends the run once it reaches the screen height, the top
/// edge once the body's y reaches 0. Neither edge stops motion.
fn body_out_of_bounds(body: &Body, screen_height: f32) -> bool {
    body.bottom() >= screen_height || body.top() <= 0.0
}
