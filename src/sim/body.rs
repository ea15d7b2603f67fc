//! The player-controlled body
//!
//! Falls under constant gravity; a flap overrides the vertical velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// The falling body the player keeps airborne
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner. Only y changes during a run.
    pub pos: Vec2,
    /// Only the y component is ever non-zero
    pub vel: Vec2,
    pub size: Vec2,
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Upward speed applied by a flap (pixels/s, positive)
    pub flap_velocity: f32,
    /// Set when the run ends on this body (renders tinted)
    #[serde(default)]
    pub hit: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, gravity: f32, flap_velocity: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            gravity,
            flap_velocity,
            hit: false,
        }
    }

    /// Semi-implicit Euler step: velocity first, then position
    pub fn tick(&mut self, dt: f32) {
        self.vel.y += self.gravity * dt;
        self.pos.y += self.vel.y * dt;
    }

    /// Replace the vertical velocity with the flap velocity (upward)
    pub fn flap(&mut self) {
        self.vel.y = -self.flap_velocity;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.pos, self.size)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Vertical center (used by the autopilot)
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> Body {
        Body::new(Vec2::new(80.0, 300.0), Vec2::new(34.0, 24.0), 600.0, 300.0)
    }

    #[test]
    fn test_gravity_applied_before_position() {
        let mut b = body();
        b.tick(0.5);
        // v = 600 * 0.5 = 300, y = 300 + 300 * 0.5
        assert!((b.vel.y - 300.0).abs() < 1e-4);
        assert!((b.pos.y - 450.0).abs() < 1e-4);
    }

    #[test]
    fn test_x_never_moves() {
        let mut b = body();
        for _ in 0..100 {
            b.tick(1.0 / 120.0);
        }
        b.flap();
        b.tick(1.0 / 120.0);
        assert_eq!(b.pos.x, 80.0);
    }

    #[test]
    fn test_flap_overrides_any_velocity() {
        for start in [-1000.0, -300.0, 0.0, 12.5, 5000.0] {
            let mut b = body();
            b.vel.y = start;
            b.flap();
            assert_eq!(b.vel.y, -300.0);
        }
    }

    #[test]
    fn test_flap_takes_effect_next_step() {
        let mut b = body();
        b.vel.y = 200.0;
        b.flap();
        assert_eq!(b.pos.y, 300.0);
        b.tick(0.1);
        // v = -300 + 60 = -240, y = 300 - 24
        assert!((b.pos.y - 276.0).abs() < 1e-4);
    }

    #[test]
    fn test_bounds_follow_position() {
        let mut b = body();
        b.pos.y = 599.0;
        b.size.y = 2.0;
        assert_eq!(b.top(), 599.0);
        assert_eq!(b.bottom(), 601.0);
        let r = b.bounds();
        assert_eq!(r.left(), 80.0);
        assert_eq!(r.right(), 114.0);
        assert_eq!(b.center_y(), 600.0);
    }
}
