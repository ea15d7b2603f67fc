//! Data-driven game balance
//!
//! Every gameplay number in one serializable struct. Defaults come from
//! `consts`; a JSON file may override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::PersistenceError;
use crate::sim::{FieldConfig, IntRange};

/// Game tuning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Body ===
    pub body_start: Vec2,
    pub body_size: Vec2,
    pub gravity: f32,
    pub flap_velocity: f32,

    // === Obstacles ===
    pub obstacle_size: Vec2,
    pub scroll_speed: f32,
    pub obstacle_pairs: usize,
    pub gap_range: IntRange,
    pub spacing_range: IntRange,
    pub vertical_margin: i32,

    // === Flow ===
    pub restart_delay_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            body_start: Vec2::new(BODY_START_X, BODY_START_Y),
            body_size: Vec2::new(BODY_WIDTH, BODY_HEIGHT),
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,

            obstacle_size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            scroll_speed: SCROLL_SPEED,
            obstacle_pairs: OBSTACLE_PAIRS,
            gap_range: GAP_RANGE.into(),
            spacing_range: SPACING_RANGE.into(),
            vertical_margin: VERTICAL_MARGIN,

            restart_delay_ms: RESTART_DELAY_MS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Correct degenerate values so layout never sees an inverted range.
    ///
    /// Each correction is logged; the result is always playable.
    pub fn sanitized(mut self) -> Self {
        let defaults = Tuning::default();

        if !positive(self.screen_width) {
            log::warn!("screen_width {} invalid, using {}", self.screen_width, defaults.screen_width);
            self.screen_width = defaults.screen_width;
        }
        if !positive(self.screen_height) {
            log::warn!("screen_height {} invalid, using {}", self.screen_height, defaults.screen_height);
            self.screen_height = defaults.screen_height;
        }
        if !(positive(self.body_size.x) && positive(self.body_size.y)) {
            log::warn!("body_size {:?} invalid, using {:?}", self.body_size, defaults.body_size);
            self.body_size = defaults.body_size;
        }
        if !(positive(self.obstacle_size.x) && positive(self.obstacle_size.y)) {
            log::warn!("obstacle_size {:?} invalid, using {:?}", self.obstacle_size, defaults.obstacle_size);
            self.obstacle_size = defaults.obstacle_size;
        }
        if self.body_size.y >= self.screen_height {
            log::warn!("body_size {:?} taller than the screen, shrinking", self.body_size);
            self.body_size.y = self.screen_height / 4.0;
        }

        // Start strictly inside the playfield, or the first tick ends the run
        if !(self.body_start.x.is_finite() && self.body_start.y.is_finite()) {
            log::warn!("body_start {:?} invalid, using {:?}", self.body_start, defaults.body_start);
            self.body_start = defaults.body_start;
        }
        let lowest = self.screen_height - self.body_size.y - 1.0;
        if self.body_start.y <= 0.0 || self.body_start.y > lowest {
            let y = if lowest >= 1.0 {
                self.body_start.y.clamp(1.0, lowest)
            } else {
                (self.screen_height - self.body_size.y) / 2.0
            };
            log::warn!("body_start y {} outside the playfield, using {}", self.body_start.y, y);
            self.body_start.y = y;
        }

        if !positive(self.scroll_speed) {
            log::warn!("scroll_speed {} invalid, using {}", self.scroll_speed, defaults.scroll_speed);
            self.scroll_speed = defaults.scroll_speed;
        }
        if !self.gravity.is_finite() {
            self.gravity = defaults.gravity;
        }
        if !self.flap_velocity.is_finite() {
            self.flap_velocity = defaults.flap_velocity;
        }
        if self.obstacle_pairs == 0 {
            log::warn!("obstacle_pairs must be at least 1, using {}", defaults.obstacle_pairs);
            self.obstacle_pairs = defaults.obstacle_pairs;
        }

        // Ranges
        if self.gap_range.min > self.gap_range.max {
            log::warn!("gap_range {:?} reversed, swapping", self.gap_range);
            self.gap_range = self.gap_range.ordered();
        }
        if self.spacing_range.min > self.spacing_range.max {
            log::warn!("spacing_range {:?} reversed, swapping", self.spacing_range);
            self.spacing_range = self.spacing_range.ordered();
        }
        if self.gap_range.min < 1 {
            log::warn!("gap_range {:?} below 1, raising", self.gap_range);
            self.gap_range.min = 1;
            self.gap_range.max = self.gap_range.max.max(1);
        }
        // Pairs closer than one obstacle width would overlap
        let min_spacing = self.obstacle_size.x.ceil() as i32;
        if self.spacing_range.min < min_spacing {
            log::warn!("spacing_range {:?} below obstacle width, raising", self.spacing_range);
            self.spacing_range.min = min_spacing;
            self.spacing_range.max = self.spacing_range.max.max(min_spacing);
        }

        // Gap plus both margins must fit on screen
        let height = self.screen_height as i32;
        if self.vertical_margin < 0 {
            log::warn!("vertical_margin {} negative, using 0", self.vertical_margin);
            self.vertical_margin = 0;
        }
        if self.vertical_margin.saturating_mul(2) >= height {
            log::warn!("vertical_margin {} leaves no room, using 0", self.vertical_margin);
            self.vertical_margin = 0;
        }
        let max_gap = height - 2 * self.vertical_margin;
        if self.gap_range.max > max_gap {
            log::warn!("gap_range {:?} exceeds playable height {}, clamping", self.gap_range, max_gap);
            self.gap_range.max = max_gap;
            self.gap_range.min = self.gap_range.min.min(max_gap);
        }

        self
    }

    /// Obstacle field settings derived from this tuning
    pub fn field_config(&self) -> FieldConfig {
        FieldConfig {
            pair_count: self.obstacle_pairs,
            obstacle_size: self.obstacle_size,
            scroll_speed: self.scroll_speed,
            vertical_range: self.gap_range,
            horizontal_range: self.spacing_range,
            screen_height: self.screen_height as i32,
            vertical_margin: self.vertical_margin,
        }
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
