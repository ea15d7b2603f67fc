//! Obstacle pair placement
//!
//! Pure function: given the rightmost obstacle x and the configured ranges,
//! decide where the next pair goes and how wide its gap is.

use serde::{Deserialize, Serialize};

use super::rng::RandomRange;

/// Inclusive integer range used for random draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Check whether a value lies inside the range
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Range with min/max swapped into order
    pub fn ordered(self) -> Self {
        if self.min <= self.max {
            self
        } else {
            Self::new(self.max, self.min)
        }
    }

    /// Draw a value from this range
    pub fn sample(&self, rng: &mut dyn RandomRange) -> i32 {
        rng.next(self.min, self.max)
    }
}

impl From<(i32, i32)> for IntRange {
    fn from((min, max): (i32, i32)) -> Self {
        Self::new(min, max)
    }
}

/// Where one obstacle pair goes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Left edge shared by the upper and lower obstacle
    pub x: f32,
    /// Bottom edge of the upper obstacle (top of the opening)
    pub gap_top: f32,
    /// Height of the opening; the lower obstacle starts at `gap_top + gap`
    pub gap: f32,
}

impl Placement {
    /// Top edge of the lower obstacle
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap
    }

    /// Vertical center of the opening
    #[inline]
    pub fn gap_center(&self) -> f32 {
        self.gap_top + self.gap / 2.0
    }
}

/// Compute the placement of one obstacle pair.
///
/// Draws happen in a fixed order (gap, opening position, spacing) so a
/// seeded generator always yields the same field. When the gap plus both
/// margins does not fit on screen the opening collapses onto the top margin.
pub fn place(
    rng: &mut dyn RandomRange,
    rightmost_x: f32,
    vertical_range: IntRange,
    horizontal_range: IntRange,
    screen_height: i32,
    vertical_margin: i32,
) -> Placement {
    let gap = vertical_range.sample(rng);

    let margin = vertical_margin.max(0);
    let lowest_top = screen_height - margin - gap;
    let gap_top = if lowest_top >= margin {
        rng.next(margin, lowest_top)
    } else {
        margin
    };

    let spacing = horizontal_range.sample(rng);

    Placement {
        x: rightmost_x + spacing as f32,
        gap_top: gap_top as f32,
        gap: gap as f32,
    }
}
