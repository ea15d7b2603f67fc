//! Obstacle field
//!
//! A fixed pool of upper/lower obstacle pairs scrolling left. Pairs are never
//! created or destroyed after allocation: once a pair is fully off the left
//! edge it is moved back behind the rightmost pair with a fresh gap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::layout::{IntRange, Placement, place};
use super::rng::RandomRange;
use crate::consts::*;

/// Which half of a pair an obstacle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleRole {
    /// Hangs from above; anchored at its bottom-left corner
    Upper,
    /// Stands below; anchored at its top-left corner
    Lower,
}

/// One immovable obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub role: ObstacleRole,
    /// Left edge and the y of the edge facing the gap
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn new(role: ObstacleRole, size: Vec2) -> Self {
        Self {
            role,
            pos: Vec2::ZERO,
            size,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self.role {
            ObstacleRole::Upper => Rect::new(
                Vec2::new(self.pos.x, self.pos.y - self.size.y),
                Vec2::new(self.pos.x + self.size.x, self.pos.y),
            ),
            ObstacleRole::Lower => Rect::from_origin(self.pos, self.size),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Fully past the left edge of the screen
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right() <= 0.0
    }
}

/// Upper and lower obstacle sharing an x, with the gap between them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub upper: Obstacle,
    pub lower: Obstacle,
    pub gap: f32,
}

impl ObstaclePair {
    pub fn new(size: Vec2) -> Self {
        Self {
            upper: Obstacle::new(ObstacleRole::Upper, size),
            lower: Obstacle::new(ObstacleRole::Lower, size),
            gap: 0.0,
        }
    }

    /// Move both halves to a new placement
    pub fn apply(&mut self, placement: Placement) {
        self.upper.pos = Vec2::new(placement.x, placement.gap_top);
        self.lower.pos = Vec2::new(placement.x, placement.gap_bottom());
        self.gap = placement.gap;
    }

    /// Left edge shared by both halves
    #[inline]
    pub fn x(&self) -> f32 {
        self.upper.pos.x
    }

    /// Top edge of the opening
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.upper.pos.y
    }

    /// Vertical center of the opening
    #[inline]
    pub fn gap_center(&self) -> f32 {
        self.upper.pos.y + self.gap / 2.0
    }

    /// Both halves are past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.upper.is_off_screen() && self.lower.is_off_screen()
    }
}

/// Field geometry and randomization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    pub pair_count: usize,
    pub obstacle_size: Vec2,
    /// Leftward speed (pixels/s)
    pub scroll_speed: f32,
    pub vertical_range: IntRange,
    pub horizontal_range: IntRange,
    pub screen_height: i32,
    pub vertical_margin: i32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            pair_count: OBSTACLE_PAIRS,
            obstacle_size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            scroll_speed: SCROLL_SPEED,
            vertical_range: GAP_RANGE.into(),
            horizontal_range: SPACING_RANGE.into(),
            screen_height: SCREEN_HEIGHT as i32,
            vertical_margin: VERTICAL_MARGIN,
        }
    }
}

/// Fixed-size pool of obstacle pairs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    config: FieldConfig,
    pairs: Vec<ObstaclePair>,
}

impl ObstacleField {
    /// Allocate the pool and lay out every pair
    pub fn new(config: FieldConfig, rng: &mut dyn RandomRange) -> Self {
        let pairs = (0..config.pair_count)
            .map(|_| ObstaclePair::new(config.obstacle_size))
            .collect();
        let mut field = Self { config, pairs };
        field.initialize(rng);
        field
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn pairs(&self) -> &[ObstaclePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Every obstacle, upper before lower, in pair order
    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.pairs.iter().flat_map(|p| [&p.upper, &p.lower])
    }

    /// Place all pairs left to right, each behind the ones already placed
    pub fn initialize(&mut self, rng: &mut dyn RandomRange) {
        // Park everything at the origin so stale positions don't leak into
        // the rightmost scan
        for pair in &mut self.pairs {
            pair.apply(Placement {
                x: 0.0,
                gap_top: 0.0,
                gap: 0.0,
            });
        }
        for i in 0..self.pairs.len() {
            let placement = self.next_placement(rng);
            self.pairs[i].apply(placement);
        }
    }

    /// Scroll every obstacle left by `scroll_speed * dt`
    pub fn advance(&mut self, dt: f32) {
        let dx = self.config.scroll_speed * dt;
        for pair in &mut self.pairs {
            pair.upper.pos.x -= dx;
            pair.lower.pos.x -= dx;
        }
    }

    /// Discrete-frame scrolling: a fixed decrement per simulation frame
    pub fn advance_frames(&mut self, frames: u32) {
        for _ in 0..frames {
            self.advance(SIM_DT);
        }
    }

    /// Re-place every pair whose halves are both off the left edge.
    ///
    /// Returns the indices of recycled pairs in scan order; each entry is one
    /// pair passed by the player.
    pub fn recycle(&mut self, rng: &mut dyn RandomRange) -> Vec<usize> {
        let mut recycled = Vec::new();
        for i in 0..self.pairs.len() {
            if !self.pairs[i].is_off_screen() {
                continue;
            }
            let placement = self.next_placement(rng);
            self.pairs[i].apply(placement);
            log::debug!(
                "Recycled pair {} -> x={:.0} gap_top={:.0} gap={:.0}",
                i,
                placement.x,
                placement.gap_top,
                placement.gap
            );
            recycled.push(i);
        }
        recycled
    }

    /// Largest obstacle x in the field (never below 0)
    pub fn rightmost_x(&self) -> f32 {
        self.obstacles().fold(0.0_f32, |acc, o| acc.max(o.pos.x))
    }

    /// First pair whose right edge is still ahead of `x`, nearest first
    pub fn next_pair_after(&self, x: f32) -> Option<&ObstaclePair> {
        self.pairs
            .iter()
            .filter(|p| p.upper.right() > x)
            .min_by(|a, b| a.x().total_cmp(&b.x()))
    }

    fn next_placement(&self, rng: &mut dyn RandomRange) -> Placement {
        place(
            rng,
            self.rightmost_x(),
            self.config.vertical_range,
            self.config.horizontal_range,
            self.config.screen_height,
            self.config.vertical_margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{GameRng, ScriptedRng};
    use proptest::prelude::*;

    /// gap 200, opening at 100, spacing 500 for every pair
    fn scripted_field() -> ObstacleField {
        let mut rng = ScriptedRng::new(vec![200, 100, 500]);
        ObstacleField::new(FieldConfig::default(), &mut rng)
    }

    #[test]
    fn test_initialize_places_left_to_right() {
        let field = scripted_field();
        assert_eq!(field.len(), 4);
        let xs: Vec<f32> = field.pairs().iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![500.0, 1000.0, 1500.0, 2000.0]);
        assert_eq!(field.rightmost_x(), 2000.0);
    }

    #[test]
    fn test_pair_geometry() {
        let field = scripted_field();
        let pair = &field.pairs()[0];
        assert_eq!(pair.upper.pos.x, pair.lower.pos.x);
        assert_eq!(pair.lower.pos.y, pair.upper.pos.y + pair.gap);
        assert_eq!(pair.upper.bounds().bottom(), 100.0);
        assert_eq!(pair.upper.bounds().top(), 100.0 - OBSTACLE_HEIGHT);
        assert_eq!(pair.lower.bounds().top(), 300.0);
        assert_eq!(pair.gap_center(), 200.0);
    }

    #[test]
    fn test_initialize_random_invariants() {
        let mut rng = GameRng::new(12345);
        let field = ObstacleField::new(FieldConfig::default(), &mut rng);
        let mut prev_x = 0.0;
        for pair in field.pairs() {
            let spacing = pair.x() - prev_x;
            assert!((500.0..=550.0).contains(&spacing));
            assert!((150.0..=250.0).contains(&pair.gap));
            assert!(pair.gap_top() >= 20.0);
            assert!(pair.gap_top() <= 600.0 - 20.0 - pair.gap);
            prev_x = pair.x();
        }
    }

    #[test]
    fn test_advance_scrolls_every_obstacle() {
        let mut field = scripted_field();
        field.advance(0.5);
        let xs: Vec<f32> = field.pairs().iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![400.0, 900.0, 1400.0, 1900.0]);
        assert!(field.pairs().iter().all(|p| p.upper.pos.x == p.lower.pos.x));
    }

    #[test]
    fn test_advance_frames_matches_fixed_step() {
        let mut a = scripted_field();
        let mut b = scripted_field();
        a.advance_frames(120);
        for _ in 0..120 {
            b.advance(SIM_DT);
        }
        assert_eq!(a.pairs()[0].x(), b.pairs()[0].x());
        assert!((a.pairs()[0].x() - 300.0).abs() < 0.01);
    }

    #[test]
    fn test_partially_off_screen_is_kept() {
        let mut field = scripted_field();
        // x = 500 - 510 = -10, right edge = 16 > 0
        field.advance(510.0 / SCROLL_SPEED);
        let mut rng = ScriptedRng::new(vec![200, 100, 500]);
        assert!(field.recycle(&mut rng).is_empty());
        assert!(field.pairs()[0].x() < 0.0);
    }

    #[test]
    fn test_recycle_exactly_one_pair() {
        let mut field = scripted_field();
        let mut rng = ScriptedRng::new(vec![180, 50, 520]);
        // Step at 200 px/s until pair 0's right edge crosses 0
        let mut steps = 0;
        while field.pairs()[0].upper.right() > 0.0 {
            field.advance(SIM_DT);
            steps += 1;
            assert!(steps < 10_000);
        }
        let rightmost = field.rightmost_x();
        let recycled = field.recycle(&mut rng);
        assert_eq!(recycled, vec![0]);
        assert_eq!(field.len(), 4);

        let pair = &field.pairs()[0];
        assert!((pair.x() - (rightmost + 520.0)).abs() < 1e-3);
        assert_eq!(pair.gap, 180.0);
        assert_eq!(pair.gap_top(), 50.0);
        // Others untouched
        assert!(field.pairs()[1].x() < rightmost);
    }

    #[test]
    fn test_recycle_several_pairs_chain_right() {
        let mut field = scripted_field();
        // Pairs 0 and 1 fully off (x = -530 and -30)
        field.advance(1030.0 / SCROLL_SPEED);
        let mut rng = ScriptedRng::new(vec![200, 100, 500]);
        let recycled = field.recycle(&mut rng);
        assert_eq!(recycled, vec![0, 1]);
        let xs: Vec<f32> = field.pairs().iter().map(|p| p.x()).collect();
        // 2000 - 1030 = 970 rightmost before recycling
        assert!((xs[0] - 1470.0).abs() < 1e-2);
        assert!((xs[1] - 1970.0).abs() < 1e-2);
    }

    #[test]
    fn test_rightmost_never_negative() {
        let mut field = scripted_field();
        field.advance(100.0);
        assert_eq!(field.rightmost_x(), 0.0);
    }

    #[test]
    fn test_next_pair_after() {
        let field = scripted_field();
        assert_eq!(field.next_pair_after(80.0).map(|p| p.x()), Some(500.0));
        assert_eq!(field.next_pair_after(600.0).map(|p| p.x()), Some(1000.0));
        assert!(field.next_pair_after(5000.0).is_none());
    }

    proptest! {
        #[test]
        fn prop_recycle_keeps_pool_and_only_moves_off_screen_pairs(
            seed in any::<u64>(),
            steps in 1usize..2000,
        ) {
            let mut rng = GameRng::new(seed);
            let mut field = ObstacleField::new(FieldConfig::default(), &mut rng);
            for _ in 0..steps {
                field.advance(SIM_DT * 4.0);
                let before: Vec<(f32, bool)> = field
                    .pairs()
                    .iter()
                    .map(|p| (p.x(), p.is_off_screen()))
                    .collect();
                let recycled = field.recycle(&mut rng);
                prop_assert_eq!(field.len(), 4);
                for (i, (x, off)) in before.iter().enumerate() {
                    if recycled.contains(&i) {
                        prop_assert!(*off);
                    } else {
                        prop_assert!(!*off);
                        prop_assert_eq!(field.pairs()[i].x(), *x);
                    }
                }
            }
        }
    }
}
