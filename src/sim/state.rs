//! Run state and core simulation types
//!
//! One `RunState` is one playthrough, from the first frame to the crash.
//! Restarting means building a new one.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::CollisionResult;
use super::obstacle::ObstacleField;
use super::rng::{GameRng, RandomRange};
use crate::persistence::BestScoreStore;
use crate::platform::{Scheduler, TimerHandle};
use crate::renderer::{Entity, Renderer, SpriteId, Tint};
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Active gameplay
    Playing,
    /// Run ended; simulation frozen until the host replaces this run
    GameOver,
}

/// Things that happened during a tick, for sound/UI hooks and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent {
    /// One flap applied to the body
    Flapped,
    /// A pair was passed; carries the new score
    Scored { score: u32 },
    /// The finished run beat the stored best score
    NewBest { score: u32 },
    /// The run ended
    GameOver {
        cause: CollisionResult,
        score: u32,
        best: u32,
    },
}

/// State of a single run
#[derive(Debug, Clone)]
pub struct RunState<R = GameRng> {
    /// Identifies this run to its restart timer
    pub run_id: u64,
    pub phase: RunPhase,
    /// Pairs passed this run
    pub score: u32,
    /// Best score loaded at start, raised when this run beats it
    pub best_score: u32,
    pub body: Body,
    pub field: ObstacleField,
    /// What ended the run
    pub game_over_cause: Option<CollisionResult>,
    /// Simulation frames advanced while playing
    pub time_ticks: u64,
    pub(super) tuning: Tuning,
    pub(super) rng: R,
    pub(super) restart_timer: Option<TimerHandle>,
}

impl<R: RandomRange> RunState<R> {
    /// Start a run: fresh body, freshly laid out field, best score from the store
    pub fn new(run_id: u64, tuning: &Tuning, mut rng: R, store: &dyn BestScoreStore) -> Self {
        let tuning = tuning.clone().sanitized();
        let body = Body::new(
            tuning.body_start,
            tuning.body_size,
            tuning.gravity,
            tuning.flap_velocity,
        );
        let field = ObstacleField::new(tuning.field_config(), &mut rng);
        let best_score = store.best();

        log::info!("Run {} started (best score {})", run_id, best_score);

        Self {
            run_id,
            phase: RunPhase::Playing,
            score: 0,
            best_score,
            body,
            field,
            game_over_cause: None,
            time_ticks: 0,
            tuning,
            rng,
            restart_timer: None,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == RunPhase::GameOver
    }

    /// Whether a restart timer is still outstanding for this run
    pub fn restart_pending(&self) -> bool {
        self.restart_timer.is_some()
    }

    /// Drop the pending restart timer (the host is discarding this run early)
    pub fn cancel_restart(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.restart_timer.take() {
            scheduler.cancel(handle);
        }
    }

    /// Forget the restart timer after it fired
    pub fn restart_fired(&mut self) {
        self.restart_timer = None;
    }

    /// Report everything on screen to the renderer
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.draw_sprite(SpriteId::Background, 0.0, 0.0);

        for pair in self.field.pairs() {
            renderer.draw_sprite(SpriteId::UpperObstacle, pair.upper.pos.x, pair.upper.pos.y);
            renderer.draw_sprite(SpriteId::LowerObstacle, pair.lower.pos.x, pair.lower.pos.y);
        }

        let tint = if self.body.hit { Tint::HIT } else { Tint::NONE };
        renderer.set_tint(Entity::Body, tint);
        renderer.draw_sprite(SpriteId::Body, self.body.pos.x, self.body.pos.y);

        let w = self.tuning.screen_width;
        let h = self.tuning.screen_height;
        renderer.draw_text(w * 0.02, h * 0.02, &format!("Score: {}", self.score));
        renderer.draw_text(w * 0.02, h * 0.08, &format!("Best Score: {}", self.best_score));
    }
}
