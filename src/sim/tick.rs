//! Per-frame simulation tick
//!
//! Advances a run by one frame: input, gravity, scrolling, recycling,
//! scoring, collision, and the game-over transition.

use super::collision::{self, CollisionResult};
use super::rng::RandomRange;
use super::state::{RunEvent, RunPhase, RunState};
use crate::persistence::BestScoreStore;
use crate::platform::{Scheduler, TimerEvent};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap events received since the last tick; each one flaps once
    pub flaps: u32,
}

impl TickInput {
    pub fn flap() -> Self {
        Self { flaps: 1 }
    }
}

/// Advance the run by `dt` seconds.
///
/// A finished run ignores further ticks.
pub fn tick<R: RandomRange>(
    state: &mut RunState<R>,
    input: &TickInput,
    dt: f32,
    store: &mut dyn BestScoreStore,
    scheduler: &mut dyn Scheduler,
) -> Vec<RunEvent> {
    let mut events = Vec::new();
    if state.phase == RunPhase::GameOver {
        return events;
    }

    state.time_ticks += 1;

    for _ in 0..input.flaps {
        state.body.flap();
        events.push(RunEvent::Flapped);
    }

    state.body.tick(dt);

    state.field.advance(dt);
    // The store is only written at game over; a run abandoned mid-way
    // keeps the previous best
    for _ in state.field.recycle(&mut state.rng) {
        state.score += 1;
        events.push(RunEvent::Scored { score: state.score });
    }

    let hit = collision::check(&state.body, &state.field, state.tuning.screen_height);
    if hit.is_hit() {
        game_over(state, hit, store, scheduler, &mut events);
    }

    events
}

/// Freeze the run, persist a new best and ask for a restart later
fn game_over<R: RandomRange>(
    state: &mut RunState<R>,
    cause: CollisionResult,
    store: &mut dyn BestScoreStore,
    scheduler: &mut dyn Scheduler,
    events: &mut Vec<RunEvent>,
) {
    state.phase = RunPhase::GameOver;
    state.game_over_cause = Some(cause);
    state.body.hit = true;

    if state.score > state.best_score {
        if let Err(e) = store.set(state.score) {
            log::warn!("Failed to save best score {}: {}", state.score, e);
        }
        state.best_score = state.score;
        events.push(RunEvent::NewBest { score: state.score });
    }

    let handle = scheduler.after(
        state.tuning.restart_delay_ms,
        TimerEvent::RestartRun { run_id: state.run_id },
    );
    state.restart_timer = Some(handle);

    log::info!(
        "Run {} over ({:?}): score {}, best {}",
        state.run_id,
        cause,
        state.score,
        state.best_score
    );
    events.push(RunEvent::GameOver {
        cause,
        score: state.score,
        best: state.best_score,
    });
}
