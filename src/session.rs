//! Host loop glue
//!
//! Owns the current run and everything around it: fixed-timestep
//! accumulation, the input queue, timers, pause, and replacing a finished
//! run once its restart timer fires.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::persistence::BestScoreStore;
use crate::platform::{InputEvent, InputQueue, Key, TimerEvent, Timers};
use crate::renderer::Renderer;
use crate::sim::{self, GameRng, RandomRange, RunEvent, RunState, TickInput};
use crate::tuning::Tuning;

/// A sequence of runs sharing one best score store
pub struct Session<S: BestScoreStore> {
    pub run: RunState,
    store: S,
    tuning: Tuning,
    timers: Timers,
    input: InputQueue,
    accumulator: f32,
    paused: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub autopilot: bool,
    /// Seeds the next run's generator
    seeder: GameRng,
    next_run_id: u64,
    runs_completed: u64,
}

impl<S: BestScoreStore> Session<S> {
    pub fn new(tuning: Tuning, store: S, seed: u64) -> Self {
        let tuning = tuning.sanitized();
        let mut seeder = GameRng::new(seed);
        let run = RunState::new(1, &tuning, GameRng::new(next_seed(&mut seeder)), &store);
        Self {
            run,
            store,
            tuning,
            timers: Timers::new(),
            input: InputQueue::new(),
            accumulator: 0.0,
            paused: false,
            autopilot: false,
            seeder,
            next_run_id: 2,
            runs_completed: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Runs that have been replaced by a new one
    pub fn runs_completed(&self) -> u64 {
        self.runs_completed
    }

    /// Queue a raw input event for the next frame. Escape toggles pause.
    pub fn push_input(&mut self, event: InputEvent) {
        if event == InputEvent::KeyDown(Key::Escape) {
            self.toggle_pause();
        } else if !self.paused {
            self.input.push(event);
        }
    }

    /// Freeze or resume everything, timers included
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
    }

    /// Advance by one rendered frame of `dt` seconds
    pub fn frame(&mut self, dt: f32) -> Vec<RunEvent> {
        let mut events = Vec::new();
        if self.paused {
            return events;
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        // Timers see this frame's time before the simulation runs, so a
        // restart scheduled below counts its delay from the end of the frame
        for fired in self.timers.advance(dt as f64 * 1000.0) {
            self.on_timer(fired);
        }

        self.accumulator += dt;

        if self.autopilot {
            self.steer();
        }

        // Input is drained once per frame and applied in the first substep
        let mut input = self.input.drain();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(sim::tick(&mut self.run, &input, SIM_DT, &mut self.store, &mut self.timers));
            input = TickInput::default();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        events
    }

    /// Throw the current run away and start a new one immediately
    pub fn restart_now(&mut self) {
        self.run.cancel_restart(&mut self.timers);
        self.start_run();
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.run.render(renderer);
    }

    fn on_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::RestartRun { run_id } if run_id == self.run.run_id => {
                self.run.restart_fired();
                self.start_run();
            }
            TimerEvent::RestartRun { run_id } => {
                log::debug!("Ignoring restart for discarded run {}", run_id);
            }
        }
    }

    fn start_run(&mut self) {
        let run_id = self.next_run_id;
        self.next_run_id += 1;
        self.runs_completed += 1;
        self.accumulator = 0.0;
        let rng = GameRng::new(next_seed(&mut self.seeder));
        self.run = RunState::new(run_id, &self.tuning, rng, &self.store);
    }

    /// Flap when below the next opening's center and not already rising
    fn steer(&mut self) {
        let body = &self.run.body;
        let Some(pair) = self.run.field.next_pair_after(body.pos.x) else {
            return;
        };
        // Aim a little under the center; a flap overshoots upward
        let target = pair.gap_center() + pair.gap * 0.15;
        if body.center_y() > target && body.vel.y >= 0.0 {
            self.input.push(InputEvent::PointerDown);
        }
    }
}

fn next_seed(seeder: &mut GameRng) -> u64 {
    let hi = seeder.next(0, i32::MAX) as u64;
    let lo = seeder.next(0, i32::MAX) as u64;
    (hi << 32) | lo
}
