//! Browser bindings (WASM only)
//!
//! The page owns the canvas and the animation frame loop; it forwards input
//! and frame time here and reads back what to draw.

use wasm_bindgen::prelude::*;

use crate::persistence::LocalStorageStore;
use crate::platform::{InputEvent, Key};
use crate::renderer::{DrawCommand, RecordingRenderer};
use crate::session::Session;
use crate::sim::RunPhase;
use crate::tuning::Tuning;

/// Game instance driven from JavaScript
#[wasm_bindgen]
pub struct WebGame {
    session: Session<LocalStorageStore>,
    frame: RecordingRenderer,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> WebGame {
        init();
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            session: Session::new(Tuning::default(), LocalStorageStore::new(), seed),
            frame: RecordingRenderer::new(),
        }
    }

    /// Flap, e.g. on pointer down anywhere on the canvas
    pub fn flap(&mut self) {
        self.session.push_input(InputEvent::PointerDown);
    }

    /// `KeyboardEvent.code` of a key press; Escape toggles pause
    pub fn key_down(&mut self, code: &str) {
        self.session.push_input(InputEvent::KeyDown(Key::from_code(code)));
    }

    pub fn toggle_pause(&mut self) {
        self.session.toggle_pause();
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.session.autopilot = enabled;
    }

    /// Advance by `dt` seconds and return this frame's draw list as JSON
    pub fn frame(&mut self, dt: f32) -> String {
        self.session.frame(dt);
        self.frame.clear();
        self.session.render(&mut self.frame);
        serde_json::to_string::<Vec<DrawCommand>>(&self.frame.commands).unwrap_or_default()
    }

    pub fn score(&self) -> u32 {
        self.session.run.score
    }

    pub fn best_score(&self) -> u32 {
        self.session.run.best_score
    }

    pub fn is_game_over(&self) -> bool {
        self.session.run.phase == RunPhase::GameOver
    }
}

fn init() {
    console_error_panic_hook::set_once();
    // A second game on the same page keeps the first logger
    let _ = console_log::init_with_level(log::Level::Info);
}
