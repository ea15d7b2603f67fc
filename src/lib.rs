//! Sky Gap - A side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Simulation (body physics, obstacle field, collisions, run state)
//! - `renderer`: Draw-command interface the simulation reports through
//! - `platform`: Input events and one-shot timers
//! - `persistence`: Best score storage
//! - `tuning`: Data-driven game balance
//! - `session`: Host loop that owns runs and restarts them

pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use persistence::{BestScoreStore, MemoryStore, PersistenceError};
pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the host will simulate (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Body defaults - starts 10% in from the left, vertically centered
    pub const BODY_START_X: f32 = SCREEN_WIDTH * 0.1;
    pub const BODY_START_Y: f32 = SCREEN_HEIGHT / 2.0;
    pub const BODY_WIDTH: f32 = 34.0;
    pub const BODY_HEIGHT: f32 = 24.0;
    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 600.0;
    /// Upward velocity set by a flap (pixels/s)
    pub const FLAP_VELOCITY: f32 = 300.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 26.0;
    pub const OBSTACLE_HEIGHT: f32 = 320.0;
    /// Leftward scroll speed shared by the whole field (pixels/s)
    pub const SCROLL_SPEED: f32 = 200.0;
    /// Number of pairs kept alive in the field
    pub const OBSTACLE_PAIRS: usize = 4;
    /// Vertical gap between upper and lower obstacle
    pub const GAP_RANGE: (i32, i32) = (150, 250);
    /// Horizontal distance from the previous rightmost pair
    pub const SPACING_RANGE: (i32, i32) = (500, 550);
    /// Minimum distance between a gap and the top/bottom of the screen
    pub const VERTICAL_MARGIN: i32 = 20;

    /// Delay between game over and the restart request
    pub const RESTART_DELAY_MS: u32 = 1000;
}
