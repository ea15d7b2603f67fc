//! Platform abstraction layer
//!
//! Handles the host-facing edges of the game:
//! - Input events (pointer, keyboard) queued between frames
//! - One-shot timers on the frame loop
//! - Browser bindings (WASM only)

pub mod input;
pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputEvent, InputQueue, Key};
pub use time::{Scheduler, TimerEvent, TimerHandle, Timers};
