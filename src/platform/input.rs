//! Input events
//!
//! Hosts push raw events as they arrive; the simulation drains them once per
//! frame. Every flap-producing event counts, nothing is deduplicated.

use crate::sim::TickInput;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    J,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` string
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => Key::Space,
            "KeyJ" => Key::J,
            "Escape" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// A raw input event from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown,
    KeyDown(Key),
}

impl InputEvent {
    /// Whether this event makes the body flap
    pub fn is_flap(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerDown | InputEvent::KeyDown(Key::Space) | InputEvent::KeyDown(Key::J)
        )
    }
}

/// Events collected between two frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Empty the queue into the input for one simulation tick
    pub fn drain(&mut self) -> TickInput {
        let flaps = self.events.drain(..).filter(InputEvent::is_flap).count() as u32;
        TickInput { flaps }
    }
}
