//! One-shot timers on the frame loop
//!
//! Timers carry a small event value instead of a closure, so firing never
//! needs to borrow the thing that scheduled it. The host advances `Timers`
//! with frame time and dispatches whatever comes due.

/// What a timer means when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The run with this id asked to be replaced by a fresh one
    RestartRun { run_id: u64 },
}

/// Handle for cancelling a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// One-shot scheduling capability handed to the simulation
pub trait Scheduler {
    /// Fire `event` once after `delay_ms` milliseconds
    fn after(&mut self, delay_ms: u32, event: TimerEvent) -> TimerHandle;

    /// Drop a pending timer. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone)]
struct Pending {
    handle: TimerHandle,
    due_ms: f64,
    event: TimerEvent,
}

/// Single-threaded timer list driven by frame time
#[derive(Debug, Clone, Default)]
pub struct Timers {
    now_ms: f64,
    next_id: u64,
    pending: Vec<Pending>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds of frame time seen so far
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and collect due events, earliest first
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<TimerEvent> {
        self.now_ms += elapsed_ms.max(0.0);
        let now = self.now_ms;

        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due_ms <= now {
                due.push(p.clone());
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.handle.0.cmp(&b.handle.0)));
        due.into_iter().map(|p| p.event).collect()
    }
}

impl Scheduler for Timers {
    fn after(&mut self, delay_ms: u32, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due_ms: self.now_ms + delay_ms as f64,
            event,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|p| p.handle != handle);
    }
}
