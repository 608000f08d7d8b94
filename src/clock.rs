//! Time sources and the fixed-timestep accumulator that paces simulation.

use std::cell::Cell;
use std::time::{Duration, Instant};

use log::debug;

/// Monotonic millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Converts wall-clock progress into whole simulation ticks.
///
/// Simulation time advances in exact `step_ms` increments regardless of
/// how irregularly `advance` is called.  After a stall at most
/// `max_catch_up` ticks run at once; the rest of the backlog is dropped.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step_ms: u64,
    max_catch_up: u32,
    last_wall: Option<u64>,
    accumulated: u64,
    sim_time: u64,
}

impl FixedStep {
    pub fn new(step_ms: u64, max_catch_up: u32) -> Self {
        Self {
            step_ms: step_ms.max(1),
            max_catch_up: max_catch_up.max(1),
            last_wall: None,
            accumulated: 0,
            sim_time: 0,
        }
    }

    pub fn step_ms(&self) -> u64 {
        self.step_ms
    }

    /// Simulation time of the most recent tick.
    pub fn sim_time(&self) -> u64 {
        self.sim_time
    }

    /// Feed the current wall time; returns the simulation timestamps of the
    /// ticks now due, oldest first.
    pub fn advance(&mut self, wall_ms: u64) -> impl Iterator<Item = u64> {
        let last = self.last_wall.replace(wall_ms).unwrap_or(wall_ms);
        self.accumulated += wall_ms.saturating_sub(last);

        let mut due = self.accumulated / self.step_ms;
        self.accumulated %= self.step_ms;
        if due > u64::from(self.max_catch_up) {
            debug!(
                "dropping {} ticks of backlog",
                due - u64::from(self.max_catch_up)
            );
            due = u64::from(self.max_catch_up);
        }

        let start = self.sim_time;
        let step = self.step_ms;
        self.sim_time += due * step;
        (1..=due).map(move |i| start + i * step)
    }

    /// Wall time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        Duration::from_millis(self.step_ms - self.accumulated)
    }
}
