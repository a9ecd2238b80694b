use std::time::{Duration, Instant};

/// Default display interval between frames.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(20);

/// Default length of a pause cooldown, in ticks.
pub const DEFAULT_PAUSE_TICKS: u32 = 15;

/// Keeps a fixed visible duration per frame regardless of how long producing it took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePacer {
    interval: Duration,
}

impl FramePacer {
    /// Create a pacer targeting `interval` per frame.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Target interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left in the interval after `elapsed` of work.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.interval.saturating_sub(elapsed)
    }

    /// Run `work`, then sleep out whatever is left of the interval.
    pub fn pace<T>(&self, work: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = work();
        let rest = self.remaining(start.elapsed());
        if !rest.is_zero() {
            std::thread::sleep(rest);
        }
        out
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

/// Tick-based pause: while positive, frame production is suspended.
///
/// Used to hold a frame still for a while (e.g. to let a camera refocus), then resume on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PauseCooldown {
    length: u32,
    remaining: u32,
}

impl PauseCooldown {
    /// Create an idle cooldown that pauses for `length` ticks when triggered.
    pub fn new(length: u32) -> Self {
        Self {
            length,
            remaining: 0,
        }
    }

    /// Start (`true`) or cancel (`false`) a pause.
    pub fn set_paused(&mut self, paused: bool) {
        self.remaining = if paused { self.length } else { 0 };
    }

    /// Flip between paused and running.
    pub fn toggle(&mut self) {
        let paused = !self.is_paused();
        self.set_paused(paused);
    }

    /// Return `true` while the cooldown is running.
    pub fn is_paused(&self) -> bool {
        self.remaining > 0
    }

    /// Count one tick down.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

impl Default for PauseCooldown {
    fn default() -> Self {
        Self::new(DEFAULT_PAUSE_TICKS)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/pacing.rs"]
mod tests;
