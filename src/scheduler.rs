use std::time::{Duration, Instant};

use crate::config::Speed;
use crate::grid::GRID_SIZE;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Step interval for a snake of `len` cells: slow at the start, fast when it fills the board.
pub fn tick_interval(len: usize, speed: &Speed) -> Duration {
    let slow = speed.slow.as_nanos();
    let fast = speed.fast.as_nanos().min(slow);
    let len = len.min(GRID_SIZE) as u128;
    let nanos = slow - (slow - fast) * len / GRID_SIZE as u128;
    // nanos <= slow, so the seconds fit wherever speed.slow's did
    Duration::new((nanos / NANOS_PER_SEC) as u64, (nanos % NANOS_PER_SEC) as u32)
}

/// Decides on each frame whether a step is due.
pub struct Scheduler {
    speed: Speed,
    last_tick: Instant,
    paused: bool,
}

impl Scheduler {
    pub fn new(speed: Speed, now: Instant) -> Self {
        Scheduler { speed, last_tick: now, paused: false }
    }

    /// True when a step should run now. Marks it as run.
    pub fn frame(&mut self, now: Instant, len: usize) -> bool {
        if self.paused {
            return false;
        }
        if now.duration_since(self.last_tick) < tick_interval(len, &self.speed) {
            return false;
        }
        self.last_tick = now;
        true
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}
