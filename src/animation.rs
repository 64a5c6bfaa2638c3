//! Animation driver: owns the curve state and paces the phase schedule.
//!
//! The driver holds the sample grid, the phase schedule, the current
//! schedule index, and the y-values for the current phase as explicit
//! fields. [`AnimationDriver::tick`] is the single "advance and render"
//! step: the host event loop calls it once per frame with the current
//! wall-clock time, and the driver advances by however many whole tick
//! intervals have elapsed since the last advance. Between frames the UI
//! requests a repaint after one interval, so pacing stays cooperative
//! and nothing ever blocks.

use std::time::{Duration, Instant};

use crate::curve::{heart_curve, phase_schedule, sample_grid};

/// Drives the heart curve through the phase schedule at a fixed tick rate.
pub struct AnimationDriver {
    grid: Vec<f64>,
    schedule: Vec<f64>,
    index: usize,
    interval: Duration,
    last_advance: Instant,
    ys: Vec<f64>,
}

impl AnimationDriver {
    /// Create a driver ticking every `interval`, with `now` as the epoch
    /// the first tick is measured against. The curve starts at the first
    /// schedule entry (phase 0).
    pub fn new(interval: Duration, now: Instant) -> Self {
        let grid = sample_grid();
        let schedule = phase_schedule();
        let ys = grid.iter().map(|&x| heart_curve(x, schedule[0])).collect();
        Self {
            grid,
            schedule,
            index: 0,
            interval,
            last_advance: now,
            ys,
        }
    }

    /// The configured tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Index of the current phase schedule entry.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The phase the displayed curve was evaluated at.
    pub fn phase(&self) -> f64 {
        self.schedule[self.index]
    }

    /// Advance by the number of whole tick intervals elapsed up to `now`
    /// and recompute the curve if anything changed. Returns the number of
    /// ticks applied.
    ///
    /// A stalled frame catches up in one call: the index moves by every
    /// missed tick (modulo the schedule length, so a long stall costs at
    /// most one wrap) and the curve is recomputed once.
    pub fn tick(&mut self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.last_advance);
        let steps = (elapsed.as_nanos() / self.interval.as_nanos()) as usize;
        if steps == 0 {
            return 0;
        }
        let remainder = elapsed.as_nanos() % self.interval.as_nanos();
        self.last_advance = now - Duration::from_nanos(remainder as u64);
        self.index = (self.index + steps) % self.schedule.len();
        self.recompute();
        steps
    }

    /// The displayed curve as plot points, one per grid coordinate.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.grid
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| [x, y])
            .collect()
    }

    fn recompute(&mut self) {
        let a = self.schedule[self.index];
        for (y, &x) in self.ys.iter_mut().zip(self.grid.iter()) {
            *y = heart_curve(x, a);
        }
    }
}
