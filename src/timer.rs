//! Cycle timing for layers
//!
//! A [`LayerTimer`] turns wall time into the wrapping fraction consumed by
//! [`LayerAnimation::animate`](crate::layer::LayerAnimation::animate) and
//! tells the scheduler when a non-repeating layer has finished.

use embassy_time::{Duration, Instant};

/// Position in the current cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerProgress {
    /// Position within the cycle, 0.0-1.0
    pub fraction: f32,
    /// Set once a non-repeating timer has run for a full cycle
    pub done: bool,
}

/// Repeating or one-shot cycle clock
#[derive(Debug, Clone, Copy)]
pub struct LayerTimer {
    cycle: Duration,
    repeats: bool,
    started: Instant,
}

impl LayerTimer {
    /// Create a timer that starts at `now`
    pub fn new(cycle: Duration, repeats: bool, now: Instant) -> Self {
        Self {
            cycle,
            repeats,
            started: now,
        }
    }

    /// Cycle length from seconds, at least one millisecond
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cycle_from_secs(seconds: f32) -> Duration {
        let millis = if seconds.is_finite() {
            (seconds * 1000.0) as u64
        } else {
            0
        };
        Duration::from_millis(millis.max(1))
    }

    /// Change the cycle length, keeping the current position in the cycle
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn set_cycle(&mut self, cycle: Duration, now: Instant) {
        let cycle = cycle.max(Duration::from_micros(1));
        if cycle == self.cycle {
            return;
        }
        let progress = self.progress(now);
        let elapsed = cycle.as_micros() as f64 * f64::from(progress.fraction);
        let offset = Duration::from_micros(elapsed as u64);
        self.started = now.checked_sub(offset).unwrap_or(now);
        self.cycle = cycle;
    }

    pub const fn cycle(&self) -> Duration {
        self.cycle
    }

    pub const fn repeats(&self) -> bool {
        self.repeats
    }

    /// Restart the cycle at `now`
    pub fn restart(&mut self, now: Instant) {
        self.started = now;
    }

    /// Fraction of the current cycle at `now`
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn progress(&self, now: Instant) -> TimerProgress {
        let cycle = self.cycle.as_micros().max(1);
        let elapsed = now
            .checked_duration_since(self.started)
            .map_or(0, |elapsed| elapsed.as_micros());

        if !self.repeats && elapsed >= cycle {
            return TimerProgress {
                fraction: 1.0,
                done: true,
            };
        }

        let within = elapsed % cycle;
        TimerProgress {
            fraction: (within as f64 / cycle as f64) as f32,
            done: false,
        }
    }
}
