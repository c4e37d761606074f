//! Absolute layer time from a wrapping fraction

/// Rebuilds monotonic time from a fraction that wraps back towards zero
///
/// The first fraction seeds the clock without a wrap check, so the first
/// absolute time equals the first fraction. After that, every fraction
/// smaller than the previous one counts as one completed cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayerClock {
    accumulated_seconds: f32,
    last_fraction: Option<f32>,
}

impl LayerClock {
    pub const fn new() -> Self {
        Self {
            accumulated_seconds: 0.0,
            last_fraction: None,
        }
    }

    /// Feed the next fraction and return the absolute time
    ///
    /// Fractions outside 0.0-1.0 are clamped, non-finite ones read as 0.0.
    pub fn advance(&mut self, fraction: f32) -> f32 {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };

        if let Some(last) = self.last_fraction {
            if fraction < last {
                self.accumulated_seconds += 1.0;
            }
        }
        self.last_fraction = Some(fraction);

        self.accumulated_seconds + fraction
    }

    /// Whole cycles completed so far
    pub const fn accumulated_seconds(&self) -> f32 {
        self.accumulated_seconds
    }

    /// The fraction seen by the last [`advance`](Self::advance)
    pub const fn last_fraction(&self) -> Option<f32> {
        self.last_fraction
    }
}
