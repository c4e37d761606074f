//! Fire simulation with per-layer heat
//!
//! Every pixel holds a heat cell. Cells cool down randomly, heat drifts
//! away from the start of the strip and new sparks ignite near it.

use heapless::Vec;

use crate::{
    buffer::BufferError,
    color::{BLACK, Rgb, WHITE, blend_colors},
    random::RandomSource,
    settings::LayerSettings,
};

/// Sparks ignite within this many pixels of the strip start
const SPARK_ZONE: usize = 7;
const SPARK_MIN_HEAT: u8 = 160;
const SPARK_MAX_HEAT: u8 = 255;

const COOLING_MIN: f32 = 20.0;
const COOLING_MAX: f32 = 100.0;
const SPARKING_MIN: f32 = 50.0;
const SPARKING_MAX: f32 = 200.0;

/// Heat cells of one fire layer
///
/// `N` is the maximum number of pixels, the actual cell count is fixed when
/// the state is created.
#[derive(Debug, Clone)]
pub struct FireState<const N: usize> {
    heat: Vec<u8, N>,
}

impl<const N: usize> FireState<N> {
    /// Create cold state for a strip of `len` pixels
    pub fn new(len: usize) -> Result<Self, BufferError> {
        let mut heat = Vec::new();
        heat.resize(len, 0)
            .map_err(|()| BufferError::CapacityExceeded {
                requested: len,
                capacity: N,
            })?;
        Ok(Self { heat })
    }

    /// Current heat of every cell
    pub fn heat(&self) -> &[u8] {
        &self.heat
    }

    /// Cool every cell down to zero
    pub fn reset(&mut self) {
        self.heat.fill(0);
    }

    /// Advance the simulation by one frame and draw it
    ///
    /// `tau` controls cooling, `phi` controls how often sparks ignite.
    /// Heat maps from black through the main color and the secondary color
    /// to white.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn render<R: RandomSource + ?Sized>(
        &mut self,
        settings: &LayerSettings,
        leds: &mut [Rgb],
        rng: &mut R,
    ) {
        let len = self.heat.len();
        if len == 0 {
            return;
        }

        let cooling = clamp_or_min(settings.tau * 5.5, COOLING_MIN, COOLING_MAX) as u32;
        let sparking = clamp_or_min(settings.phi * 30.0, SPARKING_MIN, SPARKING_MAX) as u8;

        let max_cooldown = (cooling * 10 / len as u32 + 2).min(255) as u8;
        for cell in self.heat.iter_mut() {
            *cell = cell.saturating_sub(rng.below_or_eq(max_cooldown));
        }

        for k in (2..len).rev() {
            let below = u16::from(self.heat[k - 1]) + 2 * u16::from(self.heat[k - 2]);
            self.heat[k] = (below / 3) as u8;
        }

        if rng.next_u8() < sparking {
            let zone = len.min(SPARK_ZONE) as u8;
            let cell = usize::from(rng.below_or_eq(zone - 1));
            let spark = rng.between(SPARK_MIN_HEAT, SPARK_MAX_HEAT);
            self.heat[cell] = self.heat[cell].saturating_add(spark);
        }

        for (led, &heat) in leds.iter_mut().zip(self.heat.iter()) {
            *led = heat_color(heat, settings.main_color, settings.secondary_color);
        }
    }
}

fn clamp_or_min(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

/// Map heat onto a black, `low`, `high`, white ramp
#[allow(clippy::cast_possible_truncation)]
fn heat_color(heat: u8, low: Rgb, high: Rgb) -> Rgb {
    let scaled = u16::from(heat) * 3;
    let amount = (scaled & 0xFF) as u8;
    match scaled >> 8 {
        0 => blend_colors(BLACK, low, amount),
        1 => blend_colors(low, high, amount),
        _ => blend_colors(high, WHITE, amount),
    }
}
