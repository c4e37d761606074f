//! Hash-driven random-looking effects
//!
//! Randomness comes from [`hash`] of pixel index and time slot, so the same
//! inputs always render the same frame.

use crate::{
    color::{BLACK, Rgb, scale_color},
    math8::{curve, hash, hash_unit},
    settings::LayerSettings,
};

const PHASE_SALT: u32 = 12_345;
const FREQUENCY_SALT: u32 = 67_890;
const STAR_SALT: u32 = 11_111;
const SPARKLE_SALT: u32 = 99_999;

/// How many recent time slots may still contribute a flash
const SPARKLE_SLOTS: i32 = 3;
const BACKGROUND_LEVEL: f32 = 0.1;

/// Stars with individual phase and frequency
///
/// `tau / 10` is the fraction of pixels that are stars, `phi` scales the
/// twinkle frequency.
#[allow(clippy::cast_possible_truncation)]
pub(super) fn twinkle(settings: &LayerSettings, t: f32, leds: &mut [Rgb]) {
    let density = settings.tau / 10.0;
    let speed = settings.phi;

    for (i, led) in leds.iter_mut().enumerate() {
        let seed = i as u32;
        if hash_unit(seed.wrapping_mul(STAR_SALT)) > density {
            *led = BLACK;
            continue;
        }

        let phase = hash_unit(seed.wrapping_mul(PHASE_SALT));
        let frequency = 0.5 + hash_unit(seed.wrapping_mul(FREQUENCY_SALT)) * speed;
        let level = curve(t * frequency + phase);

        let color = if hash(seed) & 1 == 1 {
            settings.main_color
        } else {
            settings.secondary_color
        };
        *led = scale_color(color, level * level);
    }
}

/// Short flashes of the main color over a dim secondary background
///
/// `0.05 + tau / 100` is the flash duration and `phi / 20` the chance that a
/// pixel flashes in a given slot.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(super) fn sparkle(settings: &LayerSettings, t: f32, leds: &mut [Rgb]) {
    let duration = 0.05 + settings.tau / 100.0;
    let density = settings.phi / 20.0;
    let background = scale_color(settings.secondary_color, BACKGROUND_LEVEL);
    let current_slot = (t / duration) as i32;

    for (i, led) in leds.iter_mut().enumerate() {
        let base = (i as u32).wrapping_mul(SPARKLE_SALT);
        let mut brightness: f32 = 0.0;

        for back in 0..SPARKLE_SLOTS {
            let slot = current_slot.wrapping_sub(back);
            if hash_unit(base.wrapping_add(slot as u32)) >= density {
                continue;
            }
            let progress = (t - slot as f32 * duration) / duration;
            if (0.0..1.0).contains(&progress) {
                let flash = if progress < 0.5 {
                    progress * 2.0
                } else {
                    2.0 - progress * 2.0
                };
                brightness = brightness.max(flash);
            }
        }

        *led = if brightness > 0.0 {
            scale_color(settings.main_color, brightness)
        } else {
            background
        };
    }
}
