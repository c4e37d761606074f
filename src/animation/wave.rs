//! Sinusoidal wave animations

use super::position;
use crate::{
    color::{Rgb, add_colors, blend_colors, scale_color},
    math8::{curve, gamma, unit8},
    settings::LayerSettings,
};

/// Two waves travelling in opposite directions
///
/// `tau` is the period of the main color wave, `phi` the period of the
/// secondary one, both in pixels. Each wave contributes at most half
/// brightness.
#[allow(clippy::cast_precision_loss)]
pub(super) fn opposing_waves(settings: &LayerSettings, t: f32, leds: &mut [Rgb]) {
    for (i, led) in leds.iter_mut().enumerate() {
        let x = i as f32;
        let main = gamma(curve(t - x / settings.tau)) / 2.0;
        let secondary = gamma(curve(t + x / settings.phi)) / 2.0;
        *led = add_colors(
            scale_color(settings.main_color, main),
            scale_color(settings.secondary_color, secondary),
        );
    }
}

/// One wave in the main color
///
/// `tau` is the wave length in pixels and `phi` the phase offset in cycles.
#[allow(clippy::cast_precision_loss)]
pub(super) fn single_wave(settings: &LayerSettings, t: f32, leds: &mut [Rgb]) {
    for (i, led) in leds.iter_mut().enumerate() {
        let level = gamma(curve(t - i as f32 / settings.tau + settings.phi));
        *led = scale_color(settings.main_color, level);
    }
}

/// Whole strip fades between the two colors
pub(super) fn breathe(settings: &LayerSettings, t: f32, leds: &mut [Rgb]) {
    let color = add_colors(
        scale_color(settings.main_color, gamma(curve(t))),
        scale_color(settings.secondary_color, gamma(curve(t + 0.5))),
    );
    leds.fill(color);
}

/// Gradient between the two colors that shifts along the strip
///
/// `tau / 10` sharpens the transitions, `phi / 4` is the number of gradient
/// cycles on the strip.
pub(super) fn gradient_pulse(settings: &LayerSettings, t: f32, leds: &mut [Rgb]) {
    let len = leds.len();
    let cycles = settings.phi / 4.0;
    let sharpness = settings.tau / 10.0;

    for (i, led) in leds.iter_mut().enumerate() {
        let mut wave = curve(position(i, len) * cycles + t);
        if sharpness > 0.0 {
            wave = libm::powf(wave, 1.0 / (sharpness + 1.0));
        }
        *led = blend_colors(settings.main_color, settings.secondary_color, unit8(wave));
    }
}
