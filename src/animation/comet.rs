//! Moving highlights: comet and scanner

use crate::{
    color::{BLACK, Rgb, scale_color},
    math8::curve,
    settings::LayerSettings,
};

/// Bright head in the main color followed by a fading secondary tail
///
/// `tau * 5` is the tail length and `phi` the head width, both in pixels.
/// The head travels one strip length per time unit and leaves the strip
/// completely before re-entering.
#[allow(clippy::cast_precision_loss)]
pub(super) fn comet(settings: &LayerSettings, t: f32, leds: &mut [Rgb]) {
    let len = leds.len() as f32;
    let tail = settings.tau * 5.0;
    let width = settings.phi.max(1.0);
    let head = libm::fmodf(t * len, len + tail);

    for (i, led) in leds.iter_mut().enumerate() {
        let distance = head - i as f32;
        *led = if (0.0..width).contains(&distance) {
            settings.main_color
        } else if distance >= width && distance < tail + width {
            let fade = 1.0 - (distance - width) / tail;
            scale_color(settings.secondary_color, fade * fade)
        } else {
            BLACK
        };
    }
}

/// Light bouncing between the strip ends
///
/// `tau` is the core width and `phi` the width of the glow on each side.
#[allow(clippy::cast_precision_loss)]
pub(super) fn scanner(settings: &LayerSettings, t: f32, leds: &mut [Rgb]) {
    let last = leds.len().saturating_sub(1) as f32;
    let half_width = settings.tau.max(1.0) / 2.0;
    let glow = settings.phi;
    let center = curve(t) * last;

    for (i, led) in leds.iter_mut().enumerate() {
        let distance = libm::fabsf(i as f32 - center);
        *led = if distance < half_width {
            settings.main_color
        } else if distance < half_width + glow {
            let fade = 1.0 - (distance - half_width) / glow;
            scale_color(settings.secondary_color, fade * fade)
        } else {
            BLACK
        };
    }
}
