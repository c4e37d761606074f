//! Rainbow cycling across the strip
//!
//! Colors come from the hue wheel; the layer colors are ignored.

use super::position;
use crate::{
    color::{Hsv, Rgb, hsv2rgb},
    settings::LayerSettings,
};

const SATURATION: u8 = 240;
const VALUE: u8 = 255;

/// `tau / 10` rainbow cycles fit on the strip, `phi / 4` scales time
pub(super) fn rainbow(settings: &LayerSettings, t: f32, leds: &mut [Rgb]) {
    let len = leds.len();
    let cycles = settings.tau / 10.0;
    let speed = settings.phi / 4.0;

    for (i, led) in leds.iter_mut().enumerate() {
        let hue = wrap_hue((position(i, len) * cycles + t * speed) * 256.0);
        *led = hsv2rgb(Hsv {
            hue,
            sat: SATURATION,
            val: VALUE,
        });
    }
}

/// Reduce a hue in 1/256 turns onto the 0-255 wheel
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn wrap_hue(hue: f32) -> u8 {
    if !hue.is_finite() {
        return 0;
    }
    let turns = libm::floorf(hue / 256.0);
    (hue - turns * 256.0) as u8
}
