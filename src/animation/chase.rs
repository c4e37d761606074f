//! Segment-based animations: theater chase and color wipe

use super::position;
use crate::{
    color::{BLACK, Rgb},
    settings::LayerSettings,
};

/// Length of one wipe cycle, in wipe phases
const WIPE_PHASES: f32 = 4.0;

/// Marquee lights
///
/// `tau` is the pattern spacing (at least 2) and `phi` the number of lit
/// pixels per group (at least 1). Groups alternate between the two colors.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn theater_chase(settings: &LayerSettings, t: f32, leds: &mut [Rgb]) {
    let spacing = (settings.tau as i32).max(2) as usize;
    let group_size = (settings.phi as i32).max(1) as usize;
    let offset = ((t * spacing as f32 * 2.0) as u32 as usize) % spacing;

    for (i, led) in leds.iter_mut().enumerate() {
        let shifted = i + offset;
        *led = if shifted % spacing < group_size {
            if (shifted / spacing) & 1 == 1 {
                settings.main_color
            } else {
                settings.secondary_color
            }
        } else {
            BLACK
        };
    }
}

/// Fill with the main color, hold, wipe in the secondary color, hold
///
/// `tau` slows the wipe down; each phase lasts `tau / 10 + 0.5` time units.
pub(super) fn color_wipe(settings: &LayerSettings, t: f32, leds: &mut [Rgb]) {
    let len = leds.len();
    let phase = libm::fmodf(t / (settings.tau / 10.0 + 0.5), WIPE_PHASES);

    if phase < 1.0 {
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if position(i, len) < phase {
                settings.main_color
            } else {
                BLACK
            };
        }
    } else if phase < 2.0 {
        leds.fill(settings.main_color);
    } else if phase < 3.0 {
        let fill = phase - 2.0;
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if position(i, len) < fill {
                settings.secondary_color
            } else {
                settings.main_color
            };
        }
    } else {
        leds.fill(settings.secondary_color);
    }
}
