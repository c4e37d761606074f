//! 8-bit and unit-interval helpers shared by animations and the compositor

use core::f32::consts::TAU;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Convert a unit value (0.0-1.0) to 0-255, clamping out-of-range input
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// One sinusoidal cycle per unit of `progress`
///
/// Starts at 0.0 for `progress == 0.0` and peaks at 1.0 for
/// `progress == 0.5`. Non-finite input yields 0.0.
#[inline]
pub fn curve(progress: f32) -> f32 {
    if !progress.is_finite() {
        return 0.0;
    }
    // Reduce first so large absolute times keep their precision in sinf
    let phase = progress - libm::floorf(progress);
    libm::sinf((phase - 0.25) * TAU) / 2.0 + 0.5
}

/// Perceptual brightness response for unit values
#[inline]
pub fn gamma(value: f32) -> f32 {
    if value.is_nan() || value <= 0.0 {
        return 0.0;
    }
    libm::powf(value.min(1.0), 2.2)
}

/// Integer mixing hash
///
/// Pure function of its input, used in place of stored random state.
#[inline]
pub const fn hash(seed: u32) -> u32 {
    let mut x = seed;
    x = ((x >> 16) ^ x).wrapping_mul(0x045d_9f3b);
    x = ((x >> 16) ^ x).wrapping_mul(0x045d_9f3b);
    (x >> 16) ^ x
}

/// Pseudo-random value in 0.0-1.0 for a given seed
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn hash_unit(seed: u32) -> f32 {
    (hash(seed) & 0xFFFF) as f32 / 65535.0
}
