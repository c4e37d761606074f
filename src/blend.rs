//! Per-channel blend algebra used to composite a layer onto the strip
//!
//! In every formula `a` is the color already in the front buffer and `b` is
//! the color produced by the layer being composited.

use crate::{color::Rgb, random::RandomSource};

const BLEND_NAME_ADD: &str = "Add";
const BLEND_NAME_SUBTRACT: &str = "Subtract";
const BLEND_NAME_ADD_WRAP: &str = "Add Wrap";
const BLEND_NAME_SUBTRACT_WRAP: &str = "Subtract Wrap";
const BLEND_NAME_MULTIPLY: &str = "Multiply";
const BLEND_NAME_DISSOLVE: &str = "Dissolve";
const BLEND_NAME_AVERAGE: &str = "Average";
const BLEND_NAME_SET: &str = "Set";
const BLEND_NAME_SCREEN: &str = "Screen";
const BLEND_NAME_LIGHTEN: &str = "Lighten";
const BLEND_NAME_DARKEN: &str = "Darken";
const BLEND_NAME_DIFFERENCE: &str = "Difference";
const BLEND_NAME_OVERLAY: &str = "Overlay";
const BLEND_NAME_COLOR_DODGE: &str = "Color Dodge";

/// Number of blend modes
pub const BLEND_MODE_COUNT: usize = 14;

/// Blend mode names, indexed by [`BlendMode`] discriminant
pub const BLEND_MODE_NAMES: [&str; BLEND_MODE_COUNT] = [
    BLEND_NAME_ADD,
    BLEND_NAME_SUBTRACT,
    BLEND_NAME_ADD_WRAP,
    BLEND_NAME_SUBTRACT_WRAP,
    BLEND_NAME_MULTIPLY,
    BLEND_NAME_DISSOLVE,
    BLEND_NAME_AVERAGE,
    BLEND_NAME_SET,
    BLEND_NAME_SCREEN,
    BLEND_NAME_LIGHTEN,
    BLEND_NAME_DARKEN,
    BLEND_NAME_DIFFERENCE,
    BLEND_NAME_OVERLAY,
    BLEND_NAME_COLOR_DODGE,
];

/// How a layer is merged into the front buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum BlendMode {
    /// `a + b`, clamped at 255
    #[default]
    Add = 0,
    /// `a - b`, clamped at 0
    Subtract = 1,
    /// `a + b` modulo 256
    AddWrap = 2,
    /// `a - b` modulo 256
    SubtractWrap = 3,
    Multiply = 4,
    /// Random whole-pixel pick between `a` and `b`
    Dissolve = 5,
    Average = 6,
    /// Layer replaces the front buffer
    Set = 7,
    Screen = 8,
    Lighten = 9,
    Darken = 10,
    Difference = 11,
    Overlay = 12,
    ColorDodge = 13,
}

impl BlendMode {
    /// All modes in index order
    pub const ALL: [Self; BLEND_MODE_COUNT] = [
        Self::Add,
        Self::Subtract,
        Self::AddWrap,
        Self::SubtractWrap,
        Self::Multiply,
        Self::Dissolve,
        Self::Average,
        Self::Set,
        Self::Screen,
        Self::Lighten,
        Self::Darken,
        Self::Difference,
        Self::Overlay,
        Self::ColorDodge,
    ];

    pub fn from_raw(value: i32) -> Option<Self> {
        let index = usize::try_from(value).ok()?;
        Self::ALL.get(index).copied()
    }

    /// Resolve a raw index, falling back to [`BlendMode::Add`]
    pub fn from_raw_or_default(value: i32) -> Self {
        Self::from_raw(value).unwrap_or_default()
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        BLEND_MODE_NAMES[self as usize]
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        BLEND_MODE_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|index| Self::ALL[index])
    }

    /// Returns if compositing black leaves every front color unchanged
    pub const fn is_black_identity(self) -> bool {
        matches!(
            self,
            Self::Add
                | Self::Subtract
                | Self::AddWrap
                | Self::SubtractWrap
                | Self::Lighten
                | Self::Difference
                | Self::ColorDodge
        )
    }
}

/// Blend `b` onto `a` with `mode`
///
/// Only [`BlendMode::Dissolve`] draws from `rng`.
pub fn blend<R: RandomSource + ?Sized>(a: Rgb, b: Rgb, mode: BlendMode, rng: &mut R) -> Rgb {
    let channel: fn(u8, u8) -> u8 = match mode {
        BlendMode::Add => u8::saturating_add,
        BlendMode::Subtract => u8::saturating_sub,
        BlendMode::AddWrap => u8::wrapping_add,
        BlendMode::SubtractWrap => u8::wrapping_sub,
        BlendMode::Multiply => multiply,
        BlendMode::Dissolve => return if rng.coin() { b } else { a },
        BlendMode::Average => average,
        BlendMode::Set => return b,
        BlendMode::Screen => screen,
        BlendMode::Lighten => u8::max,
        BlendMode::Darken => u8::min,
        BlendMode::Difference => u8::abs_diff,
        BlendMode::Overlay => overlay,
        BlendMode::ColorDodge => color_dodge,
    };
    Rgb {
        r: channel(a.r, b.r),
        g: channel(a.g, b.g),
        b: channel(a.b, b.b),
    }
}

/// Blend a whole layer into the front buffer, pixel by pixel
pub fn blend_into<R: RandomSource + ?Sized>(
    front: &mut [Rgb],
    layer: &[Rgb],
    mode: BlendMode,
    rng: &mut R,
) {
    for (a, &b) in front.iter_mut().zip(layer) {
        *a = blend(*a, b, mode, rng);
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn multiply(a: u8, b: u8) -> u8 {
    ((u16::from(a) * u16::from(b)) >> 8) as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn average(a: u8, b: u8) -> u8 {
    ((u16::from(a) + u16::from(b)) >> 1) as u8
}

#[inline]
fn screen(a: u8, b: u8) -> u8 {
    255 - multiply(255 - a, 255 - b)
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn overlay(a: u8, b: u8) -> u8 {
    if a < 128 {
        ((2 * u32::from(a) * u32::from(b)) >> 8) as u8
    } else {
        let inverse = (2 * u32::from(255 - a) * u32::from(255 - b)) >> 8;
        // inverse <= 254 because 255 - a <= 127
        255 - inverse as u8
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn color_dodge(a: u8, b: u8) -> u8 {
    if b == 255 {
        return 255;
    }
    let divisor = u32::from(255 - b);
    ((u32::from(a) << 8) / divisor).min(255) as u8
}
