use core::fmt;

pub use smart_leds::hsv::hsv2rgb;

use crate::{color::Rgb, math8::blend8};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Channel-wise addition, clamped at 255
#[inline]
pub const fn add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Channel-wise subtraction, clamped at 0
#[inline]
pub const fn sub_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_sub(b.r),
        g: a.g.saturating_sub(b.g),
        b: a.b.saturating_sub(b.b),
    }
}

/// Channel-wise addition modulo 256
#[inline]
pub const fn add_colors_wrapping(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.wrapping_add(b.r),
        g: a.g.wrapping_add(b.g),
        b: a.b.wrapping_add(b.b),
    }
}

/// Channel-wise subtraction modulo 256
#[inline]
pub const fn sub_colors_wrapping(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.wrapping_sub(b.r),
        g: a.g.wrapping_sub(b.g),
        b: a.b.wrapping_sub(b.b),
    }
}

/// Scale every channel by `factor`, clamped to 0.0-1.0
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_color(color: Rgb, factor: f32) -> Rgb {
    if factor.is_nan() || factor <= 0.0 {
        return Rgb { r: 0, g: 0, b: 0 };
    }
    if factor >= 1.0 {
        return color;
    }
    let scale = |channel: u8| (f32::from(channel) * factor) as u8;
    Rgb {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// Error returned by [`parse_rgb`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// Fewer or more than three components
    ComponentCount,
    /// A component is not an integer in 0-255
    InvalidComponent,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComponentCount => f.write_str("expected three color components"),
            Self::InvalidComponent => f.write_str("color component is not in 0-255"),
        }
    }
}

/// Parse a color written as three space-separated channels, e.g. `"255 100 0"`
pub fn parse_rgb(text: &str) -> Result<Rgb, ParseColorError> {
    let mut parts = text.split_ascii_whitespace();
    let mut next = || -> Result<u8, ParseColorError> {
        parts
            .next()
            .ok_or(ParseColorError::ComponentCount)?
            .parse()
            .map_err(|_| ParseColorError::InvalidComponent)
    };
    let color = Rgb {
        r: next()?,
        g: next()?,
        b: next()?,
    };
    if parts.next().is_some() {
        return Err(ParseColorError::ComponentCount);
    }
    Ok(color)
}
