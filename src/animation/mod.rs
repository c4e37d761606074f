//! Animation registry with stable, bounds-checked indices
//!
//! Each animation fills a pre-cleared layer buffer from the layer settings
//! and the absolute layer time. Every animation except [`AnimationId::Fire`]
//! is a pure function of its inputs; fire keeps per-layer heat in a
//! [`FireState`] owned by the layer.

mod chase;
mod comet;
mod fire;
mod rainbow;
mod sparkle;
mod wave;

pub use fire::FireState;

use crate::{color::Rgb, settings::LayerSettings};

const ANIMATION_NAME_NOTHING: &str = "Nothing";
const ANIMATION_NAME_OPPOSING_WAVES: &str = "Opposing Waves";
const ANIMATION_NAME_SINGLE_WAVE: &str = "Single Wave";
const ANIMATION_NAME_BREATHE: &str = "Breathe";
const ANIMATION_NAME_RAINBOW: &str = "Rainbow";
const ANIMATION_NAME_COMET: &str = "Comet";
const ANIMATION_NAME_SCANNER: &str = "Scanner";
const ANIMATION_NAME_TWINKLE: &str = "Twinkle";
const ANIMATION_NAME_THEATER_CHASE: &str = "Theater Chase";
const ANIMATION_NAME_COLOR_WIPE: &str = "Color Wipe";
const ANIMATION_NAME_GRADIENT_PULSE: &str = "Gradient Pulse";
const ANIMATION_NAME_SPARKLE: &str = "Sparkle";
const ANIMATION_NAME_FIRE: &str = "Fire";

/// Number of registered animations
pub const ANIMATION_COUNT: usize = 13;

/// Animation names, indexed by [`AnimationId`] discriminant
pub const ANIMATION_NAMES: [&str; ANIMATION_COUNT] = [
    ANIMATION_NAME_NOTHING,
    ANIMATION_NAME_OPPOSING_WAVES,
    ANIMATION_NAME_SINGLE_WAVE,
    ANIMATION_NAME_BREATHE,
    ANIMATION_NAME_RAINBOW,
    ANIMATION_NAME_COMET,
    ANIMATION_NAME_SCANNER,
    ANIMATION_NAME_TWINKLE,
    ANIMATION_NAME_THEATER_CHASE,
    ANIMATION_NAME_COLOR_WIPE,
    ANIMATION_NAME_GRADIENT_PULSE,
    ANIMATION_NAME_SPARKLE,
    ANIMATION_NAME_FIRE,
];

/// Signature shared by the stateless animations
pub type AnimateFn = fn(settings: &LayerSettings, t: f32, leds: &mut [Rgb]);

/// Known animations that can be selected for a layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    /// Leaves the layer black
    #[default]
    Nothing = 0,
    /// Two counter-travelling waves, one per color
    OpposingWaves = 1,
    SingleWave = 2,
    /// Whole-strip fade between the two colors
    Breathe = 3,
    Rainbow = 4,
    /// Bright head with a fading tail
    Comet = 5,
    /// Light bouncing back and forth
    Scanner = 6,
    /// Stateless random stars
    Twinkle = 7,
    /// Marquee lights
    TheaterChase = 8,
    ColorWipe = 9,
    GradientPulse = 10,
    /// Random flashes on a dim background
    Sparkle = 11,
    /// Heat simulation, keeps state between frames
    Fire = 12,
}

impl AnimationId {
    /// All animations in index order
    pub const ALL: [Self; ANIMATION_COUNT] = [
        Self::Nothing,
        Self::OpposingWaves,
        Self::SingleWave,
        Self::Breathe,
        Self::Rainbow,
        Self::Comet,
        Self::Scanner,
        Self::Twinkle,
        Self::TheaterChase,
        Self::ColorWipe,
        Self::GradientPulse,
        Self::Sparkle,
        Self::Fire,
    ];

    pub fn from_raw(value: i32) -> Option<Self> {
        let index = usize::try_from(value).ok()?;
        Self::ALL.get(index).copied()
    }

    /// Resolve a raw index, falling back to [`AnimationId::Nothing`]
    pub fn from_raw_or_default(value: i32) -> Self {
        Self::from_raw(value).unwrap_or_default()
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        ANIMATION_NAMES[self as usize]
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        ANIMATION_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|index| Self::ALL[index])
    }

    /// Returns if the output depends only on settings and time
    pub const fn is_pure(self) -> bool {
        !matches!(self, Self::Fire)
    }

    /// Stateless render function, `None` for [`AnimationId::Fire`]
    pub fn function(self) -> Option<AnimateFn> {
        let function: AnimateFn = match self {
            Self::Nothing => nothing,
            Self::OpposingWaves => wave::opposing_waves,
            Self::SingleWave => wave::single_wave,
            Self::Breathe => wave::breathe,
            Self::Rainbow => rainbow::rainbow,
            Self::Comet => comet::comet,
            Self::Scanner => comet::scanner,
            Self::Twinkle => sparkle::twinkle,
            Self::TheaterChase => chase::theater_chase,
            Self::ColorWipe => chase::color_wipe,
            Self::GradientPulse => wave::gradient_pulse,
            Self::Sparkle => sparkle::sparkle,
            Self::Fire => return None,
        };
        Some(function)
    }
}

fn nothing(_settings: &LayerSettings, _t: f32, _leds: &mut [Rgb]) {}

/// Normalized position of pixel `i` along a strip of `len` pixels
#[inline]
#[allow(clippy::cast_precision_loss)]
fn position(i: usize, len: usize) -> f32 {
    i as f32 / len as f32
}
