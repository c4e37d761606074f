//! Per-layer configuration

use crate::{animation::AnimationId, blend::BlendMode, color::Rgb};

pub const DEFAULT_MAIN_COLOR: Rgb = Rgb {
    r: 255,
    g: 100,
    b: 0,
};
pub const DEFAULT_SECONDARY_COLOR: Rgb = Rgb {
    r: 240,
    g: 255,
    b: 0,
};
pub const DEFAULT_SPEED: f32 = 2.0;
pub const DEFAULT_TAU: f32 = 10.0;
pub const DEFAULT_PHI: f32 = 4.0;

/// Shortest accepted cycle duration, in seconds
pub const MIN_SPEED: f32 = 0.01;
/// Longest accepted cycle duration, in seconds
pub const MAX_SPEED: f32 = 100.0;
/// Accepted magnitude of the shape parameters
pub const SHAPE_LIMIT: f32 = 100.0;

/// Settings of one layer
///
/// Read-only while a frame renders. Updated through
/// [`LayerSettings::apply`], which validates raw values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerSettings {
    pub main_color: Rgb,
    pub secondary_color: Rgb,
    pub blend_mode: BlendMode,
    /// Duration of one clock cycle, in seconds
    pub speed: f32,
    /// First shape parameter, meaning depends on the animation
    pub tau: f32,
    /// Second shape parameter, meaning depends on the animation
    pub phi: f32,
    pub animation: AnimationId,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            main_color: DEFAULT_MAIN_COLOR,
            secondary_color: DEFAULT_SECONDARY_COLOR,
            blend_mode: BlendMode::Add,
            speed: DEFAULT_SPEED,
            tau: DEFAULT_TAU,
            phi: DEFAULT_PHI,
            animation: AnimationId::Nothing,
        }
    }
}

/// Raw, unvalidated changes to a layer's settings
///
/// This is what a configuration collaborator produces; every field is
/// optional and indices are plain integers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayerSettingsIntent {
    pub main_color: Option<Rgb>,
    pub secondary_color: Option<Rgb>,
    pub blend_mode: Option<i32>,
    pub speed: Option<f32>,
    pub tau: Option<f32>,
    pub phi: Option<f32>,
    pub animation_index: Option<i32>,
}

impl LayerSettings {
    /// Builder-style animation selection
    #[must_use]
    pub const fn with_animation(mut self, animation: AnimationId) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub const fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    #[must_use]
    pub const fn with_colors(mut self, main: Rgb, secondary: Rgb) -> Self {
        self.main_color = main;
        self.secondary_color = secondary;
        self
    }

    #[must_use]
    pub const fn with_shape(mut self, tau: f32, phi: f32) -> Self {
        self.tau = tau;
        self.phi = phi;
        self
    }

    /// Apply a raw intent, validating every field
    ///
    /// Unknown animation indices select [`AnimationId::Nothing`] and unknown
    /// blend modes select [`BlendMode::Add`]. Non-finite floats are ignored,
    /// finite ones are clamped to their accepted range.
    pub fn apply(&mut self, intent: &LayerSettingsIntent) {
        if let Some(color) = intent.main_color {
            self.main_color = color;
        }
        if let Some(color) = intent.secondary_color {
            self.secondary_color = color;
        }
        if let Some(raw) = intent.blend_mode {
            self.blend_mode = BlendMode::from_raw(raw).unwrap_or_else(|| {
                #[cfg(feature = "esp32-log")]
                esp_println::println!("[LayerSettings.apply] unknown blend mode {}, using Add", raw);
                BlendMode::Add
            });
        }
        if let Some(raw) = intent.animation_index {
            self.animation = AnimationId::from_raw(raw).unwrap_or_else(|| {
                #[cfg(feature = "esp32-log")]
                esp_println::println!(
                    "[LayerSettings.apply] unknown animation {}, using Nothing",
                    raw
                );
                AnimationId::Nothing
            });
        }
        if let Some(speed) = intent.speed.filter(|v| v.is_finite()) {
            self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        }
        if let Some(tau) = intent.tau.filter(|v| v.is_finite()) {
            self.tau = tau.clamp(-SHAPE_LIMIT, SHAPE_LIMIT);
        }
        if let Some(phi) = intent.phi.filter(|v| v.is_finite()) {
            self.phi = phi.clamp(-SHAPE_LIMIT, SHAPE_LIMIT);
        }
    }
}
