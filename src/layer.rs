//! One animated layer: clock, back buffer, animation dispatch, compositing

use crate::{
    animation::{AnimationId, FireState},
    blend::blend_into,
    buffer::{BufferError, PixelBuffer},
    clock::LayerClock,
    random::RandomSource,
    settings::LayerSettings,
};

/// Renders one layer and composites it into the shared front buffer
///
/// The layer owns its back buffer and fire state. The front buffer and the
/// settings are lent to [`LayerAnimation::animate`] for every frame.
#[derive(Debug, Clone)]
pub struct LayerAnimation<const N: usize> {
    back: PixelBuffer<N>,
    fire: FireState<N>,
    clock: LayerClock,
}

impl<const N: usize> LayerAnimation<N> {
    /// Create a layer whose back buffer matches `front` in length
    pub fn new(front: &PixelBuffer<N>) -> Result<Self, BufferError> {
        Self::with_back_buffer(PixelBuffer::new(front.len())?, front)
    }

    /// Create a layer around an existing back buffer
    ///
    /// Fails if `back` and `front` differ in length.
    pub fn with_back_buffer(
        back: PixelBuffer<N>,
        front: &PixelBuffer<N>,
    ) -> Result<Self, BufferError> {
        if back.len() != front.len() {
            return Err(BufferError::LengthMismatch {
                back: back.len(),
                front: front.len(),
            });
        }
        let fire = FireState::new(back.len())?;
        Ok(Self {
            back,
            fire,
            clock: LayerClock::new(),
        })
    }

    /// Render one frame and blend it into `front`
    ///
    /// `fraction` is the current position in the layer's cycle (0.0-1.0).
    /// Returns the absolute layer time used for the frame.
    pub fn animate<R: RandomSource + ?Sized>(
        &mut self,
        fraction: f32,
        settings: &LayerSettings,
        front: &mut PixelBuffer<N>,
        rng: &mut R,
    ) -> f32 {
        debug_assert_eq!(self.back.len(), front.len());

        let t = self.clock.advance(fraction);
        self.back.clear();

        if settings.animation == AnimationId::Nothing && settings.blend_mode.is_black_identity() {
            return t;
        }

        match settings.animation.function() {
            Some(function) => function(settings, t, &mut self.back),
            None => self.fire.render(settings, &mut self.back, rng),
        }

        blend_into(front, &self.back, settings.blend_mode, rng);
        t
    }

    /// Pixels produced by the last frame
    pub fn back_buffer(&self) -> &PixelBuffer<N> {
        &self.back
    }

    pub fn clock(&self) -> &LayerClock {
        &self.clock
    }

    /// Restart the clock and cool the fire state
    pub fn reset(&mut self) {
        self.clock = LayerClock::new();
        self.fire.reset();
    }
}
