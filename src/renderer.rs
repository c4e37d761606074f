//! Layer compositor that turns settings, intents and time into frames

use embassy_time::Instant;

use crate::buffer::{BufferError, PixelBuffer};
use crate::color::Rgb;
use crate::intent_processor::{IntentEffects, IntentProcessor, IntentReceiver, apply_layer_intent};
use crate::layer::LayerAnimation;
use crate::math8::scale8;
use crate::random::{RandomSource, XorShift32};
use crate::settings::{LayerSettings, LayerSettingsIntent};
use crate::timer::LayerTimer;

/// Number of layers of a stock controller
pub const DEFAULT_LAYER_COUNT: usize = 10;

/// Renderer with the stock controller's layer count
pub type StockRenderer<'a, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize> =
    Renderer<'a, MAX_LEDS, DEFAULT_LAYER_COUNT, INTENT_CHANNEL_SIZE>;

/// Configuration for the renderer
#[derive(Debug, Clone)]
pub struct RendererConfig<const LAYERS: usize> {
    /// Number of pixels on the strip
    pub led_count: usize,
    /// Global brightness (0-255)
    pub brightness: u8,
    /// Whether layers render at start
    pub power: bool,
    /// Whether layer clocks keep cycling after their first cycle
    pub repeats: bool,
    /// Initial settings, composited in index order
    pub layers: [LayerSettings; LAYERS],
}

impl<const LAYERS: usize> RendererConfig<LAYERS> {
    /// Default settings for a strip of `led_count` pixels
    pub fn new(led_count: usize) -> Self {
        Self {
            led_count,
            brightness: 255,
            power: true,
            repeats: true,
            layers: [LayerSettings::default(); LAYERS],
        }
    }
}

/// Layer compositor - the main orchestrator
///
/// Owns the front buffer and composites every layer into it, in index
/// order, once per frame.
pub struct Renderer<
    'a,
    const MAX_LEDS: usize,
    const LAYERS: usize,
    const INTENT_CHANNEL_SIZE: usize,
    R: RandomSource = XorShift32,
> {
    // External dependencies
    intent_processor: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
    rng: R,

    // Internal state
    front: PixelBuffer<MAX_LEDS>,
    settings: [LayerSettings; LAYERS],
    timers: [LayerTimer; LAYERS],
    layers: [LayerAnimation<MAX_LEDS>; LAYERS],
    power: bool,
    brightness: u8,
}

impl<'a, const MAX_LEDS: usize, const LAYERS: usize, const INTENT_CHANNEL_SIZE: usize>
    Renderer<'a, MAX_LEDS, LAYERS, INTENT_CHANNEL_SIZE, XorShift32>
{
    /// Create a renderer with the default random source
    pub fn new(
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        config: &RendererConfig<LAYERS>,
    ) -> Result<Self, BufferError> {
        Self::with_random(intents, config, XorShift32::default())
    }
}

impl<'a, const MAX_LEDS: usize, const LAYERS: usize, const INTENT_CHANNEL_SIZE: usize, R>
    Renderer<'a, MAX_LEDS, LAYERS, INTENT_CHANNEL_SIZE, R>
where
    R: RandomSource,
{
    /// Create a renderer drawing randomness from `rng`
    ///
    /// Fails if `config.led_count` exceeds `MAX_LEDS`.
    pub fn with_random(
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        config: &RendererConfig<LAYERS>,
        rng: R,
    ) -> Result<Self, BufferError> {
        let front = PixelBuffer::new(config.led_count)?;
        let layer = LayerAnimation::new(&front)?;
        let layers = core::array::from_fn(|_| layer.clone());

        let start = Instant::from_ticks(0);
        let timers = config.layers.map(|settings| {
            LayerTimer::new(
                LayerTimer::cycle_from_secs(settings.speed),
                config.repeats,
                start,
            )
        });

        Ok(Self {
            intent_processor: IntentProcessor::new(intents),
            rng,
            front,
            settings: config.layers,
            timers,
            layers,
            power: config.power,
            brightness: config.brightness,
        })
    }

    /// Process one frame
    ///
    /// Applies pending intents, derives every layer's fraction from its
    /// timer and composites all layers. Call this continuously.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.process_intents();

        let mut fractions = [None; LAYERS];
        for ((timer, settings), fraction) in self
            .timers
            .iter_mut()
            .zip(self.settings.iter())
            .zip(fractions.iter_mut())
        {
            timer.set_cycle(LayerTimer::cycle_from_secs(settings.speed), now);
            let progress = timer.progress(now);
            if !progress.done {
                *fraction = Some(progress.fraction);
            }
        }

        self.compose(&fractions)
    }

    /// Composite one frame from externally supplied fractions
    ///
    /// `fractions[i]` drives layer `i`; `None` or a missing entry skips the
    /// layer. Pending intents are not processed.
    pub fn compose(&mut self, fractions: &[Option<f32>]) -> &[Rgb] {
        self.front.clear();
        if !self.power {
            return &self.front;
        }

        for (index, layer) in self.layers.iter_mut().enumerate() {
            let Some(fraction) = fractions.get(index).copied().flatten() else {
                continue;
            };
            layer.animate(fraction, &self.settings[index], &mut self.front, &mut self.rng);
        }

        if self.brightness < 255 {
            let brightness = self.brightness;
            for pixel in self.front.iter_mut() {
                pixel.r = scale8(pixel.r, brightness);
                pixel.g = scale8(pixel.g, brightness);
                pixel.b = scale8(pixel.b, brightness);
            }
        }

        &self.front
    }

    /// Apply a raw settings change to one layer, bypassing the channel
    pub fn apply_layer_intent(&mut self, index: usize, intent: &LayerSettingsIntent) -> bool {
        apply_layer_intent(&mut self.settings, index, intent)
    }

    /// Restart the clock of the layer at `index`
    pub fn restart_layer(&mut self, index: usize, now: Instant) {
        if let (Some(timer), Some(layer)) = (self.timers.get_mut(index), self.layers.get_mut(index)) {
            timer.restart(now);
            layer.reset();
        }
    }

    pub fn layer_settings(&self, index: usize) -> Option<&LayerSettings> {
        self.settings.get(index)
    }

    pub fn layer(&self, index: usize) -> Option<&LayerAnimation<MAX_LEDS>> {
        self.layers.get(index)
    }

    /// The last composited frame
    pub fn front(&self) -> &PixelBuffer<MAX_LEDS> {
        &self.front
    }

    pub const fn power(&self) -> bool {
        self.power
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Process pending intents from the channel (non-blocking)
    fn process_intents(&mut self) {
        let effects = self.intent_processor.process_pending(&mut self.settings);
        self.apply_effects(&effects);
    }

    /// Apply global side effects from intent processing
    fn apply_effects(&mut self, effects: &IntentEffects) {
        if let Some(power) = effects.power {
            self.power = power;
        }
        if let Some(brightness) = effects.brightness {
            self.brightness = brightness;
        }
    }
}
