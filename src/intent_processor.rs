//! Intent processing module
//!
//! This is the boundary where external configuration enters the renderer.
//! Raw values are validated here, once, so rendering never sees an invalid
//! index.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::{Channel, Receiver, Sender};
use crate::settings::{LayerSettings, LayerSettingsIntent};

/// Intent to change layer settings or global state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightChangeIntent {
    /// Change settings of the layer at `index`
    Layer {
        index: usize,
        settings: LayerSettingsIntent,
    },
    /// Switch rendering on or off
    Power(bool),
    /// Change global brightness (0-255)
    Brightness(u8),
}

/// Global changes the renderer should apply after processing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentEffects {
    pub power: Option<bool>,
    pub brightness: Option<u8>,
    /// Number of layer intents that were applied
    pub layers_changed: usize,
    /// Number of intents dropped because they addressed no layer
    pub rejected: usize,
}

impl IntentEffects {
    /// Check if any global effect needs to be applied
    pub const fn has_effects(&self) -> bool {
        self.power.is_some() || self.brightness.is_some()
    }
}

/// Type alias for intent sender
pub type IntentSender<'a, const SIZE: usize> = Sender<'a, LightChangeIntent, SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const SIZE: usize> = Receiver<'a, LightChangeIntent, SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const SIZE: usize> = Channel<LightChangeIntent, SIZE>;

/// Applies queued intents to layer settings
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Process all pending intents from the channel (non-blocking)
    ///
    /// Layer intents are validated and written into `layers`; global changes
    /// are returned for the renderer to apply. Later intents win.
    pub fn process_pending(&mut self, layers: &mut [LayerSettings]) -> IntentEffects {
        let mut effects = IntentEffects::default();

        for intent in self.intents.drain() {
            match intent {
                LightChangeIntent::Layer { index, settings } => {
                    if apply_layer_intent(layers, index, &settings) {
                        effects.layers_changed += 1;
                    } else {
                        effects.rejected += 1;
                    }
                }
                LightChangeIntent::Power(power) => {
                    effects.power = Some(power);
                }
                LightChangeIntent::Brightness(brightness) => {
                    effects.brightness = Some(brightness);
                }
            }
        }

        effects
    }
}

/// Apply a raw intent to the layer at `index`
///
/// Returns `false` if there is no such layer.
pub fn apply_layer_intent(
    layers: &mut [LayerSettings],
    index: usize,
    intent: &LayerSettingsIntent,
) -> bool {
    let Some(settings) = layers.get_mut(index) else {
        #[cfg(feature = "esp32-log")]
        println!(
            "[IntentProcessor] dropping intent for layer {} of {}",
            index,
            layers.len()
        );
        return false;
    };
    settings.apply(intent);
    true
}
