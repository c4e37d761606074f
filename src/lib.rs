#![no_std]

pub mod animation;
pub mod blend;
pub mod buffer;
pub mod channel;
pub mod clock;
pub mod color;
pub mod frame_scheduler;
pub mod intent_processor;
pub mod layer;
pub mod math8;
pub mod random;
pub mod renderer;
pub mod settings;
pub mod timer;

pub use animation::{ANIMATION_NAMES, AnimationId, FireState};
pub use blend::{BLEND_MODE_NAMES, BlendMode, blend};
pub use buffer::{BufferError, PixelBuffer};
pub use clock::LayerClock;
pub use frame_scheduler::FrameScheduler;
pub use intent_processor::{
    IntentChannel, IntentEffects, IntentProcessor, IntentReceiver, IntentSender,
    LightChangeIntent,
};
pub use layer::LayerAnimation;
pub use random::{RandomSource, XorShift32};
pub use renderer::{DEFAULT_LAYER_COUNT, Renderer, RendererConfig, StockRenderer};
pub use settings::{LayerSettings, LayerSettingsIntent};
pub use timer::{LayerTimer, TimerProgress};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The scheduler hands every composited frame to the driver.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
