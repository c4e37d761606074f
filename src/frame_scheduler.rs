//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};
use crate::random::{RandomSource, XorShift32};
use crate::{OutputDriver, Renderer};

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Frames we may fall behind before the backlog is dropped.
pub const MAX_DRIFT_FRAMES: u32 = 2;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// Each tick renders every layer in index order, hands the composited frame
/// to the output driver and reports how long to wait for the next frame.
/// Falling more than [`MAX_DRIFT_FRAMES`] behind resets the schedule
/// instead of rendering a burst of catch-up frames.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///     
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    const MAX_LEDS: usize,
    const LAYERS: usize,
    const INTENT_CHANNEL_SIZE: usize,
    R: RandomSource = XorShift32,
> {
    output: O,
    renderer: Renderer<'a, MAX_LEDS, LAYERS, INTENT_CHANNEL_SIZE, R>,
    next_frame: Option<Instant>,
    frame_duration: Duration,
    frames: u64,
}

impl<'a, O, const MAX_LEDS: usize, const LAYERS: usize, const INTENT_CHANNEL_SIZE: usize, R>
    FrameScheduler<'a, O, MAX_LEDS, LAYERS, INTENT_CHANNEL_SIZE, R>
where
    O: OutputDriver,
    R: RandomSource,
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(renderer: Renderer<'a, MAX_LEDS, LAYERS, INTENT_CHANNEL_SIZE, R>, driver: O) -> Self {
        Self::with_frame_duration(renderer, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        renderer: Renderer<'a, MAX_LEDS, LAYERS, INTENT_CHANNEL_SIZE, R>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: None,
            frame_duration: frame_duration.max(Duration::from_millis(1)),
            frames: 0,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration * MAX_DRIFT_FRAMES;
        let scheduled = match self.next_frame {
            Some(deadline) if now <= deadline + max_drift => deadline,
            _ => now,
        };

        let frame = self.renderer.render(now);
        self.output.write(frame);
        self.frames += 1;

        let next_deadline = scheduled + self.frame_duration;
        self.next_frame = Some(next_deadline);

        FrameResult {
            next_deadline,
            sleep_duration: next_deadline
                .checked_duration_since(now)
                .unwrap_or(Duration::from_ticks(0)),
        }
    }

    /// Number of frames written so far.
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a, MAX_LEDS, LAYERS, INTENT_CHANNEL_SIZE, R> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, MAX_LEDS, LAYERS, INTENT_CHANNEL_SIZE, R> {
        &mut self.renderer
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
