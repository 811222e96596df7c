//! Cooperative tick loop
//!
//! The scheduler does not sleep or await. The caller invokes
//! [`FrameScheduler::tick`] on every pass of its control loop and the
//! scheduler decides, from the elapsed time alone, whether anything has to
//! be written to the strip.

use embassy_time::Instant;

use crate::clock::{Millis, millis_of};
use crate::random::RandomSource;
use crate::{OutputDriver, Renderer};

/// Drives a [`Renderer`] and writes committed frames to the driver
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver);
///
/// loop {
///     scheduler.tick(Instant::now());
///     // poll the network, feed the watchdog, ...
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, R: RandomSource, const CHANNEL_SIZE: usize> {
    output: O,
    renderer: Renderer<'a, R, CHANNEL_SIZE>,
}

impl<'a, O: OutputDriver, R: RandomSource, const CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, R, CHANNEL_SIZE>
{
    pub fn new(renderer: Renderer<'a, R, CHANNEL_SIZE>, driver: O) -> Self {
        Self {
            output: driver,
            renderer,
        }
    }

    /// Run one pass at `now`
    ///
    /// Returns `true` if a frame was written.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.tick_millis(millis_of(now))
    }

    /// Run one pass at a raw, wrapping millisecond timestamp
    pub fn tick_millis(&mut self, now: Millis) -> bool {
        let Some(frame) = self.renderer.render(now) else {
            return false;
        };
        self.output.write(frame.colors, frame.brightness);
        true
    }

    pub fn renderer(&self) -> &Renderer<'a, R, CHANNEL_SIZE> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, R, CHANNEL_SIZE> {
        &mut self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
