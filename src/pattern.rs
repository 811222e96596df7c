//! Pattern engine
//!
//! Turns the current [`AnimationState`] into LED colors. Face modes light
//! exactly the cells of one face; flood and error light the whole die.

use crate::animation::AnimationState;
use crate::color::{Rgb, WHITE};
use crate::frame::FrameBuffer;
use crate::math8::{fade_to_black, scale_channels};
use crate::mode::AnimationMode;
use crate::random::{RandomSource, Xorshift32};

/// Seed of the flicker noise, the texture does not need real entropy
const FLICKER_SEED: u32 = 0x2545_F491;

#[derive(Debug, Clone)]
pub struct PatternEngine {
    flicker: Option<u8>,
    correction: Rgb,
    noise: Xorshift32,
}

impl PatternEngine {
    /// Create a pattern engine
    ///
    /// `flicker` is the strongest per-LED dimming applied on top of flood
    /// mode, `None` or `Some(0)` renders a flat fill. `correction` scales
    /// each channel of every rendered LED, [`WHITE`] leaves colors untouched.
    pub const fn new(flicker: Option<u8>, correction: Rgb) -> Self {
        Self {
            flicker,
            correction,
            noise: Xorshift32::new(FLICKER_SEED),
        }
    }

    pub const fn flicker(&self) -> Option<u8> {
        self.flicker
    }

    pub fn set_flicker(&mut self, flicker: Option<u8>) {
        self.flicker = flicker;
    }

    pub const fn correction(&self) -> Rgb {
        self.correction
    }

    pub fn set_correction(&mut self, correction: Rgb) {
        self.correction = correction;
    }

    /// Render `state` into `frame`
    pub fn render(&mut self, state: &AnimationState, frame: &mut FrameBuffer) {
        match state.mode {
            AnimationMode::Flood => {
                frame.fill(state.color);
                self.apply_flicker(frame);
            }
            AnimationMode::Error => {
                frame.fill(state.color);
            }
            AnimationMode::RandomRoll
            | AnimationMode::SpinUpRoll
            | AnimationMode::SlowDownRoll
            | AnimationMode::CountUp
            | AnimationMode::CountDown => {
                frame.clear();
                frame.light_face(state.face, state.color);
            }
        }
        self.apply_correction(frame);
    }

    fn apply_correction(&self, frame: &mut FrameBuffer) {
        if self.correction == WHITE {
            return;
        }
        for led in frame.as_mut_slice() {
            *led = scale_channels(*led, self.correction);
        }
    }

    /// Dim each LED by a random amount up to the flicker depth
    #[allow(clippy::cast_possible_truncation)]
    fn apply_flicker(&mut self, frame: &mut FrameBuffer) {
        let Some(depth) = self.flicker.filter(|depth| *depth > 0) else {
            return;
        };
        let span = u32::from(depth) + 1;
        for led in frame.as_mut_slice() {
            let amount = (self.noise.next_u32() % span) as u8;
            *led = fade_to_black(*led, amount);
        }
    }
}

impl Default for PatternEngine {
    fn default() -> Self {
        Self::new(None, WHITE)
    }
}
