use crate::animation::{AnimationState, Animator, DiceConfig};
use crate::channel::CommandReceiver;
use crate::clock::{Millis, is_due};
use crate::color::Rgb;
use crate::command::{self, CommandError};
use crate::frame::FrameBuffer;
use crate::pattern::PatternEngine;
use crate::power::{PowerBudget, limit_brightness};
use crate::random::RandomSource;

/// A frame ready to be written to the strip
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub colors: &'a [Rgb],
    pub brightness: u8,
}

/// Dice renderer - the main orchestrator
///
/// Call [`Renderer::render`] on every pass of the control loop. It never
/// blocks: it applies queued commands, then advances the brightness ramp or
/// the animation when they are due.
pub struct Renderer<'a, R: RandomSource, const CHANNEL_SIZE: usize> {
    // External dependencies and configuration
    commands: CommandReceiver<'a, CHANNEL_SIZE>,
    power: Option<PowerBudget>,

    // Internal state
    animator: Animator<R>,
    frame: FrameBuffer,
    needs_commit: bool,

    // Internal dependencies
    pattern: PatternEngine,
}

impl<'a, R: RandomSource, const CHANNEL_SIZE: usize> Renderer<'a, R, CHANNEL_SIZE> {
    pub fn new(commands: CommandReceiver<'a, CHANNEL_SIZE>, rng: R, config: &DiceConfig) -> Self {
        let mut renderer = Self {
            commands,
            power: config.power,
            animator: Animator::new(AnimationState::new(config), rng),
            frame: FrameBuffer::new(),
            needs_commit: true,
            pattern: PatternEngine::new(config.flicker, config.correction),
        };
        renderer
            .pattern
            .render(renderer.animator.state(), &mut renderer.frame);
        renderer
    }

    /// Process one control loop pass
    ///
    /// Returns the frame to write when anything visible changed.
    pub fn render(&mut self, now: Millis) -> Option<Frame<'_>> {
        self.process_commands();
        if self.advance(now) {
            self.needs_commit = true;
        }

        if !self.needs_commit {
            return None;
        }
        self.needs_commit = false;
        Some(self.frame())
    }

    /// Decode and apply a payload right away, bypassing the queue
    ///
    /// Must not be called while a frame borrowed from [`Renderer::render`]
    /// is alive, which the borrow checker already guarantees.
    pub fn decode_and_apply(&mut self, payload: &[u8]) -> Result<(), CommandError> {
        self.needs_commit = true;
        command::decode_and_apply(self.animator.state_mut(), &mut self.frame, payload)
    }

    /// Current frame with the brightness it would be written at
    pub fn frame(&self) -> Frame<'_> {
        let colors = self.frame.as_slice();
        let mut brightness = self.animator.state().brightness();
        if let Some(budget) = self.power {
            brightness = limit_brightness(colors, brightness, budget);
        }
        Frame { colors, brightness }
    }

    pub fn state(&self) -> &AnimationState {
        self.animator.state()
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn pattern_mut(&mut self) -> &mut PatternEngine {
        &mut self.pattern
    }

    /// Apply every queued command before anything is rendered
    fn process_commands(&mut self) {
        while let Some(decoded) = self.commands.try_receive() {
            let _ = command::apply_decoded(self.animator.state_mut(), &mut self.frame, decoded);
            self.needs_commit = true;
        }
    }

    /// Advance the ramp or the animation
    ///
    /// Returns `true` if the frame or its brightness changed.
    fn advance(&mut self, now: Millis) -> bool {
        let state = self.animator.state_mut();
        let mut changed = false;
        if state.ramp.is_engaged(state.period_ms()) {
            // A frame must be fully faded in before the next one may replace it
            if !state.ramp.is_complete() {
                return state.ramp.advance(now);
            }
        } else if !state.ramp.is_complete() {
            state.ramp.pin();
            changed = true;
        }

        if state.is_dormant() || !is_due(now, state.last_tick_ms, state.period_ms()) {
            return changed;
        }

        self.animator.step();
        self.pattern.render(self.animator.state(), &mut self.frame);

        let state = self.animator.state_mut();
        state.last_tick_ms = now;
        if state.ramp.is_engaged(state.period_ms()) {
            state.ramp.restart(now);
        }
        true
    }
}
