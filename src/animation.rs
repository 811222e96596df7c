//! Animation mode state machine
//!
//! [`Animator`] owns the [`AnimationState`] and advances it one step at a
//! time. It knows nothing about timing; the renderer decides when a step is
//! due.

use embassy_time::Duration;

use crate::clock::{Millis, duration_millis};
use crate::color::{BLACK, RED, Rgb, WHITE};
use crate::face::DieFace;
use crate::mode::AnimationMode;
use crate::power::{DEFAULT_POWER_BUDGET, PowerBudget};
use crate::ramp::{BrightnessRamp, RampConfig};
use crate::random::RandomSource;

/// Shortest accepted period, leaves the driver time to push a frame
pub const MIN_PERIOD_MS: Millis = 20;

/// Flash rate of the error indication
pub const ERROR_PERIOD_MS: Millis = 300;

pub const SPIN_UP_FLOOR_MS: Millis = 100;
pub const SLOW_DOWN_FLOOR_MS: Millis = 50;
pub const SLOW_DOWN_CEILING_MS: Millis = 3000;

/// Initial configuration of the die
#[derive(Debug, Clone)]
pub struct DiceConfig {
    pub mode: AnimationMode,
    pub face: DieFace,
    pub color: Rgb,
    pub period: Duration,
    pub repeats: u32,
    pub infinite: bool,
    /// Brightness ceiling (0-255)
    pub brightness: u8,
    pub ramp: RampConfig,
    /// Maximum per-LED dimming of the flood flicker, `None` renders flat
    pub flicker: Option<u8>,
    /// Per-channel output correction, see [`crate::color::TYPICAL_LED_STRIP`]
    pub correction: Rgb,
    /// Supply limit, `None` disables current limiting
    pub power: Option<PowerBudget>,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            mode: AnimationMode::Flood,
            face: DieFace::MIN,
            color: WHITE,
            period: Duration::from_millis(100),
            repeats: 0,
            infinite: false,
            brightness: 255,
            ramp: RampConfig::default(),
            flicker: None,
            correction: WHITE,
            power: Some(DEFAULT_POWER_BUDGET),
        }
    }
}

/// Everything the die needs to render the next frame
#[derive(Debug, Clone)]
pub struct AnimationState {
    pub mode: AnimationMode,
    pub face: DieFace,
    period_ms: Millis,
    pub remaining_repeats: u32,
    pub infinite: bool,
    pub color: Rgb,
    pub ramp: BrightnessRamp,
    pub last_tick_ms: Millis,
    suspended: Option<Suspended>,
}

/// Parameters the error indication overrides, restored when it ends
#[derive(Debug, Clone, Copy)]
struct Suspended {
    color: Rgb,
    period_ms: Millis,
    infinite: bool,
}

impl AnimationState {
    pub fn new(config: &DiceConfig) -> Self {
        let mut state = Self {
            mode: config.mode,
            face: config.face,
            period_ms: MIN_PERIOD_MS,
            remaining_repeats: config.repeats,
            infinite: config.infinite,
            color: config.color,
            ramp: BrightnessRamp::new(config.brightness, &config.ramp),
            last_tick_ms: 0,
            suspended: None,
        };
        state.set_period_ms(duration_millis(config.period));
        state
    }

    pub const fn period_ms(&self) -> Millis {
        self.period_ms
    }

    /// Set the step period, clamped to [`MIN_PERIOD_MS`]
    pub fn set_period_ms(&mut self, period_ms: Millis) {
        self.period_ms = period_ms.max(MIN_PERIOD_MS);
    }

    /// Check if the animation has run out of steps
    ///
    /// The error indication never goes dormant.
    pub fn is_dormant(&self) -> bool {
        self.mode != AnimationMode::Error && !self.infinite && self.remaining_repeats == 0
    }

    /// Force the error indication parameters
    ///
    /// The overridden color, period and repeat flag are kept aside until
    /// [`AnimationState::leave_error`].
    pub fn enter_error(&mut self) {
        if self.suspended.is_none() {
            self.suspended = Some(Suspended {
                color: self.color,
                period_ms: self.period_ms,
                infinite: self.infinite,
            });
        }
        self.mode = AnimationMode::Error;
        self.period_ms = ERROR_PERIOD_MS;
        self.infinite = true;
    }

    /// Restore what the error indication overrode
    ///
    /// Does nothing if the error indication never took over.
    pub fn leave_error(&mut self) {
        if let Some(suspended) = self.suspended.take() {
            self.color = suspended.color;
            self.period_ms = suspended.period_ms;
            self.infinite = suspended.infinite;
        }
    }

    /// Make the next step due on the next pass
    pub fn schedule_now(&mut self) {
        self.last_tick_ms = self.last_tick_ms.wrapping_sub(self.period_ms);
    }

    pub fn brightness(&self) -> u8 {
        self.ramp.brightness()
    }
}

/// Steps an [`AnimationState`] through its mode
pub struct Animator<R: RandomSource> {
    state: AnimationState,
    rng: R,
}

impl<R: RandomSource> Animator<R> {
    pub const fn new(state: AnimationState, rng: R) -> Self {
        Self { state, rng }
    }

    pub const fn state(&self) -> &AnimationState {
        &self.state
    }

    pub const fn state_mut(&mut self) -> &mut AnimationState {
        &mut self.state
    }

    /// Perform exactly one mode-specific action
    ///
    /// Consumes one repeat unless the animation is infinite. Returns the mode
    /// and face to render.
    pub fn step(&mut self) -> (AnimationMode, DieFace) {
        let state = &mut self.state;
        match state.mode {
            AnimationMode::Flood => {}
            AnimationMode::RandomRoll => {
                state.face = self.rng.roll();
            }
            AnimationMode::SpinUpRoll => {
                state.face = self.rng.roll_except(state.face);
                state.period_ms = spin_up_period(state.period_ms);
            }
            AnimationMode::SlowDownRoll => {
                state.face = self.rng.roll_except(state.face);
                state.period_ms = slow_down_period(state.period_ms);
            }
            AnimationMode::CountUp => {
                state.face = state.face.next();
            }
            AnimationMode::CountDown => {
                state.face = state.face.prev();
            }
            AnimationMode::Error => {
                state.enter_error();
                state.color = if state.color == RED { BLACK } else { RED };
            }
        }

        if !state.infinite {
            state.remaining_repeats = state.remaining_repeats.saturating_sub(1);
        }

        (state.mode, state.face)
    }
}

/// Next period of the accelerating roll: 70%, floored
pub const fn spin_up_period(period_ms: Millis) -> Millis {
    let next = period_ms / 10 * 7 + period_ms % 10 * 7 / 10;
    if next < SPIN_UP_FLOOR_MS {
        SPIN_UP_FLOOR_MS
    } else {
        next
    }
}

/// Next period of the decelerating roll: 105%, bounded on both sides
pub const fn slow_down_period(period_ms: Millis) -> Millis {
    let next = period_ms.saturating_add(period_ms / 20);
    if next < SLOW_DOWN_FLOOR_MS {
        SLOW_DOWN_FLOOR_MS
    } else if next > SLOW_DOWN_CEILING_MS {
        SLOW_DOWN_CEILING_MS
    } else {
        next
    }
}
