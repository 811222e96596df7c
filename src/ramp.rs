//! Brightness fade-in for slow animations
//!
//! When frames are far apart, each new face fades up from black instead of
//! popping on. Brightness grows geometrically on a fixed cadence until it
//! reaches the ceiling; only then may the next step fire.

use embassy_time::Duration;

use crate::clock::{Millis, duration_millis, is_due};

/// Periods above this engage the ramp
pub const DEFAULT_RAMP_THRESHOLD: Duration = Duration::from_millis(800);

/// Time between two ramp increments
pub const DEFAULT_RAMP_INTERVAL: Duration = Duration::from_millis(20);

pub const DEFAULT_RAMP_FACTOR: f32 = 1.2;

/// Lowest non-zero brightness; a geometric ramp cannot start from zero
pub const DEFAULT_RAMP_FLOOR: f32 = 1.2;

/// Configuration for the brightness ramp
#[derive(Debug, Clone, Copy)]
pub struct RampConfig {
    /// Periods strictly above this value fade in
    pub threshold: Duration,
    /// Cadence of increments
    pub interval: Duration,
    /// Multiplier applied per increment
    pub factor: f32,
    /// Minimum value after an increment
    pub floor: f32,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_RAMP_THRESHOLD,
            interval: DEFAULT_RAMP_INTERVAL,
            factor: DEFAULT_RAMP_FACTOR,
            floor: DEFAULT_RAMP_FLOOR,
        }
    }
}

/// Global brightness with geometric fade-in
#[derive(Debug, Clone)]
pub struct BrightnessRamp {
    value: f32,
    ceiling: u8,
    last_fade_ms: Millis,
    threshold_ms: Millis,
    interval_ms: Millis,
    factor: f32,
    floor: f32,
}

impl BrightnessRamp {
    /// Create a ramp that starts at its ceiling
    pub fn new(ceiling: u8, config: &RampConfig) -> Self {
        Self {
            value: f32::from(ceiling),
            ceiling,
            last_fade_ms: 0,
            threshold_ms: duration_millis(config.threshold),
            interval_ms: duration_millis(config.interval),
            factor: config.factor,
            floor: config.floor,
        }
    }

    /// Check if a period is long enough for the fade to be visible
    pub const fn is_engaged(&self, period_ms: Millis) -> bool {
        period_ms > self.threshold_ms
    }

    pub fn is_complete(&self) -> bool {
        self.value >= f32::from(self.ceiling)
    }

    /// Apply one increment if the cadence allows it
    ///
    /// Returns `true` when the brightness changed.
    pub fn advance(&mut self, now: Millis) -> bool {
        if self.is_complete() || !is_due(now, self.last_fade_ms, self.interval_ms) {
            return false;
        }
        let ceiling = f32::from(self.ceiling);
        self.value = (self.value * self.factor).max(self.floor).min(ceiling);
        self.last_fade_ms = now;
        true
    }

    /// Drop to black and start a new fade-in at `now`
    pub fn restart(&mut self, now: Millis) {
        self.value = 0.0;
        self.last_fade_ms = now;
    }

    /// Jump straight to the ceiling
    pub fn pin(&mut self) {
        self.value = f32::from(self.ceiling);
    }

    pub const fn ceiling(&self) -> u8 {
        self.ceiling
    }

    pub fn set_ceiling(&mut self, ceiling: u8) {
        self.ceiling = ceiling;
        self.value = self.value.min(f32::from(ceiling));
    }

    pub const fn last_fade_ms(&self) -> Millis {
        self.last_fade_ms
    }

    /// Current brightness rounded to the driver's 8-bit scale
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn brightness(&self) -> u8 {
        libm::roundf(self.value).clamp(0.0, 255.0) as u8
    }
}
