//! Supply current limiting
//!
//! Estimates strip current with the usual WS2812B model and lowers the global
//! brightness so a frame never draws more than the supply allows.

use crate::color::Rgb;

/// Current drawn by one channel at full duty, in milliamps
const RED_MA: u32 = 16;
const GREEN_MA: u32 = 11;
const BLUE_MA: u32 = 15;

/// Quiescent current of one LED controller
const IDLE_MA: u32 = 1;

/// Default supply of the die: 5V, 1.5A
pub const DEFAULT_POWER_BUDGET: PowerBudget = PowerBudget {
    volts: 5,
    milliamps: 1500,
};

/// Supply limits of the LED strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerBudget {
    pub volts: u8,
    pub milliamps: u32,
}

impl PowerBudget {
    pub const fn milliwatts(self) -> u32 {
        self.volts as u32 * self.milliamps
    }
}

/// Estimated draw of `frame` at full brightness, in milliamps
pub fn frame_current_ma(frame: &[Rgb]) -> u32 {
    let (red, green, blue) = frame.iter().fold((0u32, 0u32, 0u32), |(r, g, b), led| {
        (
            r + u32::from(led.r),
            g + u32::from(led.g),
            b + u32::from(led.b),
        )
    });
    let channels = (red * RED_MA + green * GREEN_MA + blue * BLUE_MA) >> 8;
    #[allow(clippy::cast_possible_truncation)]
    let idle = frame.len() as u32 * IDLE_MA;
    channels + idle
}

/// Highest brightness not above `brightness` that keeps `frame` in budget
#[allow(clippy::cast_possible_truncation)]
pub fn limit_brightness(frame: &[Rgb], brightness: u8, budget: PowerBudget) -> u8 {
    let volts = u32::from(budget.volts.max(1));
    let requested_mw = frame_current_ma(frame) * u32::from(brightness) / 256 * volts;
    let max_mw = budget.milliwatts();
    if requested_mw <= max_mw {
        return brightness;
    }
    (u32::from(brightness) * max_mw / requested_mw) as u8
}
