#![no_std]

//! Animation engine for a light die
//!
//! Drives a 21-LED strip folded into the six faces of a die. Commands select
//! an animation (flood, rolls, counting, error flashing); the engine renders
//! it frame by frame without ever blocking the control loop.
//!
//! Layers, leaves first:
//! - `color`, `face`, `frame` - colors, die faces and the LED buffer
//! - `pattern` - lights the cells of a face or the whole die
//! - `animation` - mode state machine
//! - `command`, `channel` - JSON command decoding and queueing
//! - `renderer`, `frame_scheduler` - timing gate and output

pub mod animation;
pub mod channel;
pub mod clock;
pub mod color;
pub mod command;
pub mod face;
pub mod frame;
pub mod frame_scheduler;
pub mod math8;
pub mod mode;
pub mod pattern;
pub mod power;
pub mod ramp;
pub mod random;
pub mod renderer;

pub use animation::{AnimationState, Animator, DiceConfig};
pub use channel::{CommandChannel, CommandReceiver, CommandSender};
pub use command::{CommandError, DiceCommand, decode, decode_and_apply};
pub use face::{DieFace, LED_COUNT};
pub use frame::FrameBuffer;
pub use frame_scheduler::FrameScheduler;
pub use mode::AnimationMode;
pub use pattern::PatternEngine;
pub use power::PowerBudget;
pub use ramp::RampConfig;
pub use random::{RandomSource, Xorshift32};
pub use renderer::{Frame, Renderer};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip at the given global brightness
    fn write(&mut self, colors: &[Rgb], brightness: u8);
}

/// Route `log` output through the ESP32 UART
#[cfg(feature = "esp32-log")]
pub fn init_logger(level: log::LevelFilter) {
    esp_println::logger::init_logger(level);
}
