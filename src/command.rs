//! Command decoding
//!
//! Commands arrive as JSON objects, for example
//! `{"command":"rollTheDice","speed":100,"count":3,"color":"#00FF00"}`.
//! Every field is optional; absent fields leave the state untouched. Any
//! payload that cannot be understood switches the die to the error
//! indication instead of failing.

use core::fmt;

use log::{info, warn};
use serde::Deserialize;

use crate::animation::AnimationState;
use crate::clock::Millis;
use crate::color::{Rgb, parse_hex, rgb_to_u32};
use crate::face::DieFace;
use crate::frame::FrameBuffer;
use crate::mode::AnimationMode;

/// Why a command payload was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Payload is not a JSON object of the expected shape
    Decode,
    /// `command` names no known mode
    UnknownCommand,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Decode => write!(f, "malformed command payload"),
            CommandError::UnknownCommand => write!(f, "unknown command"),
        }
    }
}

/// Result of decoding one payload
pub type DecodedCommand = Result<DiceCommand, CommandError>;

/// Decoded field updates, `None` means "leave unchanged"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiceCommand {
    pub mode: Option<AnimationMode>,
    pub period_ms: Option<Millis>,
    pub count: Option<u32>,
    pub infinite: Option<bool>,
    pub color: Option<Rgb>,
    pub face: Option<DieFace>,
    pub brightness: Option<u8>,
}

impl DiceCommand {
    /// Apply every present field to `state`
    ///
    /// Selecting a mode blanks `frame`, so nothing of the previous animation
    /// survives into the new one.
    pub fn apply(&self, state: &mut AnimationState, frame: &mut FrameBuffer) {
        if let Some(mode) = self.mode {
            if mode != AnimationMode::Error {
                state.leave_error();
            }
            state.mode = mode;
            frame.clear();
            info!("[DICE] command: {}", mode.as_str());
        }
        if let Some(period_ms) = self.period_ms {
            state.set_period_ms(period_ms);
            info!("[DICE] speed: {}", state.period_ms());
        }
        if let Some(count) = self.count {
            state.remaining_repeats = count;
            info!("[DICE] count: {}", count);
        }
        if let Some(infinite) = self.infinite {
            state.infinite = infinite;
            info!("[DICE] infinity: {}", infinite);
        }
        if let Some(color) = self.color {
            state.color = color;
            info!("[DICE] color: #{:06X}", rgb_to_u32(color));
        }
        if let Some(face) = self.face {
            state.face = face;
            info!("[DICE] number: {}", face.get());
        }
        if let Some(brightness) = self.brightness {
            state.ramp.set_ceiling(brightness);
            info!("[DICE] brightness: {}", brightness);
        }

        // The error indication ignores the configured speed and count
        if self.mode == Some(AnimationMode::Error) {
            state.enter_error();
            state.ramp.pin();
            state.schedule_now();
        }
    }
}

/// Switch to the error indication after a rejected payload
///
/// Only the mode changes; speed, count, color and face keep their values.
/// The first flash is due on the next pass.
pub fn recover(state: &mut AnimationState, frame: &mut FrameBuffer, error: CommandError) {
    warn!("[DICE] {}, switching to error mode", error);
    state.mode = AnimationMode::Error;
    state.ramp.pin();
    state.schedule_now();
    frame.clear();
}

/// Apply a decoded command, recovering from decode failures
pub fn apply_decoded(
    state: &mut AnimationState,
    frame: &mut FrameBuffer,
    decoded: DecodedCommand,
) -> Result<(), CommandError> {
    match decoded {
        Ok(command) => {
            command.apply(state, frame);
            Ok(())
        }
        Err(error) => {
            recover(state, frame, error);
            Err(error)
        }
    }
}

/// Decode `payload` and apply it to `state`
///
/// The state is consistent whatever the outcome: an `Err` reports a payload
/// that has already been turned into the error indication.
pub fn decode_and_apply(
    state: &mut AnimationState,
    frame: &mut FrameBuffer,
    payload: &[u8],
) -> Result<(), CommandError> {
    apply_decoded(state, frame, decode(payload))
}

/// Decode a JSON command payload
///
/// `command` is either a mode name or a table index. The parser cannot
/// inspect a value before choosing its type, so a payload whose `command`
/// is not a string is parsed a second time with an integer `command`.
/// Escape sequences in strings are not unescaped.
pub fn decode(payload: &[u8]) -> DecodedCommand {
    match serde_json_core::from_slice::<WireCommand<'_, &str>>(payload) {
        Ok((wire, _)) => wire.into_command(resolve_name),
        Err(serde_json_core::de::Error::InvalidType) => {
            let (wire, _) = serde_json_core::from_slice::<WireCommand<'_, i64>>(payload)
                .map_err(|_| CommandError::Decode)?;
            wire.into_command(resolve_index)
        }
        Err(_) => Err(CommandError::Decode),
    }
}

/// JSON shape of a command, generic over the type of `command`
#[derive(Debug, Deserialize)]
struct WireCommand<'a, C> {
    #[serde(default)]
    command: Option<C>,
    #[serde(default)]
    speed: Option<i64>,
    #[serde(default)]
    count: Option<i64>,
    #[serde(default)]
    infinity: Option<bool>,
    #[serde(default, borrow)]
    color: Option<&'a str>,
    #[serde(default)]
    number: Option<i64>,
    #[serde(default)]
    brightness: Option<i64>,
}

impl<C> WireCommand<'_, C> {
    fn into_command(self, resolve: impl FnOnce(C) -> Option<AnimationMode>) -> DecodedCommand {
        let mode = match self.command {
            Some(command) => Some(resolve(command).ok_or(CommandError::UnknownCommand)?),
            None => None,
        };

        Ok(DiceCommand {
            mode,
            period_ms: self.speed.map(saturate_u32),
            count: self.count.map(saturate_u32),
            infinite: self.infinity,
            color: self.color.map(parse_hex),
            face: self.number.map(|number| DieFace::new(saturate_i32(number))),
            brightness: self.brightness.map(saturate_u8),
        })
    }
}

/// Resolve a mode name, or an index written as a string
fn resolve_name(name: &str) -> Option<AnimationMode> {
    match name.parse::<u8>() {
        Ok(index) => AnimationMode::from_raw(index),
        Err(_) => AnimationMode::parse_from_str(name),
    }
}

fn resolve_index(index: i64) -> Option<AnimationMode> {
    u8::try_from(index).ok().and_then(AnimationMode::from_raw)
}

fn saturate_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

fn saturate_u8(value: i64) -> u8 {
    u8::try_from(value.max(0)).unwrap_or(u8::MAX)
}

fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
