//! Animation modes and the command name table
//!
//! Numeric ids follow the position in the table, so `{"command": 1}` and
//! `{"command": "rollTheDice"}` select the same mode.

const MODE_NAME_FLOOD: &str = "flood";
const MODE_NAME_RANDOM_ROLL: &str = "rollTheDice";
const MODE_NAME_SPIN_UP_ROLL: &str = "spinUp";
const MODE_NAME_SLOW_DOWN_ROLL: &str = "slowDown";
const MODE_NAME_COUNT_UP: &str = "countUp";
const MODE_NAME_COUNT_DOWN: &str = "countDown";
const MODE_NAME_ERROR: &str = "error";

const MODE_ID_FLOOD: u8 = 0;
const MODE_ID_RANDOM_ROLL: u8 = 1;
const MODE_ID_SPIN_UP_ROLL: u8 = 2;
const MODE_ID_SLOW_DOWN_ROLL: u8 = 3;
const MODE_ID_COUNT_UP: u8 = 4;
const MODE_ID_COUNT_DOWN: u8 = 5;
const MODE_ID_ERROR: u8 = 6;

/// Active animation algorithm
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationMode {
    /// Every LED in one color
    #[default]
    Flood = MODE_ID_FLOOD,
    /// A single uniformly random face per step
    RandomRoll = MODE_ID_RANDOM_ROLL,
    /// Random faces, speeding up towards a floor period
    SpinUpRoll = MODE_ID_SPIN_UP_ROLL,
    /// Random faces, slowing down towards a ceiling period
    SlowDownRoll = MODE_ID_SLOW_DOWN_ROLL,
    CountUp = MODE_ID_COUNT_UP,
    CountDown = MODE_ID_COUNT_DOWN,
    /// Red/black flashing, sticky until the next valid mode switch
    Error = MODE_ID_ERROR,
}

impl AnimationMode {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_FLOOD => Self::Flood,
            MODE_ID_RANDOM_ROLL => Self::RandomRoll,
            MODE_ID_SPIN_UP_ROLL => Self::SpinUpRoll,
            MODE_ID_SLOW_DOWN_ROLL => Self::SlowDownRoll,
            MODE_ID_COUNT_UP => Self::CountUp,
            MODE_ID_COUNT_DOWN => Self::CountDown,
            MODE_ID_ERROR => Self::Error,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flood => MODE_NAME_FLOOD,
            Self::RandomRoll => MODE_NAME_RANDOM_ROLL,
            Self::SpinUpRoll => MODE_NAME_SPIN_UP_ROLL,
            Self::SlowDownRoll => MODE_NAME_SLOW_DOWN_ROLL,
            Self::CountUp => MODE_NAME_COUNT_UP,
            Self::CountDown => MODE_NAME_COUNT_DOWN,
            Self::Error => MODE_NAME_ERROR,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_FLOOD => Some(Self::Flood),
            MODE_NAME_RANDOM_ROLL => Some(Self::RandomRoll),
            MODE_NAME_SPIN_UP_ROLL => Some(Self::SpinUpRoll),
            MODE_NAME_SLOW_DOWN_ROLL => Some(Self::SlowDownRoll),
            MODE_NAME_COUNT_UP => Some(Self::CountUp),
            MODE_NAME_COUNT_DOWN => Some(Self::CountDown),
            MODE_NAME_ERROR => Some(Self::Error),
            _ => None,
        }
    }

    /// Check if the mode shows a single face rather than flooding the die
    pub const fn shows_face(self) -> bool {
        matches!(
            self,
            Self::RandomRoll | Self::SpinUpRoll | Self::SlowDownRoll | Self::CountUp | Self::CountDown
        )
    }
}
