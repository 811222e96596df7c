//! Die faces and their LED layout
//!
//! The 21 LEDs of the strip are split into six disjoint groups, one per face:
//! face `n` owns exactly `n` LEDs, laid out consecutively.

use core::ops::Range;

/// Number of LEDs on the die
pub const LED_COUNT: usize = 21;

/// LED ranges owned by each face, indexed by `face - 1`
pub const FACE_CELLS: [Range<usize>; 6] = [0..1, 1..3, 3..6, 6..10, 10..15, 15..21];

/// Die number in `1..=6`
///
/// Every constructor clamps, so a value outside the range can never be
/// observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DieFace(u8);

impl DieFace {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(6);

    /// Create a face, clamping `value` into `1..=6`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn new(value: i32) -> Self {
        if value <= 1 {
            Self::MIN
        } else if value >= 6 {
            Self::MAX
        } else {
            Self(value as u8)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Next face, wrapping from 6 back to 1
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 >= Self::MAX.0 {
            Self::MIN
        } else {
            Self(self.0 + 1)
        }
    }

    /// Previous face, wrapping from 1 to 6
    #[must_use]
    pub const fn prev(self) -> Self {
        if self.0 <= Self::MIN.0 {
            Self::MAX
        } else {
            Self(self.0 - 1)
        }
    }

    /// LEDs lit when this face is shown
    pub fn cells(self) -> Range<usize> {
        FACE_CELLS[usize::from(self.0 - 1)].clone()
    }
}

impl Default for DieFace {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<i32> for DieFace {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}
