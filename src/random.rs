//! Randomness for the rolling animations
//!
//! The engine never touches hardware, so the entropy source is injected.
//! Firmware seeds [`Xorshift32`] from the chip RNG; tests seed it with a
//! constant to get reproducible rolls.

use crate::face::DieFace;

/// Seed used when a zero seed is supplied (xorshift is stuck at zero)
const FALLBACK_SEED: u32 = 0x9E37_79B9;

/// Largest multiple of 6 representable in a u32, for unbiased rolls
const ROLL_ZONE: u32 = u32::MAX - (u32::MAX % 6);

/// Source of uniformly distributed 32-bit values
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Roll a uniformly distributed face
    #[allow(clippy::cast_possible_wrap)]
    fn roll(&mut self) -> DieFace {
        loop {
            let value = self.next_u32();
            if value < ROLL_ZONE {
                return DieFace::new((value % 6) as i32 + 1);
            }
        }
    }

    /// Roll a face different from `previous`
    fn roll_except(&mut self, previous: DieFace) -> DieFace {
        loop {
            let face = self.roll();
            if face != previous {
                return face;
            }
        }
    }
}

/// Marsaglia xorshift32 generator
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { FALLBACK_SEED } else { seed },
        }
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(FALLBACK_SEED)
    }
}

impl RandomSource for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
