//! Injectable random sources
//!
//! Stateful effects and the dissolve blend draw from a [`RandomSource`]
//! owned by the caller, so a seeded source makes them reproducible.

/// Source of uniformly distributed random words
pub trait RandomSource {
    /// Next random 32-bit word
    fn next_u32(&mut self) -> u32;

    /// Random byte
    #[allow(clippy::cast_possible_truncation)]
    fn next_u8(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }

    /// Random value in `0..=max`
    #[allow(clippy::cast_possible_truncation)]
    fn below_or_eq(&mut self, max: u8) -> u8 {
        ((u32::from(self.next_u8()) * (u32::from(max) + 1)) >> 8) as u8
    }

    /// Random value in `min..=max`
    fn between(&mut self, min: u8, max: u8) -> u8 {
        if max <= min {
            return min;
        }
        min + self.below_or_eq(max - min)
    }

    /// Fair coin flip
    fn coin(&mut self) -> bool {
        self.next_u32() & 0x8000_0000 != 0
    }
}

const DEFAULT_SEED: u32 = 0x2545_f491;

/// Marsaglia xorshift32 generator
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator from a seed; a zero seed is replaced by a fixed one
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}
