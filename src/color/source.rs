//! Injectable randomness for the pattern engine
//!
//! Pattern generators never touch a global random number generator. Every
//! random decision goes through a [`ColorSource`], so tests can pin colors
//! and pattern choices.

use rand::{Rng, RngCore, SeedableRng, rngs::SmallRng};

use super::{COOL_HUE_MAX, COOL_HUE_MIN, Rgb, cool_hue_color};

/// Source of colors and choices for the pattern engine
pub trait ColorSource {
    /// Next color from the cool (blue to violet) band
    fn cool_color(&mut self) -> Rgb;

    /// Uniform index in `0..len`
    ///
    /// Implementations must return 0 when `len` is 0.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Pick a random hue from the cool band and convert it at full
/// saturation and value.
pub fn random_cool_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    cool_hue_color(rng.gen_range(COOL_HUE_MIN..=COOL_HUE_MAX))
}

/// [`ColorSource`] backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomColorSource<R> {
    rng: R,
}

impl<R: RngCore> RandomColorSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give the generator back
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomColorSource<SmallRng> {
    /// Small, fast generator seeded from a fixed value
    ///
    /// On hardware the seed usually comes from a noisy ADC read or the
    /// boot timestamp.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> ColorSource for RandomColorSource<R> {
    fn cool_color(&mut self) -> Rgb {
        random_cool_color(&mut self.rng)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}
