//! Gamma corrected fades
//!
//! LED brightness is perceived roughly logarithmically, so a linear fade
//! factor rushes through the dark end and lingers near full brightness.
//! Raising the factor to [`GAMMA`] before scaling evens the fade out.

use crate::{color::scale_color, frame::Frame};

/// Exponent applied to fade factors
pub const GAMMA: f32 = 2.2;

/// Map a linear fade factor in `0.0..=1.0` to a perceptually even one
///
/// Factors outside the range are clamped first.
#[inline]
pub fn gamma_correct(factor: f32) -> f32 {
    libm::powf(factor.clamp(0.0, 1.0), GAMMA)
}

/// Write `base` dimmed by the gamma corrected `factor` into `out`
///
/// Each channel is rounded and clamped. A factor of 1.0 copies `base`
/// unchanged, 0.0 produces an all-black frame.
pub fn apply_fade(base: &Frame, factor: f32, out: &mut Frame) {
    let corrected = gamma_correct(factor);
    for (dst, src) in out.as_mut_slice().iter_mut().zip(base.as_slice()) {
        *dst = scale_color(*src, corrected);
    }
}

/// Faded copy of a base frame, recomposited only when the factor changes
///
/// The cache key is the exact bit pattern of the factor, so a hit returns
/// precisely what [`apply_fade`] would have produced.
#[derive(Debug, Clone, Default)]
pub struct FadedFrame {
    frame: Frame,
    factor_bits: Option<u32>,
}

impl FadedFrame {
    pub const fn new() -> Self {
        Self {
            frame: Frame::new(),
            factor_bits: None,
        }
    }

    /// Fade `base` by `factor`, reusing the previous result for a repeated factor
    ///
    /// Callers must [`invalidate`](Self::invalidate) after changing `base`.
    pub fn compose(&mut self, base: &Frame, factor: f32) -> &Frame {
        let bits = factor.to_bits();
        if self.factor_bits != Some(bits) {
            apply_fade(base, factor, &mut self.frame);
            self.factor_bits = Some(bits);
        }
        &self.frame
    }

    /// Forget the cached factor
    pub fn invalidate(&mut self) {
        self.factor_bits = None;
    }

    /// Whether the last composition can be reused for `factor`
    pub fn is_cached(&self, factor: f32) -> bool {
        self.factor_bits == Some(factor.to_bits())
    }

    pub const fn frame(&self) -> &Frame {
        &self.frame
    }
}
