//! Background pattern library
//!
//! Every generator fills a whole frame. Colors are drawn from the supplied
//! [`ColorSource`] once per call, so the same source state always yields
//! the same frame.

mod checker_diamond;
mod gradient_wave;
mod rug;
mod walker;

pub use checker_diamond::checker_diamond;
pub use gradient_wave::gradient_wave;
pub use rug::rug;
pub use walker::walker;

use crate::{color::ColorSource, frame::Frame};

const PATTERN_NAME_GRADIENT_WAVE: &str = "gradient_wave";
const PATTERN_NAME_CHECKER_DIAMOND: &str = "checker_diamond";
const PATTERN_NAME_RUG: &str = "rug";
const PATTERN_NAME_WALKER: &str = "walker";

const PATTERN_ID_GRADIENT_WAVE: u8 = 0;
const PATTERN_ID_CHECKER_DIAMOND: u8 = 1;
const PATTERN_ID_RUG: u8 = 2;
const PATTERN_ID_WALKER: u8 = 3;

/// Known pattern generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    /// See [`gradient_wave`].
    GradientWave = PATTERN_ID_GRADIENT_WAVE,
    /// See [`checker_diamond`].
    CheckerDiamond = PATTERN_ID_CHECKER_DIAMOND,
    /// See [`rug`].
    Rug = PATTERN_ID_RUG,
    /// See [`walker`].
    Walker = PATTERN_ID_WALKER,
}

impl PatternId {
    /// Number of generators.
    pub const COUNT: usize = 4;

    /// Every generator, in id order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::GradientWave,
        Self::CheckerDiamond,
        Self::Rug,
        Self::Walker,
    ];

    /// Converts a raw id back into a generator, `None` if unknown.
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_GRADIENT_WAVE => Self::GradientWave,
            PATTERN_ID_CHECKER_DIAMOND => Self::CheckerDiamond,
            PATTERN_ID_RUG => Self::Rug,
            PATTERN_ID_WALKER => Self::Walker,
            _ => return None,
        })
    }

    /// Returns the generator's snake case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GradientWave => PATTERN_NAME_GRADIENT_WAVE,
            Self::CheckerDiamond => PATTERN_NAME_CHECKER_DIAMOND,
            Self::Rug => PATTERN_NAME_RUG,
            Self::Walker => PATTERN_NAME_WALKER,
        }
    }

    /// Looks a generator up by the name [`as_str`](Self::as_str) returns.
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_GRADIENT_WAVE => Some(Self::GradientWave),
            PATTERN_NAME_CHECKER_DIAMOND => Some(Self::CheckerDiamond),
            PATTERN_NAME_RUG => Some(Self::Rug),
            PATTERN_NAME_WALKER => Some(Self::Walker),
            _ => None,
        }
    }

    /// Runs the generator into `frame`.
    pub fn render<S: ColorSource + ?Sized>(self, source: &mut S, frame: &mut Frame) {
        match self {
            Self::GradientWave => gradient_wave(source, frame),
            Self::CheckerDiamond => checker_diamond(source, frame),
            Self::Rug => rug(source, frame),
            Self::Walker => walker(source, frame),
        }
    }

    /// Runs the generator into a fresh frame.
    pub fn generate<S: ColorSource + ?Sized>(self, source: &mut S) -> Frame {
        let mut frame = Frame::new();
        self.render(source, &mut frame);
        frame
    }
}

/// Generates a [`gradient_wave`] frame.
pub fn gradient_wave_pattern<S: ColorSource + ?Sized>(source: &mut S) -> Frame {
    PatternId::GradientWave.generate(source)
}

/// Generates a [`checker_diamond`] frame.
pub fn checker_diamond_pattern<S: ColorSource + ?Sized>(source: &mut S) -> Frame {
    PatternId::CheckerDiamond.generate(source)
}

/// Generates a [`rug`] frame.
pub fn rug_pattern<S: ColorSource + ?Sized>(source: &mut S) -> Frame {
    PatternId::Rug.generate(source)
}

/// Generates a [`walker`] frame.
pub fn walker_pattern<S: ColorSource + ?Sized>(source: &mut S) -> Frame {
    PatternId::Walker.generate(source)
}
