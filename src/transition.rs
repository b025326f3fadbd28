//! Pattern transition manager
//!
//! Cycles through the pattern library with gamma corrected fades:
//!
//! ```text
//! fade_in (30) -> hold (50) -> fade_out (20) -> black (20) -> next pattern -> fade_in ...
//! ```
//!
//! The manager is tick driven: every [`PatternManager::update`] call is one
//! tick. The durations are tuned for roughly 20 ticks per second.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::{
    color::ColorSource,
    frame::Frame,
    gamma::FadedFrame,
    pattern::PatternId,
};

/// Tick durations of every phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTimings {
    pub fade_in: u32,
    pub hold: u32,
    pub fade_out: u32,
    pub black: u32,
    /// Lowest fade factor used by fade-out and the black phase
    pub fade_floor: f32,
}

impl PhaseTimings {
    pub const DEFAULT: Self = Self {
        fade_in: 30,
        hold: 50,
        fade_out: 20,
        black: 20,
        fade_floor: 0.0,
    };

    /// Ticks from one pattern selection to the next
    pub const fn cycle_len(&self) -> u32 {
        self.fade_in + self.hold + self.fade_out + self.black
    }
}

impl Default for PhaseTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const TIMINGS: PhaseTimings = PhaseTimings::DEFAULT;

/// Phase of the transition cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    FadeIn,
    Hold,
    FadeOut,
    Black,
}

/// Tick driven pattern cycler
///
/// Owns its color source; not meant to be shared between threads.
pub struct PatternManager<S: ColorSource> {
    source: S,
    phase: Phase,
    tick: u32,
    phase_start_tick: u32,
    /// Undimmed current pattern
    base: Frame,
    faded: FadedFrame,
    pattern: PatternId,
    selections: u32,
}

impl<S: ColorSource> PatternManager<S> {
    /// Create a manager in fade-in with a freshly selected pattern
    pub fn new(source: S) -> Self {
        let mut manager = Self {
            source,
            phase: Phase::FadeIn,
            tick: 0,
            phase_start_tick: 0,
            base: Frame::new(),
            faded: FadedFrame::new(),
            pattern: PatternId::GradientWave,
            selections: 0,
        };
        manager.select_pattern(None);
        manager
    }

    /// Advance one tick and return the frame to display
    #[allow(clippy::cast_precision_loss)]
    pub fn update(&mut self) -> &Frame {
        self.tick = self.tick.wrapping_add(1);
        let ticks = self.ticks_in_phase();

        match self.phase {
            Phase::FadeIn => {
                let factor = (ticks as f32 / TIMINGS.fade_in as f32).min(1.0);
                self.faded.compose(&self.base, factor);
                if ticks >= TIMINGS.fade_in {
                    self.enter(Phase::Hold);
                }
            }
            Phase::Hold => {
                if ticks >= TIMINGS.hold {
                    self.enter(Phase::FadeOut);
                }
                self.faded.compose(&self.base, 1.0);
            }
            Phase::FadeOut => {
                let factor =
                    (1.0 - ticks as f32 / TIMINGS.fade_out as f32).max(TIMINGS.fade_floor);
                self.faded.compose(&self.base, factor);
                if ticks >= TIMINGS.fade_out {
                    self.enter(Phase::Black);
                }
            }
            Phase::Black => {
                self.faded.compose(&self.base, TIMINGS.fade_floor);
                if ticks >= TIMINGS.black {
                    self.select_pattern(Some(self.pattern));
                }
            }
        }

        self.faded.frame()
    }

    /// Start over from fade-in with a new pattern, as if freshly constructed
    ///
    /// The current pattern is still excluded from the draw.
    pub fn restart(&mut self) {
        self.tick = 0;
        self.select_pattern(Some(self.pattern));
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Currently displayed generator
    pub const fn pattern(&self) -> PatternId {
        self.pattern
    }

    /// Ticks since the current phase started
    pub const fn ticks_in_phase(&self) -> u32 {
        self.tick.wrapping_sub(self.phase_start_tick)
    }

    /// How many patterns were selected so far, including the initial one
    pub const fn selections(&self) -> u32 {
        self.selections
    }

    /// Undimmed current pattern
    pub const fn base(&self) -> &Frame {
        &self.base
    }

    /// Last frame returned by [`update`](Self::update)
    pub const fn frame(&self) -> &Frame {
        self.faded.frame()
    }

    fn enter(&mut self, phase: Phase) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[PatternManager.enter] {:?} -> {:?} at tick {}",
            self.phase, phase, self.tick
        );
        self.phase = phase;
        self.phase_start_tick = self.tick;
    }

    /// Pick a generator other than `previous`, render it and restart at fade-in
    fn select_pattern(&mut self, previous: Option<PatternId>) {
        let candidates: Vec<PatternId, { PatternId::COUNT }> = PatternId::ALL
            .iter()
            .copied()
            .filter(|id| Some(*id) != previous)
            .collect();
        let index = self.source.pick_index(candidates.len());
        let chosen = candidates
            .get(index)
            .or_else(|| candidates.first())
            .copied()
            .unwrap_or(PatternId::GradientWave);

        chosen.render(&mut self.source, &mut self.base);
        self.faded.invalidate();
        self.pattern = chosen;
        self.selections = self.selections.wrapping_add(1);

        #[cfg(feature = "esp32-log")]
        println!("[PatternManager.select_pattern] {}", chosen.as_str());

        self.enter(Phase::FadeIn);
    }
}
