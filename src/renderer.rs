use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::Epoch;
use crate::color::ColorSource;
use crate::eyes::EyeAnimator;
use crate::frame::Frame;
use crate::channel::IntentReceiver;
use crate::intent_processor::{IntentEffects, IntentProcessor};
use crate::transition::PatternManager;

/// What the display is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Open eyes blinking
    Blink,
    /// Eyes closing, then the sleep indicator
    Sleep,
    /// Fading background patterns
    Pattern,
}

/// Configuration for the renderer
#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    /// Mode shown after construction
    pub mode: DisplayMode,
    /// Frame pacing for the eye animations
    pub eye_frame_duration: Duration,
    /// Frame pacing for the patterns; one frame is one pattern tick
    pub pattern_frame_duration: Duration,
}

impl RendererConfig {
    pub const DEFAULT: Self = Self {
        mode: DisplayMode::Blink,
        eye_frame_duration: Duration::from_millis(1000 / 30),
        pattern_frame_duration: Duration::from_millis(1000 / 20),
    };
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Picks the engine for the current mode and renders one frame per call
pub struct Renderer<'a, S: ColorSource> {
    intent_processor: IntentProcessor<'a>,
    config: RendererConfig,

    mode: DisplayMode,
    epoch: Epoch,

    eyes: EyeAnimator,
    patterns: PatternManager<S>,
    frame_buffer: Frame,
}

impl<'a, S: ColorSource> Renderer<'a, S> {
    /// Create a renderer whose mode epoch starts at `now`
    pub fn new(
        intents: IntentReceiver<'a>,
        source: S,
        config: &RendererConfig,
        now: Instant,
    ) -> Self {
        Self {
            intent_processor: IntentProcessor::new(intents),
            config: *config,
            mode: config.mode,
            epoch: Epoch::new(now),
            eyes: EyeAnimator::new(),
            patterns: PatternManager::new(source),
            frame_buffer: Frame::new(),
        }
    }

    /// Process one frame
    ///
    /// Drains pending intents first, then asks exactly one engine for the
    /// next image.
    pub fn render(&mut self, now: Instant) -> &Frame {
        self.process_intents(now);

        match self.mode {
            DisplayMode::Blink => {
                let elapsed = self.epoch.elapsed(now);
                self.eyes.render_blinking(elapsed, &mut self.frame_buffer);
                &self.frame_buffer
            }
            DisplayMode::Sleep => {
                let elapsed = self.epoch.elapsed(now);
                self.eyes.render_sleeping(elapsed, &mut self.frame_buffer);
                &self.frame_buffer
            }
            DisplayMode::Pattern => self.patterns.update(),
        }
    }

    /// Switch modes
    ///
    /// Entering an eye mode restarts its animation from time zero. Entering
    /// pattern mode resumes the existing pattern cycle. Requests for the
    /// current mode are ignored.
    pub fn set_mode(&mut self, mode: DisplayMode, now: Instant) {
        if mode == self.mode {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.set_mode] {:?} -> {:?}", self.mode, mode);

        self.mode = mode;
        self.epoch.reset(now);
    }

    /// Start a fresh pattern cycle
    pub fn restart_patterns(&mut self) {
        self.patterns.restart();
    }

    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Time spent in the current mode
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.epoch.elapsed(now)
    }

    /// Target time between frames for the current mode
    pub const fn frame_duration(&self) -> Duration {
        match self.mode {
            DisplayMode::Blink | DisplayMode::Sleep => self.config.eye_frame_duration,
            DisplayMode::Pattern => self.config.pattern_frame_duration,
        }
    }

    pub const fn eyes(&self) -> &EyeAnimator {
        &self.eyes
    }

    pub const fn patterns(&self) -> &PatternManager<S> {
        &self.patterns
    }

    /// Collect intents posted since the last frame (non-blocking)
    fn process_intents(&mut self, now: Instant) {
        let effects = self.intent_processor.process_pending();
        self.apply_effects(&effects, now);
    }

    /// Apply side effects from intent processing
    fn apply_effects(&mut self, effects: &IntentEffects, now: Instant) {
        if effects.restart_patterns {
            self.restart_patterns();
        }

        if let Some(mode) = effects.mode {
            self.set_mode(mode, now);
        }
    }
}
