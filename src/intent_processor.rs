//! Intent processing module
//!
//! Drivers (button handlers, light sensor tasks, a desktop window) post
//! [`DisplayIntent`]s to an [`IntentChannel`](crate::channel::IntentChannel);
//! the renderer collects the merged result at the start of every frame.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::IntentReceiver;
use crate::renderer::DisplayMode;

/// Request from the driver to change what is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayIntent {
    /// Switch to another mode.
    SetMode(DisplayMode),
    /// Throw away the running pattern cycle and start a new one.
    RestartPatterns,
}

/// Merged intents that the renderer should apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentEffects {
    /// Mode requested last.
    pub mode: Option<DisplayMode>,
    /// Whether a pattern restart was requested.
    pub restart_patterns: bool,
}

impl IntentEffects {
    /// No pending changes.
    pub const NONE: Self = Self {
        mode: None,
        restart_patterns: false,
    };

    /// Merges one intent. A later mode request replaces an earlier one.
    pub fn record(&mut self, intent: DisplayIntent) {
        match intent {
            DisplayIntent::SetMode(mode) => self.mode = Some(mode),
            DisplayIntent::RestartPatterns => self.restart_patterns = true,
        }
    }

    /// Returns `true` if anything needs to be applied.
    pub const fn has_effects(&self) -> bool {
        self.mode.is_some() || self.restart_patterns
    }
}

/// Collects merged intents on behalf of the renderer.
pub struct IntentProcessor<'a> {
    intents: IntentReceiver<'a>,
}

impl<'a> IntentProcessor<'a> {
    /// Creates a processor reading from `intents`.
    pub const fn new(intents: IntentReceiver<'a>) -> Self {
        Self { intents }
    }

    /// Takes every intent posted since the last call (non-blocking).
    ///
    /// When several mode changes were posted only the last one survives.
    pub fn process_pending(&mut self) -> IntentEffects {
        let effects = self.intents.take();

        #[cfg(feature = "esp32-log")]
        if effects.has_effects() {
            println!("[IntentProcessor.process_pending] {:?}", effects);
        }

        effects
    }
}
