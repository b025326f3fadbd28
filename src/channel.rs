//! Intent mailbox shared between the driver and the renderer
//!
//! Drivers post from an interrupt (a button press), a sensor task or another
//! thread (a desktop window); the renderer collects once per frame. Posted
//! intents are merged into a single pending [`IntentEffects`] right away, so
//! a light sensor flipping modes faster than the frame rate can never fill
//! anything up: the latest mode request replaces earlier ones, and a restart
//! request stays pending until it is collected.

use core::cell::Cell;

use critical_section::Mutex;

use crate::intent_processor::{DisplayIntent, IntentEffects};

/// Mailbox holding the merged, not yet collected intents.
///
/// Usable in a `static`.
pub struct IntentChannel {
    pending: Mutex<Cell<IntentEffects>>,
}

impl IntentChannel {
    /// Creates a mailbox with nothing pending.
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(IntentEffects::NONE)),
        }
    }

    /// Returns a copyable handle for driver code.
    pub const fn sender(&self) -> IntentSender<'_> {
        IntentSender { channel: self }
    }

    /// Returns the handle the renderer collects from.
    pub const fn receiver(&self) -> IntentReceiver<'_> {
        IntentReceiver { channel: self }
    }

    /// Merges `intent` into the pending effects. Never blocks or fails.
    pub fn send(&self, intent: DisplayIntent) {
        critical_section::with(|cs| {
            let cell = self.pending.borrow(cs);
            let mut effects = cell.get();
            effects.record(intent);
            cell.set(effects);
        });
    }

    /// Takes everything pending, leaving the mailbox empty.
    pub fn take(&self) -> IntentEffects {
        critical_section::with(|cs| self.pending.borrow(cs).replace(IntentEffects::NONE))
    }

    /// Returns a copy of the pending effects without collecting them.
    pub fn peek(&self) -> IntentEffects {
        critical_section::with(|cs| self.pending.borrow(cs).get())
    }

    /// Returns `true` when nothing is waiting to be collected.
    pub fn is_empty(&self) -> bool {
        !self.peek().has_effects()
    }
}

impl Default for IntentChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Posting half of an [`IntentChannel`], freely copyable.
#[derive(Clone, Copy)]
pub struct IntentSender<'a> {
    channel: &'a IntentChannel,
}

impl IntentSender<'_> {
    /// Posts an intent; see [`IntentChannel::send`].
    pub fn send(&self, intent: DisplayIntent) {
        self.channel.send(intent);
    }
}

/// Collecting half of an [`IntentChannel`], owned by the renderer.
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a> {
    channel: &'a IntentChannel,
}

impl IntentReceiver<'_> {
    /// Collects everything posted since the last call.
    pub fn take(&self) -> IntentEffects {
        self.channel.take()
    }
}
