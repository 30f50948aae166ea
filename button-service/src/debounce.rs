//! Debounce Module
//!
//! Cooldown debouncer: the first raw edge after a quiet period is accepted immediately,
//! and every further edge is dropped until `cooldown` has elapsed since that accepted
//! edge. The window is anchored to the last *accepted* transition, so a long burst of
//! chatter cannot keep extending it.
//!
//! At most one accepted transition is pending at a time. It is reported once through
//! [`Debouncer::consume_activated`] or [`Debouncer::consume_deactivated`].
//!
//! All methods take `&mut self` and are not reentrant; a single control loop is
//! expected to own the debouncer.

use embassy_time::Duration;

use crate::config::Config;
use crate::time::Timestamp;

/// Debouncer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// No transition recorded since creation or the last reset
    Idle,
    /// An activation was accepted and not yet consumed
    PendingActive,
    /// A deactivation was accepted and not yet consumed
    PendingInactive,
    /// The last accepted transition was consumed
    Acknowledged,
}

#[derive(Debug)]
/// Struct representing a cooldown debouncer for a single input.
pub struct Debouncer {
    phase: Phase,
    last_accepted_at: Timestamp,
    cooldown: Duration,
}

impl Debouncer {
    /// Creates a new idle Debouncer with the given cooldown.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            last_accepted_at: Timestamp::default(),
            cooldown,
        }
    }

    /// Creates a new idle Debouncer from a [`Config`].
    pub fn with_config(config: Config) -> Self {
        Self::new(config.cooldown)
    }

    /// Reports that the raw signal just went active. Returns true if the edge was accepted.
    pub fn notify_active(&mut self, now: Timestamp) -> bool {
        self.accept(Phase::PendingActive, now)
    }

    /// Reports that the raw signal just went inactive. Returns true if the edge was accepted.
    pub fn notify_inactive(&mut self, now: Timestamp) -> bool {
        self.accept(Phase::PendingInactive, now)
    }

    /// Returns true once per accepted activation.
    pub fn consume_activated(&mut self) -> bool {
        self.consume(Phase::PendingActive)
    }

    /// Returns true once per accepted deactivation.
    pub fn consume_deactivated(&mut self) -> bool {
        self.consume(Phase::PendingInactive)
    }

    /// Forgets any pending or acknowledged transition, so the next edge is accepted
    /// regardless of cooldown.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Replaces the cooldown. Applies to every following decision, including one for an
    /// already pending transition.
    pub fn set_cooldown(&mut self, cooldown: Duration) {
        self.cooldown = cooldown;
    }

    /// Current cooldown
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true if an accepted transition has not been consumed yet
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::PendingActive | Phase::PendingInactive)
    }

    fn accept(&mut self, pending: Phase, now: Timestamp) -> bool {
        let accepted = match self.phase {
            Phase::Idle => true,
            Phase::PendingActive | Phase::PendingInactive | Phase::Acknowledged => {
                let elapsed = Duration::from_millis(u64::from(now.elapsed_since(self.last_accepted_at)));
                elapsed >= self.cooldown
            }
        };

        if accepted {
            trace!("Accepted {:?} at {}ms", pending, now.0);
            self.phase = pending;
            self.last_accepted_at = now;
        } else {
            trace!(
                "Dropped bounce at {}ms, {}ms since last accepted edge",
                now.0,
                now.elapsed_since(self.last_accepted_at)
            );
        }

        accepted
    }

    fn consume(&mut self, pending: Phase) -> bool {
        if self.phase != pending {
            return false;
        }

        self.phase = Phase::Acknowledged;
        true
    }
}

/// Default Debouncer with a cooldown of 10ms.
impl Default for Debouncer {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}
