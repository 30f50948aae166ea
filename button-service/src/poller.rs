//! Level poller: turns sampled levels into debouncer edges

use embassy_time::Duration;

use crate::config::Config;
use crate::debounce::Debouncer;
use crate::time::TimeSource;

/// Forwards changes of a sampled logical level to an owned [`Debouncer`].
///
/// Levels passed in are logical (`true` means active), polarity is the caller's concern.
/// Methods are not reentrant; the poller is meant to be owned by one control loop.
#[derive(Debug)]
pub struct LevelPoller<T: TimeSource> {
    current_level: bool,
    debouncer: Debouncer,
    time: T,
}

impl<T: TimeSource> LevelPoller<T> {
    /// Create a new poller. The initial level is inactive and the debouncer is idle.
    pub fn new(config: Config, time: T) -> Self {
        Self {
            current_level: false,
            debouncer: Debouncer::with_config(config),
            time,
        }
    }

    /// Feeds a sampled level, notifying the debouncer only if it differs from the last one
    pub fn poll(&mut self, level: bool) {
        if level == self.current_level {
            return;
        }

        self.current_level = level;
        self.notify(level);
    }

    /// Seeds the poller with `level` and forces a matching edge that bypasses the cooldown
    pub fn force_sync(&mut self, level: bool) {
        debug!("Forcing sync to level {}", level);
        self.current_level = level;
        self.debouncer.reset();
        self.notify(level);
    }

    /// Seeds the poller with `level` without reporting an event. The next edge is
    /// accepted regardless of cooldown.
    pub fn seed(&mut self, level: bool) {
        self.current_level = level;
        self.debouncer.reset();
    }

    /// Last sampled level, not debounced
    pub fn current_level(&self) -> bool {
        self.current_level
    }

    /// Returns true once per accepted activation
    pub fn was_activated(&mut self) -> bool {
        self.debouncer.consume_activated()
    }

    /// Returns true once per accepted deactivation
    pub fn was_deactivated(&mut self) -> bool {
        self.debouncer.consume_deactivated()
    }

    /// Replaces the debounce cooldown
    pub fn set_cooldown(&mut self, cooldown: Duration) {
        self.debouncer.set_cooldown(cooldown);
    }

    /// Underlying debouncer
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    fn notify(&mut self, level: bool) {
        let now = self.time.now();
        if level {
            self.debouncer.notify_active(now);
        } else {
            self.debouncer.notify_inactive(now);
        }
    }
}
