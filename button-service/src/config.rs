//! Debouncer configuration

use embassy_time::Duration;

/// Default cooldown applied between two accepted transitions
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(10);

/// Debouncer configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Minimum spacing between two accepted transitions
    pub cooldown: Duration,
}

impl Config {
    /// Create a configuration with the given cooldown
    pub const fn new(cooldown: Duration) -> Self {
        Self { cooldown }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}
