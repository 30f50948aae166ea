//! Monotonic time source
//!
//! Timestamps are a wrapping millisecond counter. Elapsed time is always computed with
//! modular subtraction, so a counter that overflows back to zero still yields the
//! correct interval as long as the real interval is shorter than the counter period.

use embassy_time::Instant;

/// Millisecond timestamp that wraps around at `u32::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Timestamp(pub u32);

impl Timestamp {
    /// Milliseconds elapsed since `earlier`, correct across a single wraparound
    pub const fn elapsed_since(self, earlier: Timestamp) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Timestamp of a 64-bit millisecond count, truncated so it wraps like a 32-bit tick
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms as u32)
    }

    /// Returns a timestamp `ms` milliseconds later, wrapping on overflow
    pub const fn wrapping_add(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}

/// Source of monotonic timestamps
pub trait TimeSource {
    /// Current time
    fn now(&self) -> Timestamp;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Time source backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyTimeSource;

impl TimeSource for EmbassyTimeSource {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(Instant::now().as_millis())
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use core::cell::Cell;

    use super::{TimeSource, Timestamp};

    /// Settable clock for tests
    #[derive(Debug, Default)]
    pub struct MockTime {
        now: Cell<u32>,
    }

    impl MockTime {
        pub fn new(now: u32) -> Self {
            Self { now: Cell::new(now) }
        }

        pub fn set(&self, now: u32) {
            self.now.set(now);
        }

        pub fn advance(&self, ms: u32) {
            self.now.set(self.now.get().wrapping_add(ms));
        }
    }

    impl TimeSource for MockTime {
        fn now(&self) -> Timestamp {
            Timestamp(self.now.get())
        }
    }
}
