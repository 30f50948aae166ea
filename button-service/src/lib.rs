//! Button service: cooldown debouncing for buttons and switches
//!
//! Layers, leaf first:
//! - [`debounce::Debouncer`]: accepts an edge, then ignores bounce until the cooldown elapses
//! - [`poller::LevelPoller`]: turns sampled logical levels into debouncer edges
//! - [`button::Button`]: samples an `embedded-hal` input pin and drives a poller
//!
//! Everything is poll driven and single-owner: there are no background timers and no locks.
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod button;
pub mod config;
pub mod debounce;
pub mod poller;
pub mod time;

pub use button::{ActiveState, Button, Error};
pub use config::Config;
pub use debounce::{Debouncer, Phase};
pub use poller::LevelPoller;
pub use time::{EmbassyTimeSource, TimeSource, Timestamp};
