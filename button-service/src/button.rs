//! Debounced button on top of an `embedded-hal` input pin

use embassy_time::Duration;
use embedded_hal::digital::{ErrorKind, InputPin};
use embedded_hal_async::digital::Wait;

use crate::config::Config;
use crate::poller::LevelPoller;
use crate::time::TimeSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Enum representing if the button is active low or active high.
pub enum ActiveState {
    /// Button is active low, e.g. a switch to ground with a pull-up.
    #[default]
    ActiveLow,
    /// Button is active high.
    ActiveHigh,
}

/// Button error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Reading or waiting on the pin failed
    Pin(ErrorKind),
}

/// Button (or switch) seen as pressed or released.
///
/// The pin is expected to be configured by the HAL already. Methods are not reentrant.
#[derive(Debug)]
pub struct Button<I, T: TimeSource> {
    pin: I,
    active_state: ActiveState,
    poller: LevelPoller<T>,
}

impl<I: InputPin, T: TimeSource> Button<I, T> {
    /// Create a new button. Call [`Button::begin`] before polling.
    pub fn new(pin: I, active_state: ActiveState, config: Config, time: T) -> Self {
        Self {
            pin,
            active_state,
            poller: LevelPoller::new(config, time),
        }
    }

    /// Samples the pin as the initial state, without reporting a press or release
    pub fn begin(&mut self) -> Result<(), Error> {
        let pressed = self.sample()?;
        self.poller.seed(pressed);
        Ok(())
    }

    /// Samples the pin and reports a level change to the debouncer
    pub fn update(&mut self) -> Result<(), Error> {
        let pressed = self.sample()?;
        self.poller.poll(pressed);
        Ok(())
    }

    /// Re-samples the pin and reports its current state as a fresh press or release,
    /// ignoring any running cooldown
    pub fn click(&mut self) -> Result<(), Error> {
        let pressed = self.sample()?;
        self.poller.force_sync(pressed);
        Ok(())
    }

    /// True if the button was pressed at the last sample
    pub fn is_pressed(&self) -> bool {
        self.poller.current_level()
    }

    /// Returns true once per debounced press
    pub fn was_pressed(&mut self) -> bool {
        self.poller.was_activated()
    }

    /// Returns true once per debounced release
    pub fn was_released(&mut self) -> bool {
        self.poller.was_deactivated()
    }

    /// Replaces the debounce cooldown
    pub fn set_debounce_timeout(&mut self, timeout: Duration) {
        self.poller.set_cooldown(timeout);
    }

    /// Consumes the button and returns the pin
    pub fn release(self) -> I {
        self.pin
    }

    fn sample(&mut self) -> Result<bool, Error> {
        let is_high = self.pin.is_high().map_err(pin_error)?;

        Ok(match self.active_state {
            ActiveState::ActiveLow => !is_high,
            ActiveState::ActiveHigh => is_high,
        })
    }
}

impl<I: InputPin + Wait, T: TimeSource> Button<I, T> {
    /// Waits for any edge on the pin, then samples it like [`Button::update`]
    pub async fn wait_for_change(&mut self) -> Result<(), Error> {
        self.pin.wait_for_any_edge().await.map_err(pin_error)?;
        self.update()
    }
}

fn pin_error<E: embedded_hal::digital::Error>(e: E) -> Error {
    let kind = e.kind();
    error!("Button pin error: {:?}", kind);
    Error::Pin(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::mock::MockTime;

    use embedded_hal_mock::eh1::{
        digital::{Edge, Mock, State, Transaction as PinTransaction},
        MockError,
    };

    fn config() -> Config {
        Config::new(Duration::from_millis(10))
    }

    #[test]
    fn test_begin_does_not_report() {
        let time = MockTime::new(0);
        let gpio_expectations = [PinTransaction::get(State::Low)];
        let mut gpio = Mock::new(&gpio_expectations);

        let mut button = Button::new(&mut gpio, ActiveState::ActiveLow, config(), &time);
        assert_eq!(button.begin(), Ok(()));

        assert!(button.is_pressed());
        assert!(!button.was_pressed());
        assert!(!button.was_released());

        button.release().done();
    }

    #[test]
    fn test_active_low_press_release() {
        let time = MockTime::new(0);
        let gpio_expectations = [
            PinTransaction::get(State::High),
            PinTransaction::get(State::Low),
            PinTransaction::get(State::High),
        ];
        let mut gpio = Mock::new(&gpio_expectations);

        let mut button = Button::new(&mut gpio, ActiveState::ActiveLow, config(), &time);
        assert_eq!(button.begin(), Ok(()));
        assert!(!button.is_pressed());

        time.set(5);
        assert_eq!(button.update(), Ok(()));
        assert!(button.is_pressed());
        assert!(button.was_pressed());
        assert!(!button.was_pressed());

        time.set(30);
        assert_eq!(button.update(), Ok(()));
        assert!(!button.is_pressed());
        assert!(button.was_released());

        button.release().done();
    }

    #[test]
    fn test_active_high_press() {
        let time = MockTime::new(0);
        let gpio_expectations = [PinTransaction::get(State::Low), PinTransaction::get(State::High)];
        let mut gpio = Mock::new(&gpio_expectations);

        let mut button = Button::new(&mut gpio, ActiveState::ActiveHigh, config(), &time);
        assert_eq!(button.begin(), Ok(()));
        assert!(!button.is_pressed());

        assert_eq!(button.update(), Ok(()));
        assert!(button.is_pressed());
        assert!(button.was_pressed());

        button.release().done();
    }

    #[test]
    fn test_bounces_suppressed() {
        let time = MockTime::new(100);
        let gpio_expectations = [
            PinTransaction::get(State::High),
            PinTransaction::get(State::Low),
            PinTransaction::get(State::High),
            PinTransaction::get(State::Low),
            PinTransaction::get(State::High),
            PinTransaction::get(State::Low),
        ];
        let mut gpio = Mock::new(&gpio_expectations);

        let mut button = Button::new(&mut gpio, ActiveState::ActiveLow, config(), &time);
        assert_eq!(button.begin(), Ok(()));

        for _ in 0..5 {
            time.advance(1);
            assert_eq!(button.update(), Ok(()));
        }

        assert!(button.is_pressed());
        assert!(button.was_pressed());
        assert!(!button.was_released());
        assert!(!button.was_pressed());

        button.release().done();
    }

    #[test]
    fn test_click_rearms_current_state() {
        let time = MockTime::new(0);
        let gpio_expectations = [
            PinTransaction::get(State::High),
            PinTransaction::get(State::Low),
            PinTransaction::get(State::Low),
        ];
        let mut gpio = Mock::new(&gpio_expectations);

        let mut button = Button::new(&mut gpio, ActiveState::ActiveLow, config(), &time);
        assert_eq!(button.begin(), Ok(()));
        assert_eq!(button.update(), Ok(()));
        assert!(button.was_pressed());

        // Same instant, still reported
        assert_eq!(button.click(), Ok(()));
        assert!(button.was_pressed());
        assert!(!button.was_pressed());

        button.release().done();
    }

    #[test]
    fn test_set_debounce_timeout() {
        let time = MockTime::new(0);
        let gpio_expectations = [
            PinTransaction::get(State::High),
            PinTransaction::get(State::Low),
            PinTransaction::get(State::High),
        ];
        let mut gpio = Mock::new(&gpio_expectations);

        let mut button = Button::new(&mut gpio, ActiveState::ActiveLow, config(), &time);
        button.set_debounce_timeout(Duration::from_millis(50));
        assert_eq!(button.begin(), Ok(()));
        assert_eq!(button.update(), Ok(()));
        assert!(button.was_pressed());

        time.set(30);
        assert_eq!(button.update(), Ok(()));
        assert!(!button.is_pressed());
        assert!(!button.was_released());

        button.release().done();
    }

    #[test]
    fn test_pin_error() {
        let time = MockTime::new(0);
        let gpio_expectations =
            [PinTransaction::get(State::High).with_error(MockError::Io(std::io::ErrorKind::NotConnected))];
        let mut gpio = Mock::new(&gpio_expectations);

        let mut button = Button::new(&mut gpio, ActiveState::ActiveLow, config(), &time);
        assert_eq!(button.update(), Err(Error::Pin(ErrorKind::Other)));
        assert!(!button.is_pressed());

        button.release().done();
    }

    #[test]
    fn test_release_returns_pin() {
        let time = MockTime::new(0);
        let gpio_expectations: [PinTransaction; 0] = [];
        let gpio = Mock::new(&gpio_expectations);

        let button = Button::new(gpio, ActiveState::default(), Config::default(), &time);
        let mut gpio = button.release();
        gpio.done();
    }

    #[tokio::test]
    async fn test_wait_for_change() {
        let time = MockTime::new(0);
        let gpio_expectations = [
            PinTransaction::get(State::High),
            PinTransaction::wait_for_edge(Edge::Any),
            PinTransaction::get(State::Low),
        ];
        let mut gpio = Mock::new(&gpio_expectations);

        let mut button = Button::new(&mut gpio, ActiveState::ActiveLow, config(), &time);
        assert_eq!(button.begin(), Ok(()));

        assert_eq!(button.wait_for_change().await, Ok(()));
        assert!(button.is_pressed());
        assert!(button.was_pressed());

        button.release().done();
    }
}
