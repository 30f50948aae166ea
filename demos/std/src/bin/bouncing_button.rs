/// This example polls a simulated push button whose contacts chatter after every press and release,
/// and prints the debounced events
use button_service::{ActiveState, Button, Config, EmbassyTimeSource};
use embassy_executor::Executor;
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::{ErrorType, InputPin};
use log::{error, info};
use static_cell::StaticCell;

/// Active-low push button: pressed at 100ms, released at 400ms, bouncing for 4ms each time
struct SimulatedPin {
    start: Instant,
}

impl SimulatedPin {
    fn pressed_at(ms: u64) -> bool {
        match ms {
            100..=103 | 400..=403 => ms % 2 == 0,
            104..=399 => true,
            _ => false,
        }
    }
}

impl ErrorType for SimulatedPin {
    type Error = core::convert::Infallible;
}

impl InputPin for SimulatedPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!Self::pressed_at(self.start.elapsed().as_millis()))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(Self::pressed_at(self.start.elapsed().as_millis()))
    }
}

#[embassy_executor::task]
async fn button_task() {
    let pin = SimulatedPin { start: Instant::now() };
    let mut button = Button::new(pin, ActiveState::ActiveLow, Config::default(), EmbassyTimeSource);

    if let Err(e) = button.begin() {
        error!("Failed to sample button: {e:?}");
        return;
    }

    let start = Instant::now();
    let mut samples = 0u32;
    while start.elapsed() < Duration::from_millis(600) {
        if let Err(e) = button.update() {
            error!("Failed to sample button: {e:?}");
        }
        samples += 1;

        if button.was_pressed() {
            info!("Pressed at {}ms", start.elapsed().as_millis());
        }
        if button.was_released() {
            info!("Released at {}ms", start.elapsed().as_millis());
        }

        Timer::after(Duration::from_millis(1)).await;
    }

    info!("Done after {samples} samples");
    std::process::exit(0);
}

fn main() {
    env_logger::builder().filter_level(log::LevelFilter::Trace).init();

    static EXECUTOR: StaticCell<Executor> = StaticCell::new();
    let executor = EXECUTOR.init(Executor::new());

    executor.run(|spawner| {
        spawner.must_spawn(button_task());
    });
}
