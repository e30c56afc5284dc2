use embedded_hal::digital::v2::OutputPin;
use pomodoro_fsm::StatusLeds;

/// Red/green LED pair on two push-pull GPIO pins
///
/// This wrapper implements the StatusLeds trait required by the indicator
/// driver, handling active-low wiring when needed.
pub struct GpioStatusLeds<R, G>
where
    R: OutputPin,
    G: OutputPin,
{
    red: R,
    green: G,
    active_low: bool,
}

impl<R, G> GpioStatusLeds<R, G>
where
    R: OutputPin,
    G: OutputPin,
{
    /// Create a new LED pair
    ///
    /// # Arguments
    /// * `red` - GPIO pin driving the red LED
    /// * `green` - GPIO pin driving the green LED
    /// * `active_low` - true if an LED lights when its pin is driven low
    pub fn new(red: R, green: G, active_low: bool) -> Self {
        Self {
            red,
            green,
            active_low,
        }
    }

    fn drive<P: OutputPin>(pin: &mut P, on: bool, active_low: bool) {
        // GPIO writes on this HAL are infallible
        let _ = if on != active_low {
            pin.set_high()
        } else {
            pin.set_low()
        };
    }
}

impl<R, G> StatusLeds for GpioStatusLeds<R, G>
where
    R: OutputPin,
    G: OutputPin,
{
    fn set_red(&mut self, on: bool) {
        Self::drive(&mut self.red, on, self.active_low);
    }

    fn set_green(&mut self, on: bool) {
        Self::drive(&mut self.green, on, self.active_low);
    }
}
