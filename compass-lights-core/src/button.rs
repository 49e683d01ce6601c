//! Polled push-button with a blocking debounce.
//!
//! Only presses matter. A rising edge is reported once and then we sit out [`DEBOUNCE_HOLD_MS`] so the contact bounce
//! is never seen. Releases are not debounced at all. A very quick release and re-press during the hold is missed, and
//! that's fine.
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error, InputPin};

use crate::logging::{debug, warn};

/// How long to ignore the button after a press
pub const DEBOUNCE_HOLD_MS: u32 = 50;

/// Which level means "pressed"
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonPolarity {
    /// The Discovery board's user button. It has an external pull-down.
    #[default]
    ActiveHigh,
    /// Button to ground with a pull-up
    ActiveLow,
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DebounceState {
    #[default]
    Idle,
    DebounceHold,
}

/// The button went down
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PressEvent;

pub struct InputDebouncer<I> {
    pin: I,
    polarity: ButtonPolarity,
    /// pressed or not, as of the last sample
    previous: bool,
    state: DebounceState,
}

impl<I: InputPin> InputDebouncer<I> {
    /// The button is assumed to be up at boot. If it is held down, the first sample is a press.
    pub fn new(pin: I, polarity: ButtonPolarity) -> Self {
        Self {
            pin,
            polarity,
            previous: false,
            state: DebounceState::Idle,
        }
    }

    /// Read the pin once. Returns a press on a rising edge, after the debounce hold is over.
    pub fn sample<D: DelayNs>(&mut self, delay: &mut D) -> Option<PressEvent> {
        let current = self.is_pressed_now();

        let rising = current && !self.previous;

        self.previous = current;

        if !rising {
            return None;
        }

        self.state = DebounceState::DebounceHold;

        debug!("button pressed. holding for {}ms", DEBOUNCE_HOLD_MS);

        // nothing is sampled while we wait, so any bounce in here is never seen
        delay.delay_ms(DEBOUNCE_HOLD_MS);

        self.state = DebounceState::Idle;

        Some(PressEvent)
    }

    /// Whether the last sample saw the button down
    pub fn is_pressed(&self) -> bool {
        self.previous
    }

    /// Always `Idle` between calls to `sample`. The hold happens inside it.
    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn into_pin(self) -> I {
        self.pin
    }

    fn is_pressed_now(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => match self.polarity {
                ButtonPolarity::ActiveHigh => high,
                ButtonPolarity::ActiveLow => !high,
            },
            Err(err) => {
                // treat it as released. a stuck error can't cause endless presses this way
                warn!("failed reading the button: {:?}", err.kind());
                false
            }
        }
    }
}
