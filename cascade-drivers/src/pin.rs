//! embedded-hal 1.0 adapters
//!
//! Wrap HAL pins and delays from any board crate so they can drive the
//! chain link. Only infallible pins are accepted, which covers on-chip GPIO
//! on every common HAL.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs as EhDelayNs;
use embedded_hal::digital::{InputPin as EhInputPin, OutputPin as EhOutputPin, StatefulOutputPin};

/// Output pin adapter
///
/// Remembers the last level it drove, so the wrapped pin only needs
/// [`embedded_hal::digital::OutputPin`].
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin<Error = Infallible>> EhOutput<P> {
    /// Wrap a pin and drive it low
    pub fn new(mut pin: P) -> Self {
        pin.set_low().unwrap_or_else(|never| match never {});
        Self { pin, high: false }
    }

    /// Unwrap the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin<Error = Infallible>> cascade_hal::OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        self.pin.set_high().unwrap_or_else(|never| match never {});
        self.high = true;
    }

    fn set_low(&mut self) {
        self.pin.set_low().unwrap_or_else(|never| match never {});
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

impl<P: StatefulOutputPin<Error = Infallible>> EhOutput<P> {
    /// Read back the level the pin reports, bypassing the cached state
    pub fn pin_is_set_high(&mut self) -> bool {
        self.pin.is_set_high().unwrap_or_else(|never| match never {})
    }
}

/// Input pin adapter
pub struct EhInput<P>(pub P);

impl<P: EhInputPin<Error = Infallible>> cascade_hal::InputPin for EhInput<P> {
    fn is_high(&mut self) -> bool {
        self.0.is_high().unwrap_or_else(|never| match never {})
    }
}

/// Delay adapter
pub struct EhDelay<D>(pub D);

impl<D: EhDelayNs> cascade_hal::DelayNs for EhDelay<D> {
    fn delay_ns(&mut self, ns: u32) {
        self.0.delay_ns(ns);
    }
}
