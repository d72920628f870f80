//! GPIO pin abstractions
//!
//! Provides traits for digital input and output lines, plus the polarity
//! adapter used for active-low enable lines.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Toggle the pin state
    fn toggle(&mut self) {
        let high = self.is_set_high();
        self.set_state(!high);
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Takes `&mut self` because sampling a line may touch peripheral state.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

impl<P: OutputPin + ?Sized> OutputPin for &mut P {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }

    fn is_set_high(&self) -> bool {
        (**self).is_set_high()
    }
}

impl<P: InputPin + ?Sized> InputPin for &mut P {
    fn is_high(&mut self) -> bool {
        (**self).is_high()
    }
}

/// Output adapter that inverts every logical level
///
/// The enable line of the driver chips is active-low. Wrapping it in an
/// `InvertedPin` lets callers drive it in active-high terms: `set_high()`
/// means "enabled" and pulls the physical line low.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvertedPin<P> {
    pin: P,
}

impl<P: OutputPin> InvertedPin<P> {
    /// Wrap an output line
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Borrow the wrapped physical line
    pub fn inner(&self) -> &P {
        &self.pin
    }

    /// Release the wrapped physical line
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> OutputPin for InvertedPin<P> {
    fn set_high(&mut self) {
        self.pin.set_low();
    }

    fn set_low(&mut self) {
        self.pin.set_high();
    }

    fn is_set_high(&self) -> bool {
        !self.pin.is_set_high()
    }
}

/// Input line for a data-out wire that is not connected
///
/// Always reads low, so every exchange returns an all-zero frame.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnconnectedInput;

impl InputPin for UnconnectedInput {
    fn is_high(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
        writes: u8,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                writes: 0,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_inverted_set_state() {
        let mut pin = InvertedPin::new(MockPin::new());

        pin.set_state(true);
        assert!(pin.is_set_high());
        assert!(!pin.inner().is_set_high());

        pin.set_state(false);
        assert!(!pin.is_set_high());
        assert!(pin.inner().is_set_high());
    }

    #[test]
    fn test_inverted_forwards_every_write() {
        let mut pin = InvertedPin::new(MockPin::new());
        pin.set_high();
        pin.set_high();
        pin.set_low();

        let inner = pin.into_inner();
        assert_eq!(inner.writes, 3);
        assert!(inner.is_set_high());
    }

    #[test]
    fn test_toggle() {
        let mut pin = MockPin::new();
        pin.toggle();
        assert!(pin.is_set_high());
        pin.toggle();
        assert!(pin.is_set_low());
    }

    #[test]
    fn test_borrowed_pin() {
        let mut physical = MockPin::new();
        {
            let mut enable = InvertedPin::new(&mut physical);
            enable.set_low();
        }
        assert!(physical.is_set_high());
    }

    #[test]
    fn test_unconnected_input_reads_low() {
        let mut input = UnconnectedInput;
        assert!(input.is_low());
        assert!(!input.is_high());
    }
}
