//! Bit-banged serial link
//!
//! Drives the chain over four GPIO lines. Frames go out MSB first: data is
//! set up, the clock rises half a period later, and the bit coming back from
//! the last device is sampled while the clock is high.
//!
//! The enable (LOAD/CS) line is driven in logical terms, active = high. Most
//! boards wire it active-low; wrap the pin in [`cascade_hal::InvertedPin`]
//! for those.

use cascade_core::config::{ConfigError, TimingConfig};
use cascade_core::Transport;
use cascade_hal::{DelayNs, InputPin, OutputPin};
use cascade_protocol::{Frame, FRAME_BITS};

/// Top bit of a frame, sent first
const MSB: u16 = 1 << (FRAME_BITS - 1);

/// Serial link over clock, data-out, enable and data-in lines
pub struct BitBangTransport<CLK, DIN, LOAD, DOUT, D> {
    /// Clock line
    clk: CLK,
    /// Data line into the first device
    din: DIN,
    /// Enable line, logical active = high
    load: LOAD,
    /// Data line back from the last device
    dout: DOUT,
    delay: D,
    half_period_ns: u32,
}

impl<CLK, DIN, LOAD, DOUT, D> BitBangTransport<CLK, DIN, LOAD, DOUT, D>
where
    CLK: OutputPin,
    DIN: OutputPin,
    LOAD: OutputPin,
    DOUT: InputPin,
    D: DelayNs,
{
    /// Create a link and park the clock and enable lines inactive
    pub fn new(
        clk: CLK,
        din: DIN,
        load: LOAD,
        dout: DOUT,
        delay: D,
        timing: TimingConfig,
    ) -> Result<Self, ConfigError> {
        timing.validate()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Bit-bang link: half period {} ns", timing.half_period_ns);

        let mut link = Self {
            clk,
            din,
            load,
            dout,
            delay,
            half_period_ns: timing.half_period_ns,
        };
        link.clk.set_low();
        link.load.set_low();
        Ok(link)
    }

    /// Half clock period in nanoseconds
    pub fn half_period_ns(&self) -> u32 {
        self.half_period_ns
    }

    /// Give the lines and delay back
    pub fn release(self) -> (CLK, DIN, LOAD, DOUT, D) {
        (self.clk, self.din, self.load, self.dout, self.delay)
    }

    fn half_period(&mut self) {
        self.delay.delay_ns(self.half_period_ns);
    }
}

impl<CLK, DIN, LOAD, DOUT, D> Transport for BitBangTransport<CLK, DIN, LOAD, DOUT, D>
where
    CLK: OutputPin,
    DIN: OutputPin,
    LOAD: OutputPin,
    DOUT: InputPin,
    D: DelayNs,
{
    fn open(&mut self) {
        self.load.set_high();
    }

    fn close(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("Latching chain");

        self.half_period();
        self.load.set_low();
        self.half_period();
    }

    fn exchange(&mut self, frame: Frame) -> Frame {
        let mut outgoing = frame.bits();
        let mut incoming: u16 = 0;

        for _ in 0..FRAME_BITS {
            self.din.set_state(outgoing & MSB != 0);
            self.half_period();
            self.clk.set_high();
            self.half_period();
            incoming = (incoming << 1) | u16::from(self.dout.is_high());
            self.clk.set_low();
            outgoing <<= 1;
        }

        Frame::from_bits(incoming)
    }

    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_ns(ns);
    }
}
