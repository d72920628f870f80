//! Serial link trait for the daisy chain

use cascade_protocol::{reg, Frame};

use crate::config::ProbeConfig;

/// Sentinel pushed through the chain by the device-count probe
const PROBE_SENTINEL: Frame = Frame::pack(reg::NO_OP, 0xFF);

/// Errors from the device-count probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProbeError {
    /// The sentinel never came back within the exchange budget
    NoEcho {
        /// Filler frames pushed before giving up
        exchanges: u16,
    },
}

/// Full-duplex link to the first device of the chain
///
/// A session is `open()`, one or more `exchange()` calls, then `close()`.
/// Devices shift on every exchange and latch when the session closes.
pub trait Transport {
    /// Pull the enable line active, starting a session
    fn open(&mut self);

    /// Release the enable line, latching every device
    ///
    /// The release is bracketed by half-period waits so the latch edge is
    /// unambiguous.
    fn close(&mut self);

    /// Shift one frame out while shifting the last device's frame in
    fn exchange(&mut self, frame: Frame) -> Frame;

    /// Block for at least `ns` nanoseconds
    fn delay_ns(&mut self, ns: u32);

    /// Count the devices on the chain
    ///
    /// Pushes a sentinel frame through the no-op register and counts filler
    /// exchanges until it is echoed back on the data-in line. The enable line
    /// is not touched, so no device latches anything. Bring-up diagnostic
    /// only; requires the last device's data-out to be wired back.
    fn count_devices(&mut self, config: &ProbeConfig) -> Result<usize, ProbeError> {
        let mut echoed = self.exchange(PROBE_SENTINEL);
        let mut count: u16 = 0;

        while echoed != PROBE_SENTINEL {
            if count >= config.max_devices {
                #[cfg(feature = "defmt")]
                defmt::warn!("No probe echo after {} exchanges", count);
                return Err(ProbeError::NoEcho { exchanges: count });
            }
            echoed = self.exchange(Frame::NO_OP);
            count += 1;
            self.delay_ns(config.settle_ns);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Probe found {} chained devices", count);
        Ok(usize::from(count))
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn open(&mut self) {
        (**self).open();
    }

    fn close(&mut self) {
        (**self).close();
    }

    fn exchange(&mut self, frame: Frame) -> Frame {
        (**self).exchange(frame)
    }

    fn delay_ns(&mut self, ns: u32) {
        (**self).delay_ns(ns);
    }
}
