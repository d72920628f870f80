//! Register model of a single driver chip
//!
//! A chip exposes 16 latched registers and one pending register. Frames are
//! clocked into the pending register; a rising edge on the enable line copies
//! the pending frame into the register it addresses.

use core::fmt;

use cascade_protocol::{Frame, REGISTER_COUNT};

/// Latched and pending register state of one chip
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipRegisters {
    /// Committed registers, stored as whole frames
    latched: [Frame; REGISTER_COUNT],
    /// Frame currently held in the shift register
    pending: Frame,
}

impl Default for ChipRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl ChipRegisters {
    /// Create a chip with every register cleared
    pub const fn new() -> Self {
        Self {
            latched: [Frame::NO_OP; REGISTER_COUNT],
            pending: Frame::NO_OP,
        }
    }

    /// Latched frame at `address`
    ///
    /// Returns an all-zero frame for addresses past the register file.
    pub fn latched(&self, address: u8) -> Frame {
        self.latched
            .get(usize::from(address))
            .copied()
            .unwrap_or(Frame::NO_OP)
    }

    /// Data byte of the latched register at `address`
    pub fn latched_data(&self, address: u8) -> u8 {
        self.latched(address).data()
    }

    /// Frame waiting in the shift register
    pub fn pending(&self) -> Frame {
        self.pending
    }

    /// Replace the frame in the shift register
    ///
    /// Does not latch the previous pending frame.
    pub fn set_pending(&mut self, frame: Frame) {
        self.pending = frame;
    }

    /// Commit the pending frame into the register it addresses
    ///
    /// Frames addressing a register that does not exist are dropped. The
    /// pending frame is left in place.
    pub fn latch(&mut self) {
        if let Some(slot) = self.latched.get_mut(usize::from(self.pending.address())) {
            *slot = self.pending;
        }
    }
}

impl fmt::Display for ChipRegisters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (address, frame) in self.latched.iter().enumerate() {
            writeln!(f, "register {} : {:016b}", address, frame.bits())?;
        }
        Ok(())
    }
}
