//! Frame packing for the 16-bit chain protocol.
//!
//! Frame format:
//! - ADDRESS (high byte): register address (0x00-0x0F are defined)
//! - DATA (low byte): register contents

/// Number of clock periods per frame
pub const FRAME_BITS: u32 = 16;

/// One 16-bit (address, data) unit exchanged per clock burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame(u16);

impl Frame {
    /// Filler frame addressed to the no-op register
    pub const NO_OP: Frame = Frame::pack(0x00, 0x00);

    /// Pack a register address and data byte into a frame
    pub const fn pack(address: u8, data: u8) -> Self {
        Self(((address as u16) << 8) | data as u16)
    }

    /// Reinterpret raw bits sampled off the wire as a frame
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw 16-bit value as it is shifted onto the wire
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Register address (high byte)
    pub const fn address(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Data byte (low byte)
    pub const fn data(self) -> u8 {
        self.0 as u8
    }

    /// Check if this frame targets the no-op register
    pub const fn is_no_op(self) -> bool {
        self.address() == 0x00
    }
}

impl From<Frame> for u16 {
    fn from(frame: Frame) -> Self {
        frame.bits()
    }
}
