//! Chain controller
//!
//! Owns the register models of N daisy-chained devices and the link that
//! drives them. Screen numbers in the public API are 1-based; screen 1 is the
//! device wired to the controller, screen N the farthest one.
//!
//! # Frame addressing
//!
//! The link is one long shift register: every exchange moves each device's
//! pending frame to the next device. To reach screen `k`, a session sends N
//! frames ordered from screen N down to screen 1, carrying the real frame in
//! position `k` and no-op fillers everywhere else:
//!
//! ```text
//!   open ─ [N] ─ [N-1] ─ ... ─ [k: addr,data] ─ ... ─ [1] ─ close
//! ```
//!
//! When the session closes, every device latches the frame it holds. Only
//! screen `k` holds a real frame; the others latch into the no-op register.

mod render;
mod scroll;

use cascade_protocol::{reset_value, Frame, REGISTER_COUNT};

use crate::chip::ChipRegisters;
use crate::config::{ChainConfig, ProbeConfig};
use crate::traits::{ProbeError, Transport};

/// Daisy chain of N LED-matrix driver chips
pub struct Chain<T, const N: usize> {
    /// Register mirror, index 0 nearest the controller
    chips: [ChipRegisters; N],
    transport: T,
    /// Feed bits scrolled off the far end back in at the near end
    wrap: bool,
    /// Delay after each scroll step (ns)
    cycle_delay_ns: u32,
}

impl<T: Transport, const N: usize> Chain<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "a chain needs at least one device");

    /// Create a chain with default scroll settings
    ///
    /// Every register starts at zero; call [`Chain::reset_registers`] to put
    /// the devices into a displayable state.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ChainConfig::default())
    }

    /// Create a chain with the given scroll settings
    pub fn with_config(transport: T, config: ChainConfig) -> Self {
        let () = Self::NON_EMPTY;

        Self {
            chips: core::array::from_fn(|_| ChipRegisters::new()),
            transport,
            wrap: config.wrap,
            cycle_delay_ns: config.cycle_delay_ns,
        }
    }

    /// Number of devices in the chain
    pub const fn len(&self) -> usize {
        N
    }

    /// A chain always has at least one device
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Borrow the link
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Release the link
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Delay after each scroll step in nanoseconds
    pub fn cycle_delay(&self) -> u32 {
        self.cycle_delay_ns
    }

    /// Set the delay after each scroll step
    ///
    /// Negative values are clamped to zero.
    pub fn set_cycle_delay(&mut self, delay_ns: i32) {
        self.cycle_delay_ns = u32::try_from(delay_ns).unwrap_or(0);
    }

    /// Check whether scrolling wraps around
    pub fn cycle(&self) -> bool {
        self.wrap
    }

    /// Enable or disable wraparound scrolling
    pub fn set_cycle(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Register model of `screen`
    ///
    /// Out-of-range screen numbers fall back to screen 1, which existing
    /// callers rely on. Use [`Chain::try_led_matrix`] for a strict lookup.
    pub fn led_matrix(&self, screen: usize) -> &ChipRegisters {
        self.try_led_matrix(screen).unwrap_or(&self.chips[0])
    }

    /// Register model of `screen`, or `None` when it is not on the chain
    pub fn try_led_matrix(&self, screen: usize) -> Option<&ChipRegisters> {
        Self::index(screen).map(|index| &self.chips[index])
    }

    /// Start a session by pulling the enable line active
    pub fn open_session(&mut self) {
        self.transport.open();
    }

    /// End a session; every device latches its pending frame
    pub fn close_session(&mut self) {
        self.transport.close();
        self.latch_all();
    }

    /// Pulse the enable line so any frames still in flight get latched
    pub fn latch(&mut self) {
        self.open_session();
        self.close_session();
    }

    /// Write `data` to register `address` of `screen`
    ///
    /// Other devices receive no-op fillers. Unknown screens are ignored.
    pub fn set_register(&mut self, screen: usize, address: u8, data: u8) {
        if let Some(index) = Self::index(screen) {
            self.write_register(index, address, data);
        }
    }

    /// Put every register of every device into its power-on display state
    ///
    /// Each register value is sent in its own session and rippled through
    /// the whole chain, then N filler sessions flush the shift path so no
    /// stale frame surfaces later.
    pub fn reset_registers(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Resetting registers on {} devices", N);

        for address in 0..REGISTER_COUNT as u8 {
            self.open_session();
            self.send(Frame::pack(address, reset_value(address)));
            self.close_session();
        }

        for _ in 0..N {
            self.open_session();
            self.send(Frame::NO_OP);
            self.close_session();
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Register reset complete");
    }

    /// Count the devices on the physical link
    ///
    /// Diagnostic only. On success every device holds a filler frame, which
    /// the register mirror is updated to reflect.
    pub fn count_devices(&mut self, config: &ProbeConfig) -> Result<usize, ProbeError> {
        let count = self.transport.count_devices(config)?;
        for chip in self.chips.iter_mut() {
            chip.set_pending(Frame::NO_OP);
        }
        Ok(count)
    }

    /// Write a dump of every device's latched registers
    pub fn write_registers<W: core::fmt::Write>(&self, out: &mut W) -> core::fmt::Result {
        for (index, chip) in self.chips.iter().enumerate() {
            writeln!(out, "Screen {}", index + 1)?;
            write!(out, "{}", chip)?;
            writeln!(out)?;
        }
        Ok(())
    }

    /// Log every device's latched registers
    #[cfg(feature = "defmt")]
    pub fn print_all_registers(&self) {
        for (index, chip) in self.chips.iter().enumerate() {
            defmt::info!("Screen {}", index + 1);
            for address in 0..REGISTER_COUNT as u8 {
                defmt::info!(
                    "register {} : {=u16:b}",
                    address,
                    chip.latched(address).bits()
                );
            }
        }
    }

    /// 0-based index for a 1-based screen number
    fn index(screen: usize) -> Option<usize> {
        (1..=N).contains(&screen).then(|| screen - 1)
    }

    /// Single-device register write in its own session
    fn write_register(&mut self, index: usize, address: u8, data: u8) {
        self.open_session();
        self.send_to_screen(index, Frame::pack(address, data));
        self.close_session();
    }

    /// Send `frame` to device `index` and fillers to every other device
    fn send_to_screen(&mut self, index: usize, frame: Frame) {
        for position in (0..N).rev() {
            if position == index {
                self.send(frame);
            } else {
                self.send(Frame::NO_OP);
            }
        }
    }

    /// Shift `frame` into the mirror and onto the wire
    fn send(&mut self, frame: Frame) -> Frame {
        self.insert_pending(frame);
        self.transport.exchange(frame)
    }

    /// Move every pending frame one device down the chain
    ///
    /// The frame held by the farthest device falls off the end.
    fn insert_pending(&mut self, frame: Frame) {
        for index in (1..N).rev() {
            let previous = self.chips[index - 1].pending();
            self.chips[index].set_pending(previous);
        }
        self.chips[0].set_pending(frame);
    }

    /// Latch every device, farthest first
    fn latch_all(&mut self) {
        for chip in self.chips.iter_mut().rev() {
            chip.latch();
        }
    }

    /// Latched data byte of column register `address` on device `index`
    fn column_data(&self, index: usize, address: u8) -> u8 {
        self.chips[index].latched_data(address)
    }
}

impl<T, const N: usize> core::fmt::Debug for Chain<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Chain")
            .field("chips", &self.chips)
            .field("wrap", &self.wrap)
            .field("cycle_delay_ns", &self.cycle_delay_ns)
            .finish_non_exhaustive()
    }
}
