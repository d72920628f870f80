//! Scrolling across the whole chain
//!
//! One step moves every column byte one bit toward the far end of the chain.
//! The top bit of each device's column carries into the bottom bit of the
//! same column on the next device. The bit leaving the farthest device is
//! either fed back into the nearest device (wrap) or dropped.

use cascade_protocol::{reg, Frame};

use super::Chain;
use crate::traits::Transport;

impl<T: Transport, const N: usize> Chain<T, N> {
    /// Scroll `steps` times, pausing the cycle delay after each step
    pub fn cycle_steps(&mut self, steps: u32) {
        #[cfg(feature = "defmt")]
        defmt::trace!("Scrolling {} steps (wrap={})", steps, self.wrap);

        for _ in 0..steps {
            self.scroll_step();
            self.transport.delay_ns(self.cycle_delay_ns);
        }
    }

    /// Scroll once across every column of every device
    ///
    /// With wrap enabled the display returns to where it started.
    pub fn cycle_set(&mut self) {
        let steps = u32::try_from(N.saturating_mul(8)).unwrap_or(u32::MAX);
        self.cycle_steps(steps);
    }

    /// Move every lit LED one column toward the far end
    fn scroll_step(&mut self) {
        for address in reg::DIGIT_0..=reg::DIGIT_7 {
            let column: [u8; N] = core::array::from_fn(|index| self.column_data(index, address));

            self.open_session();
            for index in (1..N).rev() {
                let data = (column[index] << 1) | (column[index - 1] >> 7);
                self.send(Frame::pack(address, data));
            }
            let carry = if self.wrap { column[N - 1] >> 7 } else { 0 };
            self.send(Frame::pack(address, (column[0] << 1) | carry));
            self.close_session();
        }
        self.latch();
    }
}
