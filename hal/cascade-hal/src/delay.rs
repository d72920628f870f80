//! Blocking delay abstraction
//!
//! The bit-banged link times its clock edges with busy waits. The waits are
//! hard real-time requirements of the driver chips and are never cancelled.

/// Blocking delay with nanosecond granularity
///
/// Implementations may round up to the resolution of the underlying timer,
/// but must never wait less than requested.
pub trait DelayNs {
    /// Block for at least `ns` nanoseconds
    fn delay_ns(&mut self, ns: u32);

    /// Block for at least `us` microseconds
    fn delay_us(&mut self, mut us: u32) {
        const MAX_US: u32 = u32::MAX / 1_000;
        while us > MAX_US {
            self.delay_ns(MAX_US * 1_000);
            us -= MAX_US;
        }
        self.delay_ns(us * 1_000);
    }

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

impl<D: DelayNs + ?Sized> DelayNs for &mut D {
    fn delay_ns(&mut self, ns: u32) {
        (**self).delay_ns(ns);
    }
}
