//! Test doubles for the chain link

use cascade_protocol::{Frame, REGISTER_COUNT};

use crate::chain::Chain;
use crate::traits::{Glyph, GlyphSource, Transport};

/// One observable action on the link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Open,
    Close,
    Exchange(Frame),
    Delay(u32),
}

/// Behavioral model of N physical chips wired in a daisy chain
///
/// Each exchange clocks a frame into device 0 and moves every held frame one
/// device further; the frame leaving the last device is returned, as if its
/// data-out were wired back to the controller. Closing a session latches
/// each device's shift register into its register file.
pub(crate) struct SimulatedChain<const N: usize> {
    shift: [Frame; N],
    registers: [[Frame; REGISTER_COUNT]; N],
    events: Vec<Event>,
    sessions: usize,
}

impl<const N: usize> SimulatedChain<N> {
    pub(crate) fn new() -> Self {
        Self {
            shift: [Frame::NO_OP; N],
            registers: [[Frame::NO_OP; REGISTER_COUNT]; N],
            events: Vec::new(),
            sessions: 0,
        }
    }

    /// Register contents of 0-based `device` as the hardware holds them
    pub(crate) fn latched(&self, device: usize, address: u8) -> Frame {
        self.registers[device][usize::from(address)]
    }

    pub(crate) fn sessions(&self) -> usize {
        self.sessions
    }

    pub(crate) fn events(&self) -> &[Event] {
        &self.events
    }

    /// Frames exchanged so far, in wire order
    pub(crate) fn frames(&self) -> Vec<Frame> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Exchange(frame) => Some(*frame),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl<const N: usize> Transport for SimulatedChain<N> {
    fn open(&mut self) {
        self.events.push(Event::Open);
    }

    fn close(&mut self) {
        self.events.push(Event::Close);
        self.sessions += 1;
        for (held, registers) in self.shift.iter().zip(self.registers.iter_mut()) {
            if let Some(slot) = registers.get_mut(usize::from(held.address())) {
                *slot = *held;
            }
        }
    }

    fn exchange(&mut self, frame: Frame) -> Frame {
        self.events.push(Event::Exchange(frame));
        let Some(&out) = self.shift.last() else {
            return frame;
        };
        self.shift.rotate_right(1);
        if let Some(first) = self.shift.first_mut() {
            *first = frame;
        }
        out
    }

    fn delay_ns(&mut self, ns: u32) {
        self.events.push(Event::Delay(ns));
    }
}

/// Check that the chain's register mirror matches the simulated hardware
pub(crate) fn assert_mirrors_hardware<const N: usize>(chain: &Chain<SimulatedChain<N>, N>) {
    for device in 0..N {
        for address in 0..REGISTER_COUNT as u8 {
            assert_eq!(
                chain.led_matrix(device + 1).latched(address),
                chain.transport().latched(device, address),
                "device {} register {} diverged",
                device + 1,
                address
            );
        }
    }
}

/// Total lit LEDs across every column register of the chain
pub(crate) fn lit_count<T: Transport, const N: usize>(chain: &Chain<T, N>) -> u32 {
    (1..=N)
        .map(|screen| {
            (1..=8u8)
                .map(|column| chain.led_matrix(screen).latched_data(column).count_ones())
                .sum::<u32>()
        })
        .sum()
}

/// Font that draws every character as its code point in the first row
pub(crate) struct CodeFont;

impl GlyphSource for CodeFont {
    fn glyph(&self, ch: char) -> Glyph {
        let mut rows = [0u8; 8];
        rows[0] = ch as u8;
        Glyph::from_rows(rows)
    }
}
