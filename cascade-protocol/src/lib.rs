//! Serial frame protocol of daisy-chained LED-matrix driver chips
//!
//! Every command on the link is a single 16-bit frame, shifted out
//! most-significant bit first:
//! ```text
//! ┌───────────────┬───────────────┐
//! │ ADDRESS       │ DATA          │
//! │ bits 15..8    │ bits 7..0     │
//! └───────────────┴───────────────┘
//! ```
//!
//! Chips are chained data-out to data-in, so each chip forwards the frame it
//! held before once a new one is clocked in. A frame addressed to the no-op
//! register ([`registers::reg::NO_OP`]) is a filler that every chip ignores.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod registers;

pub use frame::{Frame, FRAME_BITS};
pub use registers::{reg, reset_value, REGISTER_COUNT};
