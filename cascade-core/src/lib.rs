//! Board-agnostic core logic for daisy-chained LED-matrix drivers
//!
//! This crate contains everything that does not depend on a specific board:
//!
//! - Chip register model (latched registers plus the pending shift register)
//! - Chain controller (frame addressing, pixels, glyphs, scrolling)
//! - Transport and glyph source traits
//! - Configuration type definitions
//!
//! The chain keeps a software mirror of the hardware shift path, so the
//! latched state of every device is known without reading it back.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod chain;
pub mod chip;
pub mod config;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use chain::Chain;
pub use chip::ChipRegisters;
pub use traits::{Glyph, GlyphSource, ProbeError, Transport};
