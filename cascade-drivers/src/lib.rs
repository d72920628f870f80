//! Driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in cascade-core:
//!
//! - Bit-banged serial link over three outputs and one input
//! - Glyph source backed by an embedded-graphics mono font
//! - Adapters from embedded-hal 1.0 pins and delays to the cascade HAL

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod glyph;
pub mod pin;
pub mod transport;

pub use glyph::MonoFontGlyphs;
pub use pin::{EhDelay, EhInput, EhOutput};
pub use transport::BitBangTransport;
