//! Cascade Hardware Abstraction Layer
//!
//! This crate defines the narrow platform capabilities the LED-matrix chain
//! driver consumes: digital output lines, digital input lines and a blocking
//! delay. Chip-specific HALs (or the `embedded-hal` adapters in
//! `cascade-drivers`) implement these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  cascade-core (chain register model)    │
//! └─────────────────────────────────────────┘
//!                     │  Transport
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cascade-drivers (bit-banged transport) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cascade-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::InvertedPin`] - Active-low adapter for any output line
//! - [`delay::DelayNs`] - Blocking nanosecond delay

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use delay::DelayNs;
pub use gpio::{InputPin, InvertedPin, OutputPin, UnconnectedInput};
