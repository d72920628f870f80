//! Configuration types
//!
//! Board-agnostic settings for the chain controller, the bit-banged link and
//! the bring-up probe.

pub mod types;

pub use types::*;
