//! Hardware abstraction traits
//!
//! These traits define the interface between the chain controller and the
//! board-specific link and font implementations.

pub mod glyph;
pub mod transport;

pub use glyph::{Glyph, GlyphSource, GLYPH_SIZE};
pub use transport::{ProbeError, Transport};
