//! Glyph source implementations

pub mod mono;

pub use mono::{GlyphCanvas, MonoFontGlyphs};
