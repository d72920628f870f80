//! Glyphs rasterized from embedded-graphics mono fonts
//!
//! Any `MonoFont` up to 8×8 pixels works. Smaller fonts are centered in the
//! cell; larger ones are clipped.

use core::convert::Infallible;

use cascade_core::traits::GLYPH_SIZE;
use cascade_core::{Glyph, GlyphSource};
use embedded_graphics::{
    mono_font::{ascii::FONT_5X8, MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

/// 8×8 draw target that renders into a [`Glyph`]
///
/// `BinaryColor::On` lights a pixel, `BinaryColor::Off` clears it. Pixels
/// outside the cell are dropped.
#[derive(Debug, Clone, Default)]
pub struct GlyphCanvas {
    glyph: Glyph,
}

impl GlyphCanvas {
    /// Empty canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// The glyph drawn so far
    pub fn into_glyph(self) -> Glyph {
        self.glyph
    }
}

impl OriginDimensions for GlyphCanvas {
    fn size(&self) -> Size {
        Size::new(GLYPH_SIZE as u32, GLYPH_SIZE as u32)
    }
}

impl DrawTarget for GlyphCanvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(coord.x), usize::try_from(coord.y)) {
                self.glyph.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}

/// Glyph source backed by an embedded-graphics mono font
#[derive(Clone, Copy)]
pub struct MonoFontGlyphs {
    font: &'static MonoFont<'static>,
    origin: Point,
}

impl MonoFontGlyphs {
    /// Use `font`, centered in the 8×8 cell
    pub fn new(font: &'static MonoFont<'static>) -> Self {
        let cell = GLYPH_SIZE as u32;
        let size = font.character_size;
        let origin = Point::new(
            (cell.saturating_sub(size.width) / 2) as i32,
            (cell.saturating_sub(size.height) / 2) as i32,
        );
        Self { font, origin }
    }

    /// Top-left corner of every character within the cell
    pub fn origin(&self) -> Point {
        self.origin
    }
}

impl Default for MonoFontGlyphs {
    fn default() -> Self {
        Self::new(&FONT_5X8)
    }
}

impl GlyphSource for MonoFontGlyphs {
    fn glyph(&self, ch: char) -> Glyph {
        let mut canvas = GlyphCanvas::new();
        let mut buf = [0u8; 4];
        let text = ch.encode_utf8(&mut buf);
        let style = MonoTextStyle::new(self.font, BinaryColor::On);

        Text::with_baseline(text, self.origin, style, Baseline::Top)
            .draw(&mut canvas)
            .unwrap_or_else(|never| match never {});

        canvas.into_glyph()
    }
}
