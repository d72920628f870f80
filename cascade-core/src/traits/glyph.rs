//! Monochrome 8×8 glyphs and the trait for fonts that produce them

/// Width and height of a glyph in pixels
pub const GLYPH_SIZE: usize = 8;

/// An 8×8 monochrome bitmap, row-major
///
/// `true` marks a foreground (lit) pixel. Column 0 is the leftmost pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    pixels: [[bool; GLYPH_SIZE]; GLYPH_SIZE],
}

impl Glyph {
    /// Glyph with no pixel set
    pub const BLANK: Glyph = Glyph {
        pixels: [[false; GLYPH_SIZE]; GLYPH_SIZE],
    };

    /// Create a glyph from a row-major pixel grid
    pub const fn new(pixels: [[bool; GLYPH_SIZE]; GLYPH_SIZE]) -> Self {
        Self { pixels }
    }

    /// Create a glyph from one byte per row, most significant bit leftmost
    pub fn from_rows(rows: [u8; GLYPH_SIZE]) -> Self {
        let mut glyph = Self::BLANK;
        for (y, row) in rows.iter().enumerate() {
            for x in 0..GLYPH_SIZE {
                glyph.pixels[y][x] = row & (0x80 >> x) != 0;
            }
        }
        glyph
    }

    /// Check whether the pixel at (`x`, `y`) is lit
    ///
    /// Pixels outside the grid are never lit.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// Light or clear the pixel at (`x`, `y`); ignored outside the grid
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if let Some(pixel) = self.pixels.get_mut(y).and_then(|row| row.get_mut(x)) {
            *pixel = on;
        }
    }

    /// Row `y` packed into a byte, leftmost pixel in the most significant bit
    pub fn row_bits(&self, y: usize) -> u8 {
        (0..GLYPH_SIZE).fold(0u8, |bits, x| (bits << 1) | u8::from(self.pixel(x, y)))
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().flatten().filter(|&&on| on).count()
    }
}

/// Source of glyphs for text rendering
pub trait GlyphSource {
    /// Glyph for `ch`
    ///
    /// Characters the font cannot draw should map to a blank or placeholder
    /// glyph rather than fail.
    fn glyph(&self, ch: char) -> Glyph;
}

impl<G: GlyphSource + ?Sized> GlyphSource for &G {
    fn glyph(&self, ch: char) -> Glyph {
        (**self).glyph(ch)
    }
}
