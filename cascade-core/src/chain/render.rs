//! Pixel, row and glyph rendering
//!
//! Column registers hold one byte per matrix column. Bit 0 is row 1, bit 7
//! is row 8; coordinates are 1-based with (1, 1) in the corner.

use cascade_protocol::reg;
use cascade_protocol::registers::{column_address, COLUMNS};
use heapless::Vec;

use super::Chain;
use crate::traits::{Glyph, GlyphSource, Transport};

/// Bit for a 1-based row, or 0 when the row is off the matrix
fn row_mask(row: u8) -> u8 {
    if (1..=COLUMNS).contains(&row) {
        1 << (row - 1)
    } else {
        0
    }
}

impl<T: Transport, const N: usize> Chain<T, N> {
    /// Light LEDs in one column of `screen`
    ///
    /// With `coordinates` set, `value` is a row number (1-8) and that single
    /// LED is added to what the column already shows; a row off the matrix
    /// adds nothing. Otherwise `value` is the raw bit pattern and replaces the
    /// column. Columns outside 1-8 and unknown screens are ignored.
    pub fn set_led(&mut self, screen: usize, column: u8, value: u8, coordinates: bool) {
        let (Some(index), Some(address)) = (Self::index(screen), column_address(column)) else {
            return;
        };

        let data = if coordinates {
            row_mask(value) | self.column_data(index, address)
        } else {
            value
        };

        self.write_register(index, address, data);
        self.latch();
    }

    /// Turn off the LED at (`column`, `row`) of `screen`
    ///
    /// The rest of the column is left as it is. A row off the matrix clears
    /// the whole column. Columns outside 1-8 and unknown screens are ignored.
    pub fn reset_led_at(&mut self, screen: usize, column: u8, row: u8) {
        let (Some(index), Some(address)) = (Self::index(screen), column_address(column)) else {
            return;
        };

        let keep = match row_mask(row) {
            0 => 0x00,
            mask => !mask,
        };
        let data = keep & self.column_data(index, address);

        self.write_register(index, address, data);
        self.latch();
    }

    /// Add one LED row to `screen`
    ///
    /// Bit `i` of `row_bits` is OR'ed into column `i + 1`, so the least
    /// significant bit lands in column 1 and the most significant in
    /// column 8.
    pub fn set_row(&mut self, screen: usize, row_bits: u8) {
        let Some(index) = Self::index(screen) else {
            return;
        };

        for (bit, address) in (reg::DIGIT_0..=reg::DIGIT_7).enumerate() {
            let data = self.column_data(index, address) | ((row_bits >> bit) & 1);
            self.write_register(index, address, data);
        }
        self.latch();
    }

    /// Show `glyph` on `screen`
    ///
    /// Glyph row `i` goes to column register `i + 1` with its leftmost pixel
    /// in the most significant bit.
    pub fn set_letter(&mut self, screen: usize, glyph: &Glyph) {
        let Some(index) = Self::index(screen) else {
            return;
        };

        for (y, address) in (reg::DIGIT_0..=reg::DIGIT_7).enumerate() {
            self.write_register(index, address, glyph.row_bits(y));
        }
    }

    /// Show character `ch` from `font` on `screen`
    pub fn set_char<F: GlyphSource + ?Sized>(&mut self, screen: usize, font: &F, ch: char) {
        let glyph = font.glyph(ch);
        self.set_letter(screen, &glyph);
    }

    /// Spread a word over the chain, one character per device
    ///
    /// At most `length` characters are used, trimmed to the chain length.
    /// Characters are written back to front, so the first character lands on
    /// the farthest used screen and the word reads left to right.
    pub fn set_word<F: GlyphSource + ?Sized>(&mut self, font: &F, word: &str, length: usize) {
        let mut chars: Vec<char, N> = Vec::new();
        for ch in word.chars().take(length.min(N)) {
            if chars.push(ch).is_err() {
                break;
            }
        }

        for (screen, &ch) in (1..).zip(chars.iter().rev()) {
            self.set_char(screen, font, ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_mirrors_hardware, lit_count, CodeFont, Event, SimulatedChain};
    use cascade_protocol::Frame;

    fn chain<const N: usize>() -> Chain<SimulatedChain<N>, N> {
        let mut chain = Chain::new(SimulatedChain::new());
        chain.reset_registers();
        chain
    }

    #[test]
    fn test_row_mask() {
        assert_eq!(row_mask(1), 0b0000_0001);
        assert_eq!(row_mask(8), 0b1000_0000);
        assert_eq!(row_mask(0), 0);
        assert_eq!(row_mask(9), 0);
    }

    #[test]
    fn test_set_led_raw_replaces_column() {
        let mut chain = chain::<4>();
        chain.set_led(1, 2, 0b0000_0011, false);
        chain.set_led(1, 2, 0b0000_0100, false);

        assert_eq!(chain.led_matrix(1).latched_data(reg::DIGIT_1), 0b0000_0100);
        assert_mirrors_hardware(&chain);
    }

    #[test]
    fn test_set_led_coordinates_adds_one_led() {
        let mut chain = chain::<4>();
        chain.set_led(2, 3, 0b0000_0001, false);
        chain.set_led(2, 3, 4, true);

        assert_eq!(chain.led_matrix(2).latched_data(reg::DIGIT_2), 0b0000_1001);
        for screen in [1, 3, 4] {
            assert_eq!(chain.led_matrix(screen).latched_data(reg::DIGIT_2), 0);
        }
        assert_mirrors_hardware(&chain);
    }

    #[test]
    fn test_reset_led_at_clears_one_led() {
        let mut chain = chain::<4>();
        chain.set_led(2, 3, 0b0110_1001, false);
        chain.set_led(2, 3, 4, true);
        chain.reset_led_at(2, 3, 4);

        assert_eq!(chain.led_matrix(2).latched_data(reg::DIGIT_2), 0b0110_0001);
        assert_mirrors_hardware(&chain);
    }

    #[test]
    fn test_reset_led_at_bad_row_clears_column() {
        let mut chain = chain::<2>();
        chain.set_led(1, 5, 0xFF, false);
        chain.reset_led_at(1, 5, 9);
        assert_eq!(chain.led_matrix(1).latched_data(reg::DIGIT_4), 0);
    }

    #[test]
    fn test_set_led_coordinates_bad_row_keeps_column() {
        let mut chain = chain::<2>();
        chain.set_led(1, 5, 0x81, false);
        chain.set_led(1, 5, 0, true);
        assert_eq!(chain.led_matrix(1).latched_data(reg::DIGIT_4), 0x81);
    }

    #[test]
    fn test_pixel_ops_ignore_bad_column_and_screen() {
        let mut chain = chain::<2>();
        chain.transport.clear_events();

        chain.set_led(1, 0, 0xFF, false);
        chain.set_led(1, 9, 0xFF, false);
        chain.set_led(3, 1, 0xFF, false);
        chain.reset_led_at(1, 0, 1);
        chain.reset_led_at(0, 1, 1);
        chain.set_row(3, 0xFF);

        assert!(chain.transport().events().is_empty());
    }

    #[test]
    fn test_set_led_ends_with_latch_pulse() {
        let mut chain = chain::<2>();
        chain.transport.clear_events();
        chain.set_led(1, 1, 0x01, false);

        let events = chain.transport().events();
        assert_eq!(&events[events.len() - 2..], &[Event::Open, Event::Close]);
    }

    #[test]
    fn test_set_row() {
        let mut chain = chain::<3>();
        chain.set_led(2, 8, 0b1000_0000, false);
        chain.set_row(2, 0b1000_0101);

        let chip = chain.led_matrix(2);
        assert_eq!(chip.latched_data(reg::DIGIT_0), 0b0000_0001);
        assert_eq!(chip.latched_data(reg::DIGIT_1), 0);
        assert_eq!(chip.latched_data(reg::DIGIT_2), 0b0000_0001);
        assert_eq!(chip.latched_data(reg::DIGIT_7), 0b1000_0001);
        assert_eq!(lit_count(&chain), 4);
        assert_mirrors_hardware(&chain);
    }

    #[test]
    fn test_set_letter() {
        let mut chain = chain::<4>();
        let rows = [0x3C, 0x42, 0x42, 0x3C, 0x42, 0x42, 0x42, 0x3C];
        chain.set_letter(3, &Glyph::from_rows(rows));

        for (i, &row) in rows.iter().enumerate() {
            let address = reg::DIGIT_0 + i as u8;
            assert_eq!(chain.led_matrix(3).latched(address), Frame::pack(address, row));
            assert_eq!(chain.led_matrix(2).latched_data(address), 0);
        }
        assert_mirrors_hardware(&chain);
    }

    #[test]
    fn test_set_word_reads_left_to_right() {
        let mut chain = chain::<4>();
        chain.set_word(&CodeFont, "Goed", 4);

        // Screen 4 is farthest from the controller and shows the first letter
        assert_eq!(chain.led_matrix(4).latched_data(reg::DIGIT_0), b'G');
        assert_eq!(chain.led_matrix(3).latched_data(reg::DIGIT_0), b'o');
        assert_eq!(chain.led_matrix(2).latched_data(reg::DIGIT_0), b'e');
        assert_eq!(chain.led_matrix(1).latched_data(reg::DIGIT_0), b'd');
        assert_mirrors_hardware(&chain);
    }

    #[test]
    fn test_set_word_trims_to_chain() {
        let mut chain = chain::<2>();
        chain.set_word(&CodeFont, "abc", 10);

        assert_eq!(chain.led_matrix(2).latched_data(reg::DIGIT_0), b'a');
        assert_eq!(chain.led_matrix(1).latched_data(reg::DIGIT_0), b'b');
    }

    #[test]
    fn test_set_word_short_length() {
        let mut chain = chain::<4>();
        chain.set_word(&CodeFont, "xyz", 2);

        assert_eq!(chain.led_matrix(2).latched_data(reg::DIGIT_0), b'x');
        assert_eq!(chain.led_matrix(1).latched_data(reg::DIGIT_0), b'y');
        assert_eq!(chain.led_matrix(3).latched_data(reg::DIGIT_0), 0);
        assert_eq!(chain.led_matrix(4).latched_data(reg::DIGIT_0), 0);
    }
}
