//! Register map of the LED-matrix driver chip
//!
//! Each chip has 16 addressable registers. Addresses 0x01-0x08 hold the
//! eight column ("digit") bytes shown on the matrix; the rest configure the
//! chip.

/// Number of addressable registers per chip
pub const REGISTER_COUNT: usize = 16;

/// Number of column (digit) registers, and LEDs per column
pub const COLUMNS: u8 = 8;

/// Register addresses
pub mod reg {
    /// No-op, used for filler frames when daisy-chaining
    pub const NO_OP: u8 = 0x00;
    /// First column register
    pub const DIGIT_0: u8 = 0x01;
    pub const DIGIT_1: u8 = 0x02;
    pub const DIGIT_2: u8 = 0x03;
    pub const DIGIT_3: u8 = 0x04;
    pub const DIGIT_4: u8 = 0x05;
    pub const DIGIT_5: u8 = 0x06;
    pub const DIGIT_6: u8 = 0x07;
    /// Last column register
    pub const DIGIT_7: u8 = 0x08;
    /// BCD decode mode (unused for matrices)
    pub const DECODE_MODE: u8 = 0x09;
    /// Display brightness
    pub const INTENSITY: u8 = 0x0A;
    /// Number of scanned digits
    pub const SCAN_LIMIT: u8 = 0x0B;
    /// Shutdown / normal operation
    pub const SHUTDOWN: u8 = 0x0C;
    /// Display test, overrides but does not alter other registers
    pub const DISPLAY_TEST: u8 = 0x0F;
}

pub const INTENSITY_MIN: u8 = 0x00;
pub const INTENSITY_MAX: u8 = 0x0F;
pub const SCAN_LIMIT_ALL: u8 = 0x07;
/// Shutdown mode engaged (display dark)
pub const SHUTDOWN_ON: u8 = 0x00;
/// Normal operation
pub const SHUTDOWN_OFF: u8 = 0x01;
pub const DISPLAY_TEST_ON: u8 = 0x01;
pub const DISPLAY_TEST_OFF: u8 = 0x00;

/// Value a register is set to by a chain reset
///
/// The chip runs at full brightness with every digit scanned and display test
/// off; everything else (columns, decode mode, unused slots) is cleared.
pub const fn reset_value(address: u8) -> u8 {
    match address {
        reg::SHUTDOWN => SHUTDOWN_OFF,
        reg::INTENSITY => INTENSITY_MAX,
        reg::SCAN_LIMIT => SCAN_LIMIT_ALL,
        reg::DISPLAY_TEST => DISPLAY_TEST_OFF,
        _ => 0x00,
    }
}

/// Register address for a 1-based column number
///
/// Returns `None` for columns outside 1-8.
pub const fn column_address(column: u8) -> Option<u8> {
    if column >= 1 && column <= COLUMNS {
        Some(reg::DIGIT_0 + column - 1)
    } else {
        None
    }
}
