//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default delay between scroll steps in nanoseconds
pub const DEFAULT_CYCLE_DELAY_NS: u32 = 50;

/// Default half clock period in nanoseconds
///
/// The chips accept a 100 ns minimum clock period.
pub const DEFAULT_HALF_PERIOD_NS: u32 = 50;

/// Errors from configuration validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Half clock period must be non-zero
    ZeroHalfPeriod,
}

/// Scroll behavior of a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainConfig {
    /// Delay after every scroll step (ns)
    pub cycle_delay_ns: u32,
    /// Feed bits falling off the far end back in at the near end
    pub wrap: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            cycle_delay_ns: DEFAULT_CYCLE_DELAY_NS,
            wrap: true,
        }
    }
}

/// Clock timing of the bit-banged link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Half of the clock period (ns)
    pub half_period_ns: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            half_period_ns: DEFAULT_HALF_PERIOD_NS,
        }
    }
}

impl TimingConfig {
    /// Check that the timing can drive a clock
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.half_period_ns == 0 {
            return Err(ConfigError::ZeroHalfPeriod);
        }
        Ok(())
    }
}

/// Settings for the device-count probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProbeConfig {
    /// Give up after this many filler exchanges
    pub max_devices: u16,
    /// Pause between filler exchanges (ns)
    pub settle_ns: u32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            max_devices: 64,
            settle_ns: 200,
        }
    }
}
