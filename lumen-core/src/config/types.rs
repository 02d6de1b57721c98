//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default cap on bus-ready polls per byte
pub const DEFAULT_READY_SPIN_LIMIT: u32 = 1_000_000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in its section
    UnknownKey,
    /// Value could not be parsed
    InvalidValue,
    /// Value parsed but outside the allowed range
    OutOfRange,
}

/// Reset and power-up delays, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InitTiming {
    /// Hold time on each edge of the reset pulse
    pub reset_pulse_ms: u32,
    /// Wait after reset is released
    pub reset_settle_ms: u32,
    /// Wait after leaving sleep (Wake)
    pub wake_settle_ms: u32,
    /// Wait after turning the display on
    pub display_on_settle_ms: u32,
}

impl Default for InitTiming {
    fn default() -> Self {
        Self {
            reset_pulse_ms: 1,
            reset_settle_ms: 120,
            wake_settle_ms: 120,
            display_on_settle_ms: 50,
        }
    }
}

/// Panel geometry in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 320,
        }
    }
}

/// Built-in stripe test pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PatternConfig {
    /// Rows per band (one fill request each)
    pub band_rows: u16,
    /// Pause between frames
    pub frame_delay_ms: u32,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            band_rows: 4,
            frame_delay_ms: 100,
        }
    }
}

/// Complete driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    /// Bus clock in Hz
    pub spi_frequency_hz: u32,
    /// Bus-ready polls allowed per byte before the transaction fails
    ///
    /// `None` spins forever on a bus that never becomes ready.
    pub ready_spin_limit: Option<u32>,
    /// Bring-up delays
    pub timing: InitTiming,
    /// Panel geometry
    pub panel: PanelConfig,
    /// Test pattern settings
    pub pattern: PatternConfig,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            spi_frequency_hz: 62_500_000,
            ready_spin_limit: Some(DEFAULT_READY_SPIN_LIMIT),
            timing: InitTiming::default(),
            panel: PanelConfig::default(),
            pattern: PatternConfig::default(),
        }
    }
}

impl DriverConfig {
    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spi_frequency_hz == 0 {
            return Err(ConfigError::OutOfRange);
        }
        if self.ready_spin_limit == Some(0) {
            return Err(ConfigError::OutOfRange);
        }
        if self.panel.width == 0 || self.panel.height == 0 {
            return Err(ConfigError::OutOfRange);
        }
        if self.pattern.band_rows == 0 || self.pattern.band_rows > self.panel.height {
            return Err(ConfigError::OutOfRange);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DriverConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.ready_spin_limit, Some(DEFAULT_READY_SPIN_LIMIT));
        assert_eq!(config.timing.wake_settle_ms, 120);
    }

    #[test]
    fn test_band_taller_than_panel_rejected() {
        let mut config = DriverConfig::default();
        config.pattern.band_rows = 321;
        assert_eq!(config.validate(), Err(ConfigError::OutOfRange));

        config.pattern.band_rows = 0;
        assert_eq!(config.validate(), Err(ConfigError::OutOfRange));
    }
}
