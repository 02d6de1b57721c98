//! Serial bus abstractions
//!
//! The display bus is half duplex and transmit-only from the driver's point
//! of view. Command and argument bytes are pushed one at a time and the
//! caller spins on the ready flag between bytes; bulk pixel data is moved
//! by DMA once the bus's DMA request line is enabled.

/// Transmit side of a serial bus
pub trait SpiTx {
    /// Queue one byte for transmission
    ///
    /// Must only be called while [`SpiTx::is_ready`] reports true.
    fn send_byte(&mut self, byte: u8);

    /// Check the bus-ready flag
    ///
    /// True once every queued byte has been shifted out and the bus is idle.
    fn is_ready(&self) -> bool;

    /// Enable or disable the bus's TX DMA request line
    fn set_tx_dma(&mut self, enabled: bool);
}

/// Serial bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock mode
    pub mode: Mode,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 62_500_000, // ST7789V write-cycle maximum
            mode: Mode::Mode3,
        }
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}
