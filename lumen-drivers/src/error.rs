//! Driver errors

use lumen_core::WindowError;

/// Errors reported by the display driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// The bus never reported ready within the configured spin limit
    BusTimeout,
    /// Fill window start lies after its end
    InvalidWindow,
    /// The worker was started before the panel was brought up
    NotInitialized,
    /// A DMA transfer was attached to a command other than `Write`
    TransferNotWrite,
    /// Buffer longer than the DMA engine can count
    TransferTooLarge,
}

impl From<WindowError> for DriverError {
    fn from(_: WindowError) -> Self {
        DriverError::InvalidWindow
    }
}
