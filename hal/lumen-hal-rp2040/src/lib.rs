//! RP2040-specific HAL for the display driver
//!
//! This crate provides RP2040 implementations of the shared `lumen-hal`
//! traits:
//!
//! - [`gpio::Line`] - push-pull output for the mode, select and reset lines
//! - [`spi::DisplaySpi`] - SPI0 transmit path, byte writes and TX DMA request
//! - [`dma::DisplayDma`] - one DMA channel feeding SPI0, completing on
//!   `DMA_IRQ_1`

#![no_std]

pub mod dma;
pub mod gpio;
pub mod spi;

// Re-export shared traits from lumen-hal for convenience
pub use lumen_hal::{DmaChannel, OutputPin, SpiConfig, SpiTx};
