//! Lumen Hardware Abstraction Layer
//!
//! This crate defines the hardware primitives the display driver is built
//! on. Chip-specific crates implement them, so the same protocol driver
//! runs on real silicon and against recording mocks on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lumen-drivers (ST7789V protocol)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  lumen-hal-   │       │  test mocks   │
//! │    rp2040     │       │   (host)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Mode (D/C), select and reset lines
//! - [`spi::SpiTx`] - Byte-at-a-time transmit with a ready flag
//! - [`dma::DmaChannel`] - Memory-to-peripheral DMA stream

#![no_std]
#![deny(unsafe_code)]

pub mod dma;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use dma::DmaChannel;
pub use gpio::OutputPin;
pub use spi::{SpiConfig, SpiTx};
