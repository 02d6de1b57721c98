//! ST7789V TFT controller over a 4-wire serial bus
//!
//! # Wiring
//!
//! | Line   | Use                               |
//! |--------|-----------------------------------|
//! | SCL/SDA| Bus clock and data (write only)   |
//! | D/C    | Mode: low = command, high = data  |
//! | CS     | Chip select, active low           |
//! | RESET  | Hardware reset, active low        |
//!
//! # Data path
//!
//! ```text
//! submit_fill() ──► FillQueue ──► worker: CASET, RASET, RAMWR
//!                                               │
//!                                         DmaBridge ──► bus
//!                                               │
//!                         DMA IRQ ──► Completion ┘
//! ```
//!
//! Pixel data goes out as RGB565, low byte first (see `SetRGB` in the
//! bring-up sequence).

pub mod command;
pub mod dma;
pub mod driver;
pub mod transport;

#[cfg(test)]
mod mock;

pub use command::Command;
pub use dma::DmaBridge;
pub use driver::{Argument, Driver, DriverStats};
pub use transport::Transport;
