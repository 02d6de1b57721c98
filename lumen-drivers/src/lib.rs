//! Display controller drivers
//!
//! This crate turns the primitives in `lumen-hal` and the board-agnostic
//! pieces in `lumen-core` into a working panel driver:
//!
//! - [`st7789v`] - ST7789V command transport, DMA pixel streaming, bring-up
//!   sequence and the fill worker

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

// Must come first so the logging macros are visible to later modules
mod fmt;

pub mod error;
pub mod st7789v;

pub use error::DriverError;
