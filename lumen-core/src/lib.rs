//! Board-agnostic core of the display driver
//!
//! This crate contains everything the ST7789V driver needs that does not
//! touch hardware:
//!
//! - Window encoding (column/row address ranges)
//! - Fill requests and the depth-1 hand-off queue to the worker task
//! - The DMA completion semaphore with its interrupt-safe give
//! - Driver configuration and its text-file loader
//! - The built-in stripe test pattern

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

// Must come first so the logging macros are visible to later modules
mod fmt;

pub mod config;
pub mod pattern;
pub mod request;
pub mod sync;
pub mod window;

pub use request::{FillRequest, PendingTransfer};
pub use sync::{Completion, FillQueue};
pub use window::{Window, WindowError};
