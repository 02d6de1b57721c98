//! Command/argument transport
//!
//! Owns the bus and the two control lines. A transaction is:
//!
//! ```text
//! mode low, select low
//! command byte
//! [mode high, argument bytes or DMA stream]
//! drain, select high
//! ```
//!
//! Every byte waits for the bus-ready flag first. The wait is a plain spin;
//! it never yields to the scheduler.

use core::hint::spin_loop;

use lumen_core::config::DEFAULT_READY_SPIN_LIMIT;
use lumen_hal::{OutputPin, SpiTx};

use crate::error::DriverError;

/// Bus plus mode (D/C) and select (CS) lines
pub struct Transport<B, DC, CS> {
    bus: B,
    dc: DC,
    cs: CS,
    spin_limit: Option<u32>,
}

impl<B, DC, CS> Transport<B, DC, CS>
where
    B: SpiTx,
    DC: OutputPin,
    CS: OutputPin,
{
    /// Wrap a bus and its control lines
    pub fn new(bus: B, dc: DC, cs: CS) -> Self {
        Self {
            bus,
            dc,
            cs,
            spin_limit: Some(DEFAULT_READY_SPIN_LIMIT),
        }
    }

    /// Cap the bus-ready spin; `None` waits forever
    pub fn with_spin_limit(mut self, limit: Option<u32>) -> Self {
        self.spin_limit = limit;
        self
    }

    /// Start a transaction: command mode, controller selected
    pub fn begin(&mut self) {
        self.dc.set_low();
        self.cs.set_low();
    }

    /// Switch to argument/data bytes
    pub fn data_mode(&mut self) {
        self.dc.set_high();
    }

    /// Release the controller
    pub fn deselect(&mut self) {
        self.cs.set_high();
    }

    /// Spin until the bus reports ready
    pub fn wait_ready(&self) -> Result<(), DriverError> {
        match self.spin_limit {
            None => {
                while !self.bus.is_ready() {
                    spin_loop();
                }
                Ok(())
            }
            Some(limit) => {
                for _ in 0..limit {
                    if self.bus.is_ready() {
                        return Ok(());
                    }
                    spin_loop();
                }
                Err(DriverError::BusTimeout)
            }
        }
    }

    /// Send one byte once the bus is ready
    pub fn write_byte(&mut self, byte: u8) -> Result<(), DriverError> {
        self.wait_ready()?;
        self.bus.send_byte(byte);
        Ok(())
    }

    /// Send a run of bytes, polling before each one
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), DriverError> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Enable or disable the bus DMA request line
    pub fn set_tx_dma(&mut self, enabled: bool) {
        self.bus.set_tx_dma(enabled);
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}
