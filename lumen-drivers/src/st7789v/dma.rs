//! DMA bridge
//!
//! Streams a pixel buffer from memory to the bus data register. The
//! channel is programmed and started here, but completion is only ever
//! learned from the interrupt, through the [`Completion`] the bridge waits
//! on.

use embassy_sync::blocking_mutex::raw::RawMutex;
use lumen_core::{Completion, PendingTransfer};
use lumen_hal::{DmaChannel, OutputPin, SpiTx};

use super::transport::Transport;
use crate::error::DriverError;

/// DMA channel bound to the display bus
pub struct DmaBridge<D> {
    channel: D,
}

impl<D: DmaChannel> DmaBridge<D> {
    pub fn new(channel: D) -> Self {
        Self { channel }
    }

    /// Stream `transfer` to the bus and wait for the completion interrupt
    ///
    /// The transport must already be in data mode with the controller
    /// selected. On return the channel and the bus DMA request line are
    /// disabled again and the last byte has left the bus.
    pub async fn stream<M, B, DC, CS>(
        &mut self,
        transport: &mut Transport<B, DC, CS>,
        transfer: PendingTransfer,
        done: &Completion<M>,
    ) -> Result<(), DriverError>
    where
        M: RawMutex,
        B: SpiTx,
        DC: OutputPin,
        CS: OutputPin,
    {
        let count = u32::try_from(transfer.len())
            .ok()
            .filter(|&count| count <= self.channel.max_count())
            .ok_or(DriverError::TransferTooLarge)?;

        done.arm();
        self.channel.set_source(transfer.data());
        self.channel.set_count(count);
        self.channel.enable();
        transport.set_tx_dma(true);
        self.channel.trigger();

        done.wait().await;
        done.disarm();

        transport.set_tx_dma(false);
        self.channel.disable();
        transport.wait_ready()
    }
}
