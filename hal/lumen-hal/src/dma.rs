//! DMA engine abstraction
//!
//! One channel, memory to the bus data register, byte wide. Completion is
//! never polled: the platform wires the channel's completion interrupt to
//! the driver's interrupt-service entry point.

/// Memory-to-peripheral DMA channel
///
/// The destination (the bus data register) and pacing (the bus TX request)
/// are fixed by the implementation when the channel is created.
pub trait DmaChannel {
    /// Program the source address from a buffer
    ///
    /// The `'static` bound keeps the buffer alive for as long as the engine
    /// may still be reading from it.
    fn set_source(&mut self, data: &'static [u8]);

    /// Program the number of bytes to move
    fn set_count(&mut self, count: u32);

    /// Largest count the channel's transfer counter can hold
    fn max_count(&self) -> u32 {
        u32::MAX
    }

    /// Enable the channel
    fn enable(&mut self);

    /// Disable the channel
    fn disable(&mut self);

    /// Start the programmed transfer
    fn trigger(&mut self);
}
