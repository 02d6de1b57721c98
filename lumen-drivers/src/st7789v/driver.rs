//! Protocol driver
//!
//! The driver owns the transport and the DMA bridge, each behind its own
//! async mutex, and references the two statics the rest of the system
//! shares with it: the completion semaphore (given from the DMA interrupt)
//! and the fill request queue (fed by any task).
//!
//! Lock order is always bus, then DMA. The DMA lock is the transfer mutex:
//! at most one transfer is armed at any time. Every transfer is started from
//! inside a bus transaction, so while the bus lock is held the transfer mutex
//! is never contended; it only pins the arm/wait/disarm sequence to the
//! channel for the duration of one stream.

use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::delay::DelayNs;
use lumen_core::config::DriverConfig;
use lumen_core::{Completion, FillQueue, FillRequest, PendingTransfer, Window};
use lumen_hal::{DmaChannel, OutputPin, SpiTx};
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use super::command::{Command, COLOR_FMT_RGB565, RAM_READ_MODE, RGB_LITTLE_ENDIAN};
use super::dma::DmaBridge;
use super::transport::Transport;
use crate::error::DriverError;

/// Argument attached to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument<'a> {
    /// Command byte only
    None,
    /// Bytes clocked out by the CPU, borrowed for this call only
    Bytes(&'a [u8]),
    /// Buffer streamed by DMA; only valid with [`Command::Write`]
    Transfer(PendingTransfer),
}

impl Argument<'_> {
    pub fn len(&self) -> usize {
        match self {
            Argument::None => 0,
            Argument::Bytes(bytes) => bytes.len(),
            Argument::Transfer(transfer) => transfer.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a [u8]> for Argument<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Argument::Bytes(bytes)
    }
}

impl From<PendingTransfer> for Argument<'_> {
    fn from(transfer: PendingTransfer) -> Self {
        Argument::Transfer(transfer)
    }
}

/// Counters since start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverStats {
    /// Fill cycles completed by the worker
    pub fills: u32,
    /// DMA transfers completed
    pub transfers: u32,
    /// Fill requests replaced before the worker took them
    pub overwritten: u32,
    /// Completion interrupts that arrived with nothing armed
    pub spurious_completions: u32,
}

/// ST7789V driver context
pub struct Driver<'a, M: RawMutex, B, DC, CS, D> {
    bus: Mutex<M, Transport<B, DC, CS>>,
    dma: Mutex<M, DmaBridge<D>>,
    done: &'a Completion<M>,
    requests: &'a FillQueue<M>,
    config: DriverConfig,
    on_flush: Option<fn()>,
    initialized: AtomicBool,
    fills: AtomicU32,
    transfers: AtomicU32,
}

impl<'a, M, B, DC, CS, D> Driver<'a, M, B, DC, CS, D>
where
    M: RawMutex,
    B: SpiTx,
    DC: OutputPin,
    CS: OutputPin,
    D: DmaChannel,
{
    /// Create a driver
    ///
    /// `done` must be the completion the DMA interrupt gives; `requests`
    /// the queue producers submit to.
    pub fn new(
        transport: Transport<B, DC, CS>,
        channel: D,
        done: &'a Completion<M>,
        requests: &'a FillQueue<M>,
        config: DriverConfig,
    ) -> Self {
        Self {
            bus: Mutex::new(transport.with_spin_limit(config.ready_spin_limit)),
            dma: Mutex::new(DmaBridge::new(channel)),
            done,
            requests,
            config,
            on_flush: None,
            initialized: AtomicBool::new(false),
            fills: AtomicU32::new(0),
            transfers: AtomicU32::new(0),
        }
    }

    /// Call `hook` in task context after every completed DMA transfer
    pub fn with_flush_hook(mut self, hook: fn()) -> Self {
        self.on_flush = Some(hook);
        self
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Hardware reset and power-up sequence
    ///
    /// Must finish before the worker starts.
    pub async fn init<R, T>(&self, reset: &mut R, delay: &mut T) -> Result<(), DriverError>
    where
        R: OutputPin,
        T: DelayNs,
    {
        let timing = self.config.timing;

        {
            let mut bus = self.bus.lock().await;
            bus.deselect();
            reset.set_high();
            delay.delay_ms(timing.reset_pulse_ms).await;
            reset.set_low();
            delay.delay_ms(timing.reset_pulse_ms).await;
            reset.set_high();
            delay.delay_ms(timing.reset_settle_ms).await;
            bus.deselect();
        }
        debug!("reset done");

        self.control(Command::Wake, Argument::None).await?;
        delay.delay_ms(timing.wake_settle_ms).await;
        debug!("wake done");

        self.control(Command::SetRAMReadMode, Argument::Bytes(&RAM_READ_MODE))
            .await?;
        debug!("set read mode done");

        self.control(Command::SetColorFmt, Argument::Bytes(&COLOR_FMT_RGB565))
            .await?;
        debug!("set color fmt done");

        self.control(Command::SetRGB, Argument::Bytes(&RGB_LITTLE_ENDIAN))
            .await?;
        debug!("set rgb fmt done");

        self.control(Command::OnReverse, Argument::None).await?;
        debug!("reverse done");

        self.control(Command::OnDisplay, Argument::None).await?;
        delay.delay_ms(timing.display_on_settle_ms).await;

        self.initialized.store(true, Ordering::Release);
        info!("init done");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Issue one command transaction
    ///
    /// Waits for any transaction already on the bus. A `Write` carrying a
    /// transfer suspends until the DMA completion interrupt arrives.
    pub async fn control(&self, command: Command, argument: Argument<'_>) -> Result<(), DriverError> {
        let mut bus = self.bus.lock().await;
        self.transaction(&mut bus, command, argument).await
    }

    /// Queue a fill of the inclusive window with `buf`
    ///
    /// Never suspends. A request still waiting for the worker is replaced.
    /// `buf` must not change until the resulting transfer has completed.
    pub fn submit_fill(
        &self,
        start_x: u16,
        end_x: u16,
        start_y: u16,
        end_y: u16,
        buf: &'static [u8],
    ) -> Result<(), DriverError> {
        let window = Window::try_new(start_x, end_x, start_y, end_y)?;
        self.requests.submit(FillRequest::new(window, buf));
        Ok(())
    }

    /// Run one fill: column window, row window, then the pixel stream
    ///
    /// The bus is held for all three transactions, so nothing can be
    /// interleaved between the window and the write.
    pub async fn fill(&self, request: &FillRequest) -> Result<(), DriverError> {
        let mut bus = self.bus.lock().await;
        self.transaction(
            &mut bus,
            Command::SetColumn,
            Argument::Bytes(request.window.column()),
        )
        .await?;
        self.transaction(&mut bus, Command::SetRow, Argument::Bytes(request.window.row()))
            .await?;
        self.transaction(&mut bus, Command::Write, Argument::Transfer(request.transfer))
            .await?;
        self.fills.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Wait for the next fill request and run it
    pub async fn service_next(&self) -> Result<(), DriverError> {
        let request = self.requests.take().await;
        trace!("fill request: {} bytes", request.transfer.len());
        self.fill(&request).await
    }

    /// Worker loop; only returns on error
    pub async fn run(&self) -> Result<Infallible, DriverError> {
        if !self.is_initialized() {
            return Err(DriverError::NotInitialized);
        }
        loop {
            self.service_next().await?;
        }
    }

    /// DMA-complete interrupt entry point
    ///
    /// Safe to call from interrupt context.
    pub fn on_dma_complete(&self) {
        self.done.signal_from_isr();
    }

    pub fn stats(&self) -> DriverStats {
        DriverStats {
            fills: self.fills.load(Ordering::Relaxed),
            transfers: self.transfers.load(Ordering::Relaxed),
            overwritten: self.requests.overwritten(),
            spurious_completions: self.done.spurious(),
        }
    }

    async fn transaction(
        &self,
        bus: &mut Transport<B, DC, CS>,
        command: Command,
        argument: Argument<'_>,
    ) -> Result<(), DriverError> {
        if let Argument::Transfer(transfer) = argument {
            if command != Command::Write && !transfer.is_empty() {
                return Err(DriverError::TransferNotWrite);
            }
        }

        bus.begin();
        let result = self.exchange(bus, command, argument).await;
        bus.deselect();
        result
    }

    async fn exchange(
        &self,
        bus: &mut Transport<B, DC, CS>,
        command: Command,
        argument: Argument<'_>,
    ) -> Result<(), DriverError> {
        bus.write_byte(command.opcode())?;

        match argument {
            _ if argument.is_empty() => {}
            Argument::None => {}
            Argument::Bytes(bytes) => {
                bus.data_mode();
                bus.write_bytes(bytes)?;
            }
            Argument::Transfer(transfer) => {
                bus.data_mode();
                let mut dma = self.dma.lock().await;
                dma.stream(bus, transfer, self.done).await?;
                self.transfers.fetch_add(1, Ordering::Relaxed);
                if let Some(hook) = self.on_flush {
                    hook();
                }
                return Ok(());
            }
        }

        bus.wait_ready()
    }
}
