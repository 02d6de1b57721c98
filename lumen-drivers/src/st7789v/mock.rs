//! Recording doubles for the HAL traits
//!
//! Pins, bus, DMA channel and delay all append to one shared event log, so
//! a test can check the exact interleaving of line edges, bytes and DMA
//! steps. [`transactions`] folds the log back into command transactions
//! using the select and mode edges.

use core::cell::{Cell, RefCell};
use std::vec::Vec;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_hal_async::delay::DelayNs;
use lumen_core::Completion;
use lumen_hal::{DmaChannel, OutputPin, SpiTx};

pub type Log = RefCell<heapless::Vec<Event, 256>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Mode,
    Select,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Pin(Line, bool),
    Byte(u8),
    TxDma(bool),
    DmaSource(&'static [u8]),
    DmaCount(u32),
    DmaEnable,
    DmaDisable,
    DmaTrigger,
    Delay(u32),
}

fn record(log: &Log, event: Event) {
    log.borrow_mut().push(event).expect("event log full");
}

pub fn new_log() -> Log {
    RefCell::new(heapless::Vec::new())
}

/// One command transaction as seen on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub command: u8,
    pub args: Vec<u8>,
    pub stream: Option<&'static [u8]>,
}

impl Transaction {
    pub fn bytes(command: u8, args: &[u8]) -> Self {
        Self {
            command,
            args: args.to_vec(),
            stream: None,
        }
    }

    pub fn stream(command: u8, data: &'static [u8]) -> Self {
        Self {
            command,
            args: Vec::new(),
            stream: Some(data),
        }
    }
}

/// Rebuild transactions from the select/mode edges in the log
pub fn transactions(log: &Log) -> Vec<Transaction> {
    let mut out = Vec::new();
    let mut current: Option<Transaction> = None;
    let mut data_mode = false;

    for event in log.borrow().iter() {
        match *event {
            Event::Pin(Line::Select, false) => current = None,
            Event::Pin(Line::Select, true) => {
                if let Some(t) = current.take() {
                    out.push(t);
                }
            }
            Event::Pin(Line::Mode, high) => data_mode = high,
            Event::Byte(byte) if !data_mode => {
                current = Some(Transaction::bytes(byte, &[]));
            }
            Event::Byte(byte) => {
                if let Some(t) = current.as_mut() {
                    t.args.push(byte);
                }
            }
            Event::DmaSource(data) => {
                if let Some(t) = current.as_mut() {
                    t.stream = Some(data);
                }
            }
            _ => {}
        }
    }
    out
}

/// Mock GPIO line
pub struct MockPin<'a> {
    log: &'a Log,
    line: Line,
    high: bool,
}

impl<'a> MockPin<'a> {
    pub fn new(log: &'a Log, line: Line) -> Self {
        Self {
            log,
            line,
            high: false,
        }
    }
}

impl OutputPin for MockPin<'_> {
    fn set_high(&mut self) {
        self.high = true;
        record(self.log, Event::Pin(self.line, true));
    }

    fn set_low(&mut self) {
        self.high = false;
        record(self.log, Event::Pin(self.line, false));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Mock bus with a controllable ready flag
pub struct MockBus<'a> {
    log: &'a Log,
    busy: Cell<u32>,
    stalled: Cell<bool>,
    stall_on_dma: bool,
    polls: Cell<u32>,
}

impl<'a> MockBus<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self {
            log,
            busy: Cell::new(0),
            stalled: Cell::new(false),
            stall_on_dma: false,
            polls: Cell::new(0),
        }
    }

    /// Never report ready
    pub fn stall(&mut self, stalled: bool) {
        self.stalled.set(stalled);
    }

    /// Stop reporting ready once the DMA request line is enabled
    pub fn stall_on_dma(&mut self) {
        self.stall_on_dma = true;
    }

    /// Report busy for the next `polls` polls
    pub fn busy_for(&mut self, polls: u32) {
        self.busy.set(polls);
    }

    pub fn polls(&self) -> u32 {
        self.polls.get()
    }
}

impl SpiTx for MockBus<'_> {
    fn send_byte(&mut self, byte: u8) {
        record(self.log, Event::Byte(byte));
    }

    fn is_ready(&self) -> bool {
        self.polls.set(self.polls.get() + 1);
        if self.stalled.get() {
            return false;
        }
        match self.busy.get() {
            0 => true,
            n => {
                self.busy.set(n - 1);
                false
            }
        }
    }

    fn set_tx_dma(&mut self, enabled: bool) {
        if enabled && self.stall_on_dma {
            self.stalled.set(true);
        }
        record(self.log, Event::TxDma(enabled));
    }
}

/// Mock DMA channel
///
/// With a completion attached, a trigger fires the completion interrupt
/// immediately. Without one, the test plays the interrupt itself.
pub struct MockDma<'a> {
    log: &'a Log,
    complete: Option<&'a Completion<NoopRawMutex>>,
    enabled: bool,
    max_count: u32,
}

impl<'a> MockDma<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self {
            log,
            complete: None,
            enabled: false,
            max_count: u32::MAX,
        }
    }

    pub fn auto_complete(log: &'a Log, done: &'a Completion<NoopRawMutex>) -> Self {
        Self {
            log,
            complete: Some(done),
            enabled: false,
            max_count: u32::MAX,
        }
    }

    /// Limit the transfer counter, as on engines with a narrow count register
    pub fn with_max_count(mut self, max_count: u32) -> Self {
        self.max_count = max_count;
        self
    }
}

impl DmaChannel for MockDma<'_> {
    fn set_source(&mut self, data: &'static [u8]) {
        record(self.log, Event::DmaSource(data));
    }

    fn set_count(&mut self, count: u32) {
        record(self.log, Event::DmaCount(count));
    }

    fn max_count(&self) -> u32 {
        self.max_count
    }

    fn enable(&mut self) {
        assert!(!self.enabled, "DMA channel enabled while a transfer is armed");
        self.enabled = true;
        record(self.log, Event::DmaEnable);
    }

    fn disable(&mut self) {
        self.enabled = false;
        record(self.log, Event::DmaDisable);
    }

    fn trigger(&mut self) {
        assert!(self.enabled, "DMA triggered on a disabled channel");
        record(self.log, Event::DmaTrigger);
        if let Some(done) = self.complete {
            done.signal_from_isr();
        }
    }
}

/// Mock delay that records millisecond waits and returns at once
pub struct MockDelay<'a> {
    log: &'a Log,
}

impl<'a> MockDelay<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }
}

impl DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, _ns: u32) {}

    async fn delay_ms(&mut self, ms: u32) {
        record(self.log, Event::Delay(ms));
    }
}
