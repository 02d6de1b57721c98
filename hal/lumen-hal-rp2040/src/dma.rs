//! DMA channel feeding SPI0
//!
//! embassy-rp services `DMA_IRQ_0` for its own transfers, so this channel
//! reports completion on `DMA_IRQ_1`. The firmware owns that vector and
//! calls [`acknowledge`] from it.

use embassy_rp::dma::Channel;
use embassy_rp::interrupt::{self, InterruptExt, Priority};
use embassy_rp::pac;
use embassy_rp::pac::dma::regs::CtrlTrig;
use embassy_rp::pac::dma::vals::{DataSize, TreqSel};
use embassy_rp::Peri;
use lumen_hal::DmaChannel;

use crate::spi::DisplaySpi;

/// Clear channel `number`'s `DMA_IRQ_1` flag; true if it was set
///
/// Interrupt-safe: two register accesses, nothing else.
pub fn acknowledge(number: usize) -> bool {
    let mask = 1 << number;
    if pac::DMA.ints1().read() & mask == 0 {
        return false;
    }
    pac::DMA.ints1().write_value(mask);
    true
}

/// One DMA channel, memory to SPI0 TX, byte wide
pub struct DisplayDma<'d, C: Channel> {
    _ch: Peri<'d, C>,
    number: usize,
    source: u32,
}

impl<'d, C: Channel> DisplayDma<'d, C> {
    /// Claim `ch` and route its completion to `DMA_IRQ_1`
    pub fn new(ch: Peri<'d, C>) -> Self {
        let number = ch.number() as usize;
        let regs = pac::DMA.ch(number);

        regs.al1_ctrl().write_value(Self::ctrl(number, false).0);
        regs.write_addr().write_value(DisplaySpi::data_register());
        pac::DMA.ints1().write_value(1 << number);
        pac::DMA.inte1().modify(|w| *w |= 1 << number);

        interrupt::DMA_IRQ_1.set_priority(Priority::P2);
        interrupt::DMA_IRQ_1.unpend();
        // SAFETY: the firmware defines the DMA_IRQ_1 handler
        unsafe { interrupt::DMA_IRQ_1.enable() };

        Self {
            _ch: ch,
            number,
            source: 0,
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    fn ctrl(number: usize, enabled: bool) -> CtrlTrig {
        let mut w = CtrlTrig(0);
        w.set_treq_sel(TreqSel::SPI0_TX);
        w.set_data_size(DataSize::SIZE_BYTE);
        w.set_incr_read(true);
        w.set_incr_write(false);
        w.set_chain_to(number as u8);
        w.set_en(enabled);
        w
    }
}

impl<C: Channel> DmaChannel for DisplayDma<'_, C> {
    fn set_source(&mut self, data: &'static [u8]) {
        self.source = data.as_ptr() as u32;
        pac::DMA.ch(self.number).read_addr().write_value(self.source);
    }

    fn set_count(&mut self, count: u32) {
        pac::DMA.ch(self.number).trans_count().write_value(count);
    }

    fn enable(&mut self) {
        pac::DMA
            .ch(self.number)
            .al1_ctrl()
            .write_value(Self::ctrl(self.number, true).0);
    }

    fn disable(&mut self) {
        pac::DMA
            .ch(self.number)
            .al1_ctrl()
            .write_value(Self::ctrl(self.number, false).0);
    }

    fn trigger(&mut self) {
        // Rewriting the read address through its trigger alias starts the channel
        pac::DMA
            .ch(self.number)
            .al3_read_addr_trig()
            .write_value(self.source);
    }
}
