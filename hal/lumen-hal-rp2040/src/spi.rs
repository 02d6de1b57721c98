//! SPI0 transmit path
//!
//! embassy's blocking driver sets up clocks, pins and the frame format.
//! After that, bytes go straight to the PL022 data register so the
//! display driver controls exactly when each one is queued, and the TX DMA
//! request can be switched on for pixel streams.

use embassy_rp::pac;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{self, Blocking, ClkPin, MosiPin, Spi};
use embassy_rp::Peri;
use lumen_hal::spi::{Phase, Polarity};
use lumen_hal::{SpiConfig, SpiTx};

/// Display bus on SPI0
pub struct DisplaySpi<'d> {
    _spi: Spi<'d, SPI0, Blocking>,
}

impl<'d> DisplaySpi<'d> {
    pub fn new(
        inner: Peri<'d, SPI0>,
        clk: Peri<'d, impl ClkPin<SPI0> + 'd>,
        mosi: Peri<'d, impl MosiPin<SPI0> + 'd>,
        config: &SpiConfig,
    ) -> Self {
        let (polarity, phase) = config.mode.into();

        let mut spi_config = spi::Config::default();
        spi_config.frequency = config.frequency;
        spi_config.polarity = match polarity {
            Polarity::IdleLow => spi::Polarity::IdleLow,
            Polarity::IdleHigh => spi::Polarity::IdleHigh,
        };
        spi_config.phase = match phase {
            Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
            Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
        };

        Self {
            _spi: Spi::new_blocking_txonly(inner, clk, mosi, spi_config),
        }
    }

    /// Address of the data register, the DMA write target
    pub fn data_register() -> u32 {
        pac::SPI0.sspdr().as_ptr() as u32
    }
}

impl SpiTx for DisplaySpi<'_> {
    fn send_byte(&mut self, byte: u8) {
        pac::SPI0.sspdr().write(|w| w.set_data(byte as u16));
    }

    fn is_ready(&self) -> bool {
        let sr = pac::SPI0.sspsr().read();
        sr.tfe() && !sr.bsy()
    }

    fn set_tx_dma(&mut self, enabled: bool) {
        pac::SPI0.sspdmacr().modify(|w| w.set_txdmae(enabled));
    }
}
