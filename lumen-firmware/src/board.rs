//! Board wiring
//!
//! | Signal | GPIO | Function        |
//! |--------|------|-----------------|
//! | SCL    | 18   | SPI0 SCK        |
//! | SDA    | 19   | SPI0 TX         |
//! | CS     | 17   | output          |
//! | D/C    | 20   | output          |
//! | RESET  | 21   | output          |

use embassy_rp::peripherals::DMA_CH0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use lumen_drivers::st7789v::Driver;
use lumen_hal_rp2040::dma::DisplayDma;
use lumen_hal_rp2040::gpio::Line;
use lumen_hal_rp2040::spi::DisplaySpi;

/// DMA channel number used for pixel streams (`DMA_CH0`)
pub const DMA_CHANNEL: usize = 0;

/// The display driver as wired on this board
pub type Display = Driver<
    'static,
    CriticalSectionRawMutex,
    DisplaySpi<'static>,
    Line<'static>,
    Line<'static>,
    DisplayDma<'static, DMA_CH0>,
>;
