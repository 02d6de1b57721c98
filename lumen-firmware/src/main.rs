//! Lumen - ST7789V display firmware
//!
//! Main firmware binary for RP2040 boards driving an ST7789V panel over
//! SPI0. Pixel data is streamed by DMA from a dedicated worker task; the
//! rest of the system only ever queues fill requests.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::Level;
use embassy_rp::interrupt;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lumen_drivers::st7789v::{Driver, Transport};
use lumen_hal_rp2040::dma::{self as display_dma, DisplayDma};
use lumen_hal_rp2040::gpio::Line;
use lumen_hal_rp2040::spi::DisplaySpi;
use lumen_hal_rp2040::SpiConfig;

mod board;
mod channels;
mod config;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../display.toml");

// Driver context (must live forever for task references)
static DISPLAY: StaticCell<board::Display> = StaticCell::new();

/// DMA completion for the display channel
///
/// Gives the completion semaphore and returns; the executor takes care of
/// waking the worker.
#[interrupt]
fn DMA_IRQ_1() {
    if display_dma::acknowledge(board::DMA_CHANNEL) {
        channels::DMA_DONE.signal_from_isr();
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumen firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load(EMBEDDED_CONFIG);

    let spi_config = SpiConfig {
        frequency: config.spi_frequency_hz,
        ..SpiConfig::default()
    };
    let spi = DisplaySpi::new(p.SPI0, p.PIN_18, p.PIN_19, &spi_config);
    let cs = Line::new(p.PIN_17, Level::High);
    let dc = Line::new(p.PIN_20, Level::High);
    let mut reset = Line::new(p.PIN_21, Level::High);
    let dma = DisplayDma::new(p.DMA_CH0);
    debug_assert_eq!(dma.number(), board::DMA_CHANNEL);
    info!("SPI0 at {} Hz, DMA channel {}", spi_config.frequency, dma.number());

    let display: &'static board::Display = DISPLAY.init(Driver::new(
        Transport::new(spi, dc, cs),
        dma,
        &channels::DMA_DONE,
        &channels::FILL_REQUESTS,
        config,
    ));

    if let Err(e) = display.init(&mut reset, &mut Delay).await {
        error!("Display init failed: {}", e);
        defmt::panic!("display bring-up failed");
    }

    spawner.spawn(tasks::worker_task(display)).unwrap();
    #[cfg(feature = "test-pattern")]
    spawner.spawn(tasks::pattern_task(display)).unwrap();

    info!("All tasks spawned, firmware running");
}
