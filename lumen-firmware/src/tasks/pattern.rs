//! Stripe test pattern task
//!
//! Fills the panel band by band from two static buffers, red on even
//! frames and blue on odd ones. Each band waits for the worker to take the
//! previous request, so nothing is overwritten.

use defmt::*;
use embassy_time::Timer;
use lumen_core::pattern::{band_bytes, fill_color, frame_color, Stripes};
use static_cell::StaticCell;

use crate::board::Display;
use crate::channels::FILL_REQUESTS;

/// One 240 x 4 RGB565 band
const BAND_CAPACITY: usize = 240 * 4 * 2;

/// Log counters every this many frames
const STATS_INTERVAL: u32 = 50;

static EVEN_BAND: StaticCell<[u8; BAND_CAPACITY]> = StaticCell::new();
static ODD_BAND: StaticCell<[u8; BAND_CAPACITY]> = StaticCell::new();

#[embassy_executor::task]
pub async fn pattern_task(display: &'static Display) {
    info!("Test pattern task started");

    let config = *display.config();
    let needed = band_bytes(&config.panel, &config.pattern);
    if needed > BAND_CAPACITY {
        warn!(
            "Test pattern band needs {} bytes, buffer holds {}; pattern disabled",
            needed, BAND_CAPACITY
        );
        return;
    }

    let even = EVEN_BAND.init([0; BAND_CAPACITY]);
    fill_color(even, frame_color(0));
    let odd = ODD_BAND.init([0; BAND_CAPACITY]);
    fill_color(odd, frame_color(1));
    let buffers: [&'static [u8]; 2] = [even, odd];

    let mut frame: u32 = 0;
    loop {
        let buf = buffers[(frame % 2) as usize];

        for band in Stripes::new(&config.panel, &config.pattern) {
            FILL_REQUESTS.wait_vacant().await;
            if let Err(e) = display.submit_fill(
                band.start_x,
                band.end_x,
                band.start_y,
                band.end_y,
                &buf[..band.byte_len()],
            ) {
                warn!("Test pattern fill rejected: {}", e);
            }
        }

        frame = frame.wrapping_add(1);
        if frame % STATS_INTERVAL == 0 {
            let stats = display.stats();
            debug!(
                "Frames={} fills={} overwritten={} spurious={}",
                frame, stats.fills, stats.overwritten, stats.spurious_completions
            );
        }

        Timer::after_millis(config.pattern.frame_delay_ms as u64).await;
    }
}
