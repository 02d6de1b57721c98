//! Display worker task
//!
//! Sole consumer of fill requests: waits for one, sends the window and
//! streams the pixels, then waits again.

use defmt::*;

use crate::board::Display;

#[embassy_executor::task]
pub async fn worker_task(display: &'static Display) {
    info!("Display worker task started");

    match display.run().await {
        Ok(never) => match never {},
        Err(e) => {
            let stats = display.stats();
            error!(
                "Display worker stopped: {} (fills={}, transfers={})",
                e, stats.fills, stats.transfers
            );
        }
    }
}
