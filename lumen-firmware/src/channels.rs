//! Shared driver statics
//!
//! Both live in statics so the DMA interrupt vector can reach the
//! completion without going through the driver.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use lumen_core::{Completion, FillQueue};

/// Given by `DMA_IRQ_1` when the display transfer finishes
pub static DMA_DONE: Completion<CriticalSectionRawMutex> = Completion::new();

/// Pending fill request for the display worker
pub static FILL_REQUESTS: FillQueue<CriticalSectionRawMutex> = FillQueue::new();
