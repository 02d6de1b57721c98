//! Synchronization between producers, the worker task and the DMA interrupt
//!
//! Two primitives, both `const`-constructible so they can live in statics
//! that the interrupt vector can reach:
//!
//! - [`FillQueue`]: depth-1 hand-off of a pending fill request from any task
//!   to the worker
//! - [`Completion`]: DMA-complete signal from interrupt context to the task
//!   that armed the transfer

pub mod completion;
pub mod fill_queue;

pub use completion::Completion;
pub use fill_queue::FillQueue;
