//! DMA completion semaphore
//!
//! A binary semaphore given from the DMA-complete interrupt and taken by the
//! task that armed the transfer. The give side is split out as
//! [`Completion::signal_from_isr`]: it never blocks, never allocates and
//! never logs. Waking the waiting task is left to the executor, which pends
//! a context switch when a higher-priority task became ready.
//!
//! A give only counts while a transfer is armed. Arming clears anything
//! left over, and a give with nothing armed is discarded, so a stray
//! interrupt can never complete a later, unrelated transfer.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

/// Completion semaphore for one DMA channel
pub struct Completion<M: RawMutex> {
    signal: Signal<M, ()>,
    armed: AtomicBool,
    given: AtomicU32,
    spurious: AtomicU32,
}

impl<M: RawMutex> Default for Completion<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> Completion<M> {
    /// Create an idle completion
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
            armed: AtomicBool::new(false),
            given: AtomicU32::new(0),
            spurious: AtomicU32::new(0),
        }
    }

    /// Prepare for one transfer
    ///
    /// Must be called before the transfer is triggered.
    pub fn arm(&self) {
        self.signal.reset();
        self.armed.store(true, Ordering::Release);
    }

    /// Give the semaphore from interrupt context
    pub fn signal_from_isr(&self) {
        if self.armed.swap(false, Ordering::AcqRel) {
            self.given.fetch_add(1, Ordering::Relaxed);
            self.signal.signal(());
        } else {
            self.spurious.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Take the semaphore, suspending until the armed transfer completes
    ///
    /// There is no timeout: a lost interrupt blocks the caller forever.
    pub async fn wait(&self) {
        self.signal.wait().await
    }

    /// Drop any armed state without waiting
    pub fn disarm(&self) {
        self.armed.store(false, Ordering::Release);
        self.signal.reset();
    }

    /// True between [`Completion::arm`] and the matching interrupt
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }

    /// Number of gives that completed an armed transfer
    pub fn given(&self) -> u32 {
        self.given.load(Ordering::Relaxed)
    }

    /// Number of gives discarded because nothing was armed
    pub fn spurious(&self) -> u32 {
        self.spurious.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_futures::yield_now;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_armed_give_completes() {
        let done: Completion<NoopRawMutex> = Completion::new();

        done.arm();
        assert!(done.is_armed());
        done.signal_from_isr();
        assert!(!done.is_armed());

        block_on(done.wait());
        assert_eq!(done.given(), 1);
        assert_eq!(done.spurious(), 0);
    }

    #[test]
    fn test_give_before_arm_is_discarded() {
        let done: Completion<NoopRawMutex> = Completion::new();
        let finished = Cell::new(false);

        // Stray interrupts with no transfer armed
        done.signal_from_isr();
        done.signal_from_isr();
        assert_eq!(done.spurious(), 2);

        done.arm();

        block_on(join(
            async {
                done.wait().await;
                finished.set(true);
            },
            async {
                for _ in 0..8 {
                    yield_now().await;
                }
                // The stray gives must not have released the waiter
                assert!(!finished.get());
                done.signal_from_isr();
            },
        ));

        assert!(finished.get());
        assert_eq!(done.given(), 1);
    }

    #[test]
    fn test_second_give_in_same_cycle_is_spurious() {
        let done: Completion<NoopRawMutex> = Completion::new();

        done.arm();
        done.signal_from_isr();
        done.signal_from_isr();
        block_on(done.wait());

        assert_eq!(done.given(), 1);
        assert_eq!(done.spurious(), 1);
    }

    #[test]
    fn test_disarm_clears_pending_give() {
        let done: Completion<NoopRawMutex> = Completion::new();

        done.arm();
        done.disarm();
        assert!(!done.is_armed());

        done.signal_from_isr();
        assert_eq!(done.given(), 0);
        assert_eq!(done.spurious(), 1);
    }
}
