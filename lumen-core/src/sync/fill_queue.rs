//! Depth-1 fill request hand-off
//!
//! Producers call [`FillQueue::submit`] from any task; it never suspends.
//! The request lands in a single slot and the hand-off semaphore is given.
//! The worker takes the slot in [`FillQueue::take`].
//!
//! A submit that finds the slot still occupied replaces the old request,
//! latest wins. The window and buffer are written as one unit inside a
//! critical section, so the worker always sees a whole request, never half
//! of one and half of the next. Producers that must not lose requests can
//! wait for the slot with [`FillQueue::wait_vacant`] first.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicU32, Ordering};

use crate::request::FillRequest;

/// Single-slot fill request queue
pub struct FillQueue<M: RawMutex> {
    slot: BlockingMutex<M, Cell<Option<FillRequest>>>,
    /// Hand-off semaphore: given on submit, taken by the worker
    ready: Signal<M, ()>,
    /// Given whenever the worker empties the slot
    vacant: Signal<M, ()>,
    overwritten: AtomicU32,
}

impl<M: RawMutex> Default for FillQueue<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> FillQueue<M> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            slot: BlockingMutex::new(Cell::new(None)),
            ready: Signal::new(),
            vacant: Signal::new(),
            overwritten: AtomicU32::new(0),
        }
    }

    /// Store a request and wake the worker
    ///
    /// Returns the request it displaced, if the worker had not taken the
    /// previous one yet.
    pub fn submit(&self, request: FillRequest) -> Option<FillRequest> {
        let displaced = self.slot.lock(|slot| slot.replace(Some(request)));
        if displaced.is_some() {
            self.overwritten.fetch_add(1, Ordering::Relaxed);
            trace!("fill request overwritten before the worker took it");
        }
        self.ready.signal(());
        displaced
    }

    /// Wait for a request and take it out of the slot
    pub async fn take(&self) -> FillRequest {
        loop {
            self.ready.wait().await;
            if let Some(request) = self.slot.lock(|slot| slot.take()) {
                self.vacant.signal(());
                return request;
            }
        }
    }

    /// True while a submitted request has not been taken
    pub fn is_pending(&self) -> bool {
        self.slot.lock(|slot| slot.get().is_some())
    }

    /// Suspend until the slot is empty
    pub async fn wait_vacant(&self) {
        while self.is_pending() {
            self.vacant.wait().await;
        }
    }

    /// Requests replaced before the worker took them
    pub fn overwritten(&self) -> u32 {
        self.overwritten.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Window;
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_futures::yield_now;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    static RED: [u8; 8] = [0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8];
    static BLUE: [u8; 8] = [0x1F, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x1F, 0x00];

    fn request(row: u16, data: &'static [u8]) -> FillRequest {
        FillRequest::new(Window::new(0, 3, row, row), data)
    }

    #[test]
    fn test_submit_then_take() {
        let queue: FillQueue<NoopRawMutex> = FillQueue::new();

        assert!(queue.submit(request(0, &RED)).is_none());
        assert!(queue.is_pending());

        let taken = block_on(queue.take());
        assert_eq!(taken, request(0, &RED));
        assert!(!queue.is_pending());
        assert_eq!(queue.overwritten(), 0);
    }

    #[test]
    fn test_second_submit_overwrites() {
        let queue: FillQueue<NoopRawMutex> = FillQueue::new();

        queue.submit(request(0, &RED));
        let displaced = queue.submit(request(1, &BLUE));
        assert_eq!(displaced, Some(request(0, &RED)));

        // The worker sees only the latest request, whole
        let taken = block_on(queue.take());
        assert_eq!(taken.window, Window::new(0, 3, 1, 1));
        assert_eq!(taken.transfer.data(), &BLUE[..]);
        assert_eq!(queue.overwritten(), 1);
        assert!(!queue.is_pending());
    }

    #[test]
    fn test_take_waits_for_submit() {
        let queue: FillQueue<NoopRawMutex> = FillQueue::new();
        let taken = Cell::new(None);

        block_on(join(
            async {
                taken.set(Some(queue.take().await));
            },
            async {
                for _ in 0..4 {
                    yield_now().await;
                }
                assert!(taken.get().is_none());
                queue.submit(request(2, &RED));
            },
        ));

        assert_eq!(taken.get(), Some(request(2, &RED)));
    }

    #[test]
    fn test_wait_vacant_releases_after_take() {
        let queue: FillQueue<NoopRawMutex> = FillQueue::new();
        let released = Cell::new(false);

        queue.submit(request(0, &RED));

        block_on(join(
            async {
                queue.wait_vacant().await;
                released.set(true);
            },
            async {
                for _ in 0..4 {
                    yield_now().await;
                }
                assert!(!released.get());
                queue.take().await;
            },
        ));

        assert!(released.get());
        // Already empty: returns immediately
        block_on(queue.wait_vacant());
    }

    #[test]
    fn test_submit_while_worker_busy_wakes_next_take() {
        let queue: FillQueue<NoopRawMutex> = FillQueue::new();

        queue.submit(request(0, &RED));
        let first = block_on(queue.take());
        assert_eq!(first, request(0, &RED));

        // Lands while the first fill is being serviced
        queue.submit(request(1, &BLUE));
        assert!(queue.is_pending());

        let taken = Cell::new(None);
        block_on(join(
            async {
                taken.set(Some(queue.take().await));
            },
            async {
                for _ in 0..4 {
                    yield_now().await;
                }
            },
        ));
        assert_eq!(taken.get(), Some(request(1, &BLUE)));
        assert!(!queue.is_pending());
    }
}
