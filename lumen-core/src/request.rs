//! Fill requests
//!
//! A fill request pairs an encoded [`Window`] with the pixel buffer that
//! should be streamed into it. The buffer is borrowed for `'static`: the
//! caller keeps ownership but the driver may read it at any point until the
//! resulting DMA transfer has completed, and no completion is reported back.

use core::fmt;

use crate::window::Window;

/// Pixel buffer awaiting a DMA transfer
#[derive(Clone, Copy)]
pub struct PendingTransfer {
    data: &'static [u8],
}

impl PendingTransfer {
    /// Wrap a pixel buffer
    pub const fn new(data: &'static [u8]) -> Self {
        Self { data }
    }

    /// Buffer to stream
    pub const fn data(&self) -> &'static [u8] {
        self.data
    }

    /// Byte count
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// True when there is nothing to stream
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Two transfers are equal when they reference the same bytes, not merely
/// equal contents.
impl PartialEq for PendingTransfer {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.data, other.data)
    }
}

impl Eq for PendingTransfer {}

impl fmt::Debug for PendingTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingTransfer")
            .field("addr", &self.data.as_ptr())
            .field("len", &self.data.len())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PendingTransfer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "PendingTransfer({} bytes)", self.data.len());
    }
}

/// One region fill: where to draw and what to send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FillRequest {
    /// Target column/row window
    pub window: Window,
    /// Pixel data for the window
    pub transfer: PendingTransfer,
}

impl FillRequest {
    /// Create a fill request
    pub const fn new(window: Window, data: &'static [u8]) -> Self {
        Self {
            window,
            transfer: PendingTransfer::new(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIRST: [u8; 4] = [1, 2, 3, 4];
    static SECOND: [u8; 4] = [1, 2, 3, 4];

    #[test]
    fn test_transfer_identity() {
        let a = PendingTransfer::new(&FIRST);
        let b = PendingTransfer::new(&SECOND);

        assert_eq!(a, PendingTransfer::new(&FIRST));
        // Same contents, different buffer
        assert_ne!(a, b);
        // Same buffer, different length
        assert_ne!(a, PendingTransfer::new(&FIRST[..2]));
    }

    #[test]
    fn test_empty_transfer() {
        let empty = PendingTransfer::new(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }
}
