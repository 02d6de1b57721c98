//! Column/row address window
//!
//! The controller's CASET and RASET commands each take four bytes: the
//! start and end address of the range, big-endian, high byte first. A
//! `Window` holds both ranges already encoded, so the worker can send them
//! without touching the coordinates again.

/// Errors building a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowError {
    /// Column start lies after column end
    InvertedColumns,
    /// Row start lies after row end
    InvertedRows,
}

/// Encode an inclusive address range as CASET/RASET argument bytes
pub const fn encode_range(start: u16, end: u16) -> [u8; 4] {
    let start = start.to_be_bytes();
    let end = end.to_be_bytes();
    [start[0], start[1], end[0], end[1]]
}

/// Decode CASET/RASET argument bytes back into `(start, end)`
pub const fn decode_range(bytes: &[u8; 4]) -> (u16, u16) {
    (
        u16::from_be_bytes([bytes[0], bytes[1]]),
        u16::from_be_bytes([bytes[2], bytes[3]]),
    )
}

/// Encoded pixel-address window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    column: [u8; 4],
    row: [u8; 4],
}

impl Window {
    /// Encode a window from inclusive pixel coordinates
    ///
    /// No ordering check is made; see [`Window::try_new`].
    pub const fn new(start_x: u16, end_x: u16, start_y: u16, end_y: u16) -> Self {
        Self {
            column: encode_range(start_x, end_x),
            row: encode_range(start_y, end_y),
        }
    }

    /// Encode a window, rejecting ranges whose start lies after their end
    pub const fn try_new(
        start_x: u16,
        end_x: u16,
        start_y: u16,
        end_y: u16,
    ) -> Result<Self, WindowError> {
        if start_x > end_x {
            return Err(WindowError::InvertedColumns);
        }
        if start_y > end_y {
            return Err(WindowError::InvertedRows);
        }
        Ok(Self::new(start_x, end_x, start_y, end_y))
    }

    /// CASET argument bytes
    pub const fn column(&self) -> &[u8; 4] {
        &self.column
    }

    /// RASET argument bytes
    pub const fn row(&self) -> &[u8; 4] {
        &self.row
    }

    /// Inclusive column range
    pub const fn columns(&self) -> (u16, u16) {
        decode_range(&self.column)
    }

    /// Inclusive row range
    pub const fn rows(&self) -> (u16, u16) {
        decode_range(&self.row)
    }

    /// Number of pixels covered by the window
    pub const fn pixel_count(&self) -> u32 {
        let (x0, x1) = self.columns();
        let (y0, y1) = self.rows();
        (x1.saturating_sub(x0) as u32 + 1) * (y1.saturating_sub(y0) as u32 + 1)
    }
}
