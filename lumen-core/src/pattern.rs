//! Stripe test pattern
//!
//! Paints the whole panel one horizontal band at a time, alternating
//! between two solid colours on successive frames. Each band is one fill
//! request, so a frame exercises the full CASET/RASET/RAMWR path
//! `height / band_rows` times.

use crate::config::{PanelConfig, PatternConfig};
use crate::window::Window;

/// Bytes per RGB565 pixel
pub const BYTES_PER_PIXEL: usize = 2;

/// Pure red, RGB565 as sent on the wire
pub const RED: [u8; 2] = [0x00, 0xF8];

/// Pure blue, RGB565 as sent on the wire
pub const BLUE: [u8; 2] = [0x1F, 0x00];

/// Fill `buf` with repeated copies of `pixel`
///
/// A trailing partial pixel is left untouched.
pub fn fill_color(buf: &mut [u8], pixel: [u8; BYTES_PER_PIXEL]) {
    for chunk in buf.chunks_exact_mut(BYTES_PER_PIXEL) {
        chunk.copy_from_slice(&pixel);
    }
}

/// Colour of frame number `frame`: red first, then blue
pub const fn frame_color(frame: u32) -> [u8; BYTES_PER_PIXEL] {
    if frame % 2 == 0 {
        RED
    } else {
        BLUE
    }
}

/// Byte size of the buffer needed for one full band
pub const fn band_bytes(panel: &PanelConfig, pattern: &PatternConfig) -> usize {
    panel.width as usize * pattern.band_rows as usize * BYTES_PER_PIXEL
}

/// One band of the pattern, inclusive pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Band {
    pub start_x: u16,
    pub end_x: u16,
    pub start_y: u16,
    pub end_y: u16,
}

impl Band {
    /// Encoded address window for this band
    pub const fn window(&self) -> Window {
        Window::new(self.start_x, self.end_x, self.start_y, self.end_y)
    }

    /// Number of bytes of pixel data the band takes
    pub const fn byte_len(&self) -> usize {
        self.window().pixel_count() as usize * BYTES_PER_PIXEL
    }
}

/// Iterator over the bands of one frame, top to bottom
///
/// The last band is clipped to the panel when the height is not a
/// multiple of the band height.
#[derive(Debug, Clone)]
pub struct Stripes {
    width: u16,
    height: u16,
    band_rows: u16,
    next_row: u32,
}

impl Stripes {
    pub fn new(panel: &PanelConfig, pattern: &PatternConfig) -> Self {
        Self {
            width: panel.width,
            height: panel.height,
            band_rows: pattern.band_rows.max(1),
            next_row: 0,
        }
    }
}

impl Iterator for Stripes {
    type Item = Band;

    fn next(&mut self) -> Option<Band> {
        if self.width == 0 || self.next_row >= self.height as u32 {
            return None;
        }

        let start_y = self.next_row;
        let end_y = (start_y + self.band_rows as u32 - 1).min(self.height as u32 - 1);
        self.next_row = end_y + 1;

        Some(Band {
            start_x: 0,
            end_x: self.width - 1,
            start_y: start_y as u16,
            end_y: end_y as u16,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.height as u32).saturating_sub(self.next_row);
        let bands = if self.width == 0 {
            0
        } else {
            remaining.div_ceil(self.band_rows as u32) as usize
        };
        (bands, Some(bands))
    }
}

impl ExactSizeIterator for Stripes {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_is_80_bands() {
        let panel = PanelConfig::default();
        let pattern = PatternConfig::default();
        let stripes = Stripes::new(&panel, &pattern);

        assert_eq!(stripes.len(), 80);
        assert_eq!(band_bytes(&panel, &pattern), 1920);

        let bands: std::vec::Vec<Band> = stripes.collect();
        assert_eq!(
            bands[0],
            Band {
                start_x: 0,
                end_x: 239,
                start_y: 0,
                end_y: 3
            }
        );
        assert_eq!(bands[79].start_y, 316);
        assert_eq!(bands[79].end_y, 319);
        assert!(bands.iter().all(|b| b.byte_len() == 1920));
    }

    #[test]
    fn test_last_band_clipped() {
        let panel = PanelConfig {
            width: 10,
            height: 10,
        };
        let pattern = PatternConfig {
            band_rows: 4,
            frame_delay_ms: 0,
        };
        let bands: std::vec::Vec<Band> = Stripes::new(&panel, &pattern).collect();

        assert_eq!(bands.len(), 3);
        assert_eq!((bands[2].start_y, bands[2].end_y), (8, 9));
        assert_eq!(bands[2].byte_len(), 40);
    }

    #[test]
    fn test_band_window_encoding() {
        let band = Band {
            start_x: 0,
            end_x: 239,
            start_y: 4,
            end_y: 7,
        };
        let window = band.window();
        assert_eq!(window.column(), &[0x00, 0x00, 0x00, 0xEF]);
        assert_eq!(window.row(), &[0x00, 0x04, 0x00, 0x07]);
    }

    #[test]
    fn test_fill_color() {
        let mut buf = [0u8; 1920];
        fill_color(&mut buf, RED);
        assert!(buf.chunks(2).all(|px| px == RED));

        fill_color(&mut buf, BLUE);
        for (i, byte) in buf.iter().enumerate() {
            assert_eq!(*byte, if i % 2 == 0 { 0x1F } else { 0x00 });
        }

        // Odd length: trailing byte untouched
        let mut odd = [0xAAu8; 5];
        fill_color(&mut odd, BLUE);
        assert_eq!(odd, [0x1F, 0x00, 0x1F, 0x00, 0xAA]);
    }

    #[test]
    fn test_frames_alternate() {
        assert_eq!(frame_color(0), RED);
        assert_eq!(frame_color(1), BLUE);
        assert_eq!(frame_color(2), RED);
    }
}
