//! Frame buffer
//!
//! Flat RGB buffer for a square pixel matrix. Pixel `(x, y)` is pixel index
//! `x + y * size` and occupies three consecutive values, red, green and blue.
//!
//! Channel values are stored as `i32` and written without clamping. They are
//! narrowed to bytes (mod 256) only when the frame is encoded, see
//! [`pixoo_protocol::payload`].

use pixoo_protocol::payload::{self, BYTES_PER_PIXEL};

use crate::error::DisplayError;

/// Largest supported side length in pixels
pub const MAX_SIZE: usize = 256;

/// RGB frame buffer for a `size`×`size` display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Side length in pixels
    size: usize,
    /// `3 * size * size` channel values
    values: Vec<i32>,
}

impl FrameBuffer {
    /// Create a zeroed (black) buffer
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(
            size <= MAX_SIZE,
            "display size {size} exceeds maximum of {MAX_SIZE}"
        );
        Self {
            size,
            values: vec![0; BYTES_PER_PIXEL * size * size],
        }
    }

    /// Side length in pixels
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of pixels
    pub const fn pixel_count(&self) -> usize {
        self.size * self.size
    }

    /// Whether `(x, y)` lies on the display
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Offset of the first channel of pixel `(x, y)`
    pub fn index(&self, x: usize, y: usize) -> Result<usize, DisplayError> {
        if !self.contains(x, y) {
            return Err(DisplayError::OutOfBounds { x, y });
        }
        Ok((x + y * self.size) * BYTES_PER_PIXEL)
    }

    /// Set pixel `(x, y)` to `(r, g, b)`
    ///
    /// Values are stored as given; anything outside 0-255 wraps when encoded.
    pub fn set_pixel(
        &mut self,
        x: usize,
        y: usize,
        r: i32,
        g: i32,
        b: i32,
    ) -> Result<(), DisplayError> {
        let index = self.index(x, y)?;
        self.values[index..index + BYTES_PER_PIXEL].copy_from_slice(&[r, g, b]);
        Ok(())
    }

    /// Read pixel `(x, y)` back as stored
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<[i32; 3], DisplayError> {
        let index = self.index(x, y)?;
        Ok([
            self.values[index],
            self.values[index + 1],
            self.values[index + 2],
        ])
    }

    /// Set every pixel to `(r, g, b)`
    pub fn fill(&mut self, r: i32, g: i32, b: i32) {
        for pixel in self.values.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&[r, g, b]);
        }
    }

    /// Set every pixel to black
    pub fn clear(&mut self) {
        self.values.fill(0);
    }

    /// Raw channel values in buffer order
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Channel values narrowed to wire bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        payload::narrow(&self.values)
    }

    /// Base64 `PicData` for the current contents
    pub fn encode(&self) -> String {
        payload::encode(&self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let fb = FrameBuffer::new(4);
        assert_eq!(fb.values().len(), 48);
        assert!(fb.values().iter().all(|&v| v == 0));
        assert_eq!(fb.pixel_count(), 16);
    }

    #[test]
    fn test_max_size_buffer_length() {
        let fb = FrameBuffer::new(MAX_SIZE);
        assert_eq!(fb.values().len(), 3 * MAX_SIZE * MAX_SIZE);
        assert_eq!(fb.index(MAX_SIZE - 1, MAX_SIZE - 1), Ok(fb.values().len() - 3));
    }

    #[test]
    #[should_panic(expected = "exceeds maximum")]
    fn test_oversized_buffer_rejected() {
        FrameBuffer::new(usize::MAX);
    }

    #[test]
    fn test_index_row_major() {
        let fb = FrameBuffer::new(16);
        assert_eq!(fb.index(0, 0), Ok(0));
        assert_eq!(fb.index(1, 0), Ok(3));
        assert_eq!(fb.index(0, 1), Ok(48));
        assert_eq!(fb.index(15, 15), Ok(765));
    }

    #[test]
    fn test_index_out_of_bounds() {
        let fb = FrameBuffer::new(16);
        assert_eq!(
            fb.index(16, 0),
            Err(DisplayError::OutOfBounds { x: 16, y: 0 })
        );
        assert_eq!(
            fb.index(0, 16),
            Err(DisplayError::OutOfBounds { x: 0, y: 16 })
        );
    }

    #[test]
    fn test_set_pixel() {
        let mut fb = FrameBuffer::new(2);
        fb.set_pixel(1, 1, 255, 0, 0).unwrap();
        assert_eq!(fb.values(), &[0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 0, 0]);
        assert_eq!(fb.get_pixel(1, 1), Ok([255, 0, 0]));
    }

    #[test]
    fn test_set_pixel_out_of_bounds_no_write() {
        let mut fb = FrameBuffer::new(2);
        let before = fb.clone();
        assert_eq!(
            fb.set_pixel(2, 0, 1, 2, 3),
            Err(DisplayError::OutOfBounds { x: 2, y: 0 })
        );
        assert_eq!(fb, before);
    }

    #[test]
    fn test_set_pixel_keeps_wide_values() {
        let mut fb = FrameBuffer::new(1);
        fb.set_pixel(0, 0, 256, -1, 1000).unwrap();
        assert_eq!(fb.get_pixel(0, 0), Ok([256, -1, 1000]));
        assert_eq!(fb.to_bytes(), vec![0, 255, 232]);
    }

    #[test]
    fn test_fill_and_clear() {
        let mut fb = FrameBuffer::new(3);
        fb.fill(10, 20, 30);
        for pixel in fb.values().chunks(3) {
            assert_eq!(pixel, &[10, 20, 30]);
        }

        fb.clear();
        assert!(fb.values().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_encode() {
        let mut fb = FrameBuffer::new(2);
        fb.set_pixel(1, 1, 255, 0, 0).unwrap();
        assert_eq!(fb.encode(), "AAAAAAAAAAAA/wAA");
    }
}
