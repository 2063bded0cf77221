//! Display session
//!
//! A `Display` owns the frame buffer for one device and the transport used to
//! reach it. Drawing is purely in-memory; [`Display::push`] is the only call
//! that uploads pixels.
//!
//! # Frame ids
//!
//! Every push carries a frame id (`PicID`) starting at 1. The id advances
//! before the command is sent and is never rolled back, so a push retried
//! after a transport failure goes out under a new id. The device does not
//! require ids to be gap-free. After `u32::MAX` the id wraps back to 1, so 0
//! is never sent.

use pixoo_protocol::Command;

use crate::error::DisplayError;
use crate::font::{self, Glyph, GLYPH_SPACING};
use crate::framebuffer::FrameBuffer;
use crate::transport::Transport;

/// First frame id of a session
pub const FIRST_FRAME_ID: u32 = 1;

/// Id following `id`, wrapping from `u32::MAX` back to [`FIRST_FRAME_ID`]
const fn next_frame_id(id: u32) -> u32 {
    match id.checked_add(1) {
        Some(next) => next,
        None => FIRST_FRAME_ID,
    }
}

/// Client-side state for one Pixoo device
pub struct Display<T> {
    /// Network location of the device
    address: String,
    /// Current frame
    buffer: FrameBuffer,
    /// Id for the next pushed frame
    frame_id: u32,
    /// Request channel to the device
    transport: T,
}

impl<T: Transport> Display<T> {
    /// Create a display session with a black frame
    ///
    /// - `address`: device host (and optional port), e.g. `192.168.1.50`
    /// - `size`: side length of the matrix in pixels (16, 32 or 64)
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_SIZE`](crate::framebuffer::MAX_SIZE).
    pub fn new(address: impl Into<String>, size: usize, transport: T) -> Self {
        Self {
            address: address.into(),
            buffer: FrameBuffer::new(size),
            frame_id: FIRST_FRAME_ID,
            transport,
        }
    }

    /// Device address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Side length in pixels
    pub fn size(&self) -> usize {
        self.buffer.size()
    }

    /// Number of pixels on the display
    pub fn pixel_count(&self) -> usize {
        self.buffer.pixel_count()
    }

    /// Id the next push will use
    pub fn frame_id(&self) -> u32 {
        self.frame_id
    }

    /// Current frame contents
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Underlying transport (mutable)
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Offset of pixel `(x, y)` in the buffer
    pub fn index(&self, x: usize, y: usize) -> Result<usize, DisplayError> {
        self.buffer.index(x, y)
    }

    /// Set pixel `(x, y)` to `(r, g, b)`
    pub fn set_pixel(
        &mut self,
        x: usize,
        y: usize,
        r: i32,
        g: i32,
        b: i32,
    ) -> Result<(), DisplayError> {
        self.buffer.set_pixel(x, y, r, g, b)
    }

    /// Read pixel `(x, y)`
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<[i32; 3], DisplayError> {
        self.buffer.get_pixel(x, y)
    }

    /// Fill the whole display with `(r, g, b)`
    pub fn fill(&mut self, r: i32, g: i32, b: i32) {
        self.buffer.fill(r, g, b);
    }

    /// Fill the whole display with black
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Draw character `c` with its top-left corner at `(x, y)`
    ///
    /// Only the glyph's lit cells are written; everything under its unlit
    /// cells keeps its colour. Fails without drawing anything if `c` has no
    /// glyph or any lit cell would land off the display.
    pub fn draw_character(
        &mut self,
        c: char,
        x: usize,
        y: usize,
        r: i32,
        g: i32,
        b: i32,
    ) -> Result<(), DisplayError> {
        let glyph = font::glyph(c).ok_or(DisplayError::UnknownGlyph(c))?;
        self.check_glyph(glyph, x, y)?;
        self.blit(glyph, x, y, r, g, b);
        Ok(())
    }

    /// Draw `text` left to right starting at `(x, y)`
    ///
    /// Characters advance by the glyph width plus one pixel of spacing. The
    /// whole string is checked before drawing, so on error the frame is
    /// unchanged.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: usize,
        y: usize,
        r: i32,
        g: i32,
        b: i32,
    ) -> Result<(), DisplayError> {
        let mut placed = Vec::with_capacity(text.len());
        let mut cursor = x;
        for c in text.chars() {
            let glyph = font::glyph(c).ok_or(DisplayError::UnknownGlyph(c))?;
            self.check_glyph(glyph, cursor, y)?;
            placed.push((glyph, cursor));
            cursor = cursor.saturating_add(usize::from(glyph.width() + GLYPH_SPACING));
        }

        for (glyph, gx) in placed {
            self.blit(glyph, gx, y, r, g, b);
        }
        Ok(())
    }

    /// Check that every lit cell of `glyph` at `(x, y)` lands on the display
    fn check_glyph(&self, glyph: Glyph, x: usize, y: usize) -> Result<(), DisplayError> {
        for (dx, dy) in glyph.lit_cells() {
            self.buffer.index(x.saturating_add(dx), y.saturating_add(dy))?;
        }
        Ok(())
    }

    /// Write the lit cells of an already checked glyph
    fn blit(&mut self, glyph: Glyph, x: usize, y: usize, r: i32, g: i32, b: i32) {
        for (dx, dy) in glyph.lit_cells() {
            let written = self.buffer.set_pixel(x + dx, y + dy, r, g, b);
            debug_assert!(written.is_ok(), "glyph cell outside checked area: {written:?}");
        }
    }

    /// Upload the current frame to the device
    ///
    /// The frame id advances even if sending fails.
    pub fn push(&mut self) -> Result<(), DisplayError> {
        let command =
            Command::send_gif(self.buffer.size(), self.frame_id, self.buffer.encode());
        self.frame_id = next_frame_id(self.frame_id);
        self.send(&command)
    }

    /// Set screen brightness (0-100, higher values are clamped)
    pub fn set_brightness(&mut self, level: u8) -> Result<(), DisplayError> {
        self.send(&Command::brightness(level))
    }

    /// Turn the screen on or off
    pub fn set_power(&mut self, on: bool) -> Result<(), DisplayError> {
        self.send(&Command::power(on))
    }

    /// Turn the screen on
    pub fn turn_on(&mut self) -> Result<(), DisplayError> {
        self.set_power(true)
    }

    /// Turn the screen off
    pub fn turn_off(&mut self) -> Result<(), DisplayError> {
        self.set_power(false)
    }

    /// Reset the device's frame tracking, removing any uploaded frames
    ///
    /// The local frame id keeps counting.
    pub fn reset(&mut self) -> Result<(), DisplayError> {
        self.send(&Command::reset_gif_id())
    }

    fn send(&mut self, command: &Command) -> Result<(), DisplayError> {
        self.transport.send(&self.address, command)?;
        Ok(())
    }
}
