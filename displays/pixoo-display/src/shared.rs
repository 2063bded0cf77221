//! Locked display access
//!
//! `Display` has no internal locking. `SharedDisplay` wraps one in a mutex so
//! several threads can draw and push: each call holds the lock for its whole
//! duration, and `with` holds it across a group of calls.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::display::Display;
use crate::error::DisplayError;
use crate::transport::Transport;

/// A `Display` behind a mutex
pub struct SharedDisplay<T> {
    inner: Mutex<Display<T>>,
}

impl<T: Transport> SharedDisplay<T> {
    /// Wrap a display
    pub fn new(display: Display<T>) -> Self {
        Self {
            inner: Mutex::new(display),
        }
    }

    /// Unwrap the display
    pub fn into_inner(self) -> Display<T> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A panic mid-draw can only leave a partly drawn frame; the buffer length
    // never changes, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Display<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access, e.g. to draw and push one frame
    pub fn with<R>(&self, f: impl FnOnce(&mut Display<T>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Id the next push will use
    pub fn frame_id(&self) -> u32 {
        self.lock().frame_id()
    }

    /// Side length in pixels
    pub fn size(&self) -> usize {
        self.lock().size()
    }

    /// Number of pixels on the display
    pub fn pixel_count(&self) -> usize {
        self.lock().pixel_count()
    }

    /// See [`Display::index`]
    pub fn index(&self, x: usize, y: usize) -> Result<usize, DisplayError> {
        self.lock().index(x, y)
    }

    /// Read pixel `(x, y)`
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<[i32; 3], DisplayError> {
        self.lock().get_pixel(x, y)
    }

    /// See [`Display::set_pixel`]
    pub fn set_pixel(
        &self,
        x: usize,
        y: usize,
        r: i32,
        g: i32,
        b: i32,
    ) -> Result<(), DisplayError> {
        self.lock().set_pixel(x, y, r, g, b)
    }

    /// See [`Display::fill`]
    pub fn fill(&self, r: i32, g: i32, b: i32) {
        self.lock().fill(r, g, b);
    }

    /// See [`Display::clear`]
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// See [`Display::draw_character`]
    pub fn draw_character(
        &self,
        c: char,
        x: usize,
        y: usize,
        r: i32,
        g: i32,
        b: i32,
    ) -> Result<(), DisplayError> {
        self.lock().draw_character(c, x, y, r, g, b)
    }

    /// See [`Display::draw_text`]
    pub fn draw_text(
        &self,
        text: &str,
        x: usize,
        y: usize,
        r: i32,
        g: i32,
        b: i32,
    ) -> Result<(), DisplayError> {
        self.lock().draw_text(text, x, y, r, g, b)
    }

    /// See [`Display::push`]
    pub fn push(&self) -> Result<(), DisplayError> {
        self.lock().push()
    }

    /// See [`Display::set_brightness`]
    pub fn set_brightness(&self, level: u8) -> Result<(), DisplayError> {
        self.lock().set_brightness(level)
    }

    /// See [`Display::set_power`]
    pub fn set_power(&self, on: bool) -> Result<(), DisplayError> {
        self.lock().set_power(on)
    }

    /// See [`Display::turn_on`]
    pub fn turn_on(&self) -> Result<(), DisplayError> {
        self.lock().turn_on()
    }

    /// See [`Display::turn_off`]
    pub fn turn_off(&self) -> Result<(), DisplayError> {
        self.lock().turn_off()
    }

    /// See [`Display::reset`]
    pub fn reset(&self) -> Result<(), DisplayError> {
        self.lock().reset()
    }
}
