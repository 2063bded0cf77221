//! Frame buffer and rendering for Pixoo pixel-matrix displays
//!
//! This crate provides:
//! - `FrameBuffer`, the RGB buffer mirroring the device's square matrix
//! - A built-in 3x5 bitmap font and glyph rendering on top of pixel writes
//! - `Display`, which owns a buffer and pushes it to the device as a frame
//! - `Transport` trait for the request channel to the device
//! - `SharedDisplay` for access from more than one thread
//!
//! # Architecture
//!
//! Drawing calls only touch the in-memory buffer. Nothing reaches the device
//! until `Display::push`, which encodes the whole buffer into a
//! `Draw/SendHttpGif` command and hands it to the transport. Each push carries
//! a fresh frame id.
//!
//! ```text
//! set_pixel / fill / draw_text ──► FrameBuffer ──push──► Command ──► Transport
//! ```

pub mod display;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod shared;
pub mod transport;

// Re-export key types
pub use display::Display;
pub use error::DisplayError;
pub use font::Glyph;
pub use framebuffer::{FrameBuffer, MAX_SIZE};
pub use shared::SharedDisplay;
pub use transport::{Transport, TransportError};

pub use pixoo_protocol::Command;
