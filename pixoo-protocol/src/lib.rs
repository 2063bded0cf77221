//! Pixoo HTTP Command Protocol
//!
//! This crate defines the commands a client sends to a Pixoo pixel-matrix
//! display and the encoding of frame data carried inside them.
//!
//! # Protocol Overview
//!
//! Every request is a single flat JSON object POSTed to `http://<device>/post`.
//! The `Command` field selects the operation and the remaining fields are its
//! arguments:
//! ```text
//! {"Command":"Draw/SendHttpGif","PicNum":1,"PicWidth":64,"PicOffset":0,
//!  "PicID":7,"PicSpeed":1000,"PicData":"AAAA..."}
//! ```
//!
//! Frame data (`PicData`) is the display's RGB buffer, one byte per channel in
//! row-major pixel order, encoded as standard padded base64.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod command;
pub mod error;
pub mod payload;

pub use command::{Command, PIC_SPEED_MS};
pub use error::ProtocolError;
