//! Frame data encoding for `Draw/SendHttpGif`.
//!
//! Payload format:
//! - one byte per colour channel, `R G B` per pixel
//! - pixels in row-major order (pixel `k` is `x + y * width`)
//! - the whole byte sequence encoded as standard base64 with padding
//!
//! Channel values are held widened by callers. They are narrowed to a byte by
//! truncation, so a value reaches the device as `value mod 256` (two's
//! complement): `256` is sent as `0` and `-1` as `255`. This wraparound is part
//! of the wire contract.

use alloc::string::String;
use alloc::vec::Vec;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ProtocolError;

/// Number of bytes per pixel in the payload
pub const BYTES_PER_PIXEL: usize = 3;

/// Narrow a single channel value to its wire byte
#[inline]
pub const fn narrow_channel(value: i32) -> u8 {
    value as u8
}

/// Narrow widened channel values to wire bytes, preserving order
pub fn narrow(values: &[i32]) -> Vec<u8> {
    values.iter().map(|&value| narrow_channel(value)).collect()
}

/// Encode widened channel values as a `PicData` string
pub fn encode(values: &[i32]) -> String {
    STANDARD.encode(narrow(values))
}

/// Decode a `PicData` string back into wire bytes
pub fn decode(data: &str) -> Result<Vec<u8>, ProtocolError> {
    STANDARD
        .decode(data)
        .map_err(|_| ProtocolError::InvalidBase64)
}
