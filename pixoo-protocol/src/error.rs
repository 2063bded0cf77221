//! Protocol error type

use core::fmt;

/// Errors that can occur while encoding or decoding protocol data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// A command could not be serialized to JSON
    Serialize,
    /// A request body is not a valid command
    Deserialize,
    /// Frame data is not valid base64
    InvalidBase64,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize => write!(f, "failed to serialize command"),
            Self::Deserialize => write!(f, "request body is not a valid command"),
            Self::InvalidBase64 => write!(f, "frame data is not valid base64"),
        }
    }
}

impl core::error::Error for ProtocolError {}
