//! Display error type

use core::fmt;

use pixoo_protocol::ProtocolError;

use crate::transport::TransportError;

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Coordinates outside the display
    OutOfBounds { x: usize, y: usize },
    /// No glyph for this character in the built-in font
    UnknownGlyph(char),
    /// Command could not be serialized; nothing was sent
    EncodingFailure(ProtocolError),
    /// Transport could not deliver the command or the device rejected it
    TransmissionFailed(TransportError),
}

impl From<TransportError> for DisplayError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Encoding(e) => DisplayError::EncodingFailure(e),
            e => DisplayError::TransmissionFailed(e),
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { x, y } => write!(f, "pixel ({x}, {y}) is outside the display"),
            Self::UnknownGlyph(c) => write!(f, "no glyph for character {c:?}"),
            Self::EncodingFailure(e) => write!(f, "command encoding failed: {e}"),
            Self::TransmissionFailed(e) => write!(f, "transmission failed: {e}"),
        }
    }
}

impl std::error::Error for DisplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EncodingFailure(e) => Some(e),
            Self::TransmissionFailed(e) => Some(e),
            _ => None,
        }
    }
}
