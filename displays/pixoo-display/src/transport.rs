//! Transport trait
//!
//! Defines the interface to the request/response channel that carries
//! commands to the device.

use core::fmt;

use pixoo_protocol::{Command, ProtocolError};

/// Transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Command could not be serialized into a request body
    Encoding(ProtocolError),
    /// Request could not be delivered (connect, I/O or timeout)
    Connection,
    /// Device answered with a non-success HTTP status
    Status(u16),
    /// Device answered with a non-zero `error_code`
    Device(i64),
}

impl From<ProtocolError> for TransportError {
    fn from(e: ProtocolError) -> Self {
        TransportError::Encoding(e)
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoding(e) => write!(f, "encoding failed: {e}"),
            Self::Connection => write!(f, "could not reach device"),
            Self::Status(code) => write!(f, "device returned HTTP status {code}"),
            Self::Device(code) => write!(f, "device reported error code {code}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Transport trait
///
/// Serializes a command and delivers it to the device at `address`,
/// blocking until the device has answered. Implementations own any timeout
/// policy; the caller performs no retries.
pub trait Transport {
    /// Send one command to the device
    fn send(&mut self, address: &str, command: &Command) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, address: &str, command: &Command) -> Result<(), TransportError> {
        (**self).send(address, command)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, address: &str, command: &Command) -> Result<(), TransportError> {
        (**self).send(address, command)
    }
}
