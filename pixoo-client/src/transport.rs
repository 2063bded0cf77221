//! HTTP transport
//!
//! Sends commands to the device as JSON bodies POSTed to
//! `http://<address>/post`. The device answers `{"error_code": 0}` on
//! success.

use std::time::Duration;

use log::{debug, trace, warn};
use pixoo_display::{Transport, TransportError};
use pixoo_protocol::Command;
use serde_json::Value;

/// Blocking HTTP transport with a per-request timeout
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    /// Create a transport whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }
}

/// Command endpoint for a device
pub fn endpoint(address: &str) -> String {
    format!("http://{address}/post")
}

impl Transport for HttpTransport {
    fn send(&mut self, address: &str, command: &Command) -> Result<(), TransportError> {
        let body = command.to_json()?;
        let url = endpoint(address);
        debug!("POST {} {} ({} bytes)", url, command.name(), body.len());

        let response = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_bytes(&body)
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => {
                    warn!("{} rejected {}: HTTP {}", url, command.name(), code);
                    TransportError::Status(code)
                }
                ureq::Error::Transport(e) => {
                    warn!("Request to {} failed: {}", url, e);
                    TransportError::Connection
                }
            })?;

        let text = response.into_string().map_err(|e| {
            warn!("Failed to read response from {}: {}", url, e);
            TransportError::Connection
        })?;
        trace!("Response: {}", text);

        check_response(&text).inspect_err(|e| {
            warn!("{} failed on device: {}", command.name(), e);
        })
    }
}

/// Check a response body for a device-reported error
///
/// Bodies that are not JSON, or carry no `error_code`, count as success.
pub fn check_response(body: &str) -> Result<(), TransportError> {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return Ok(());
    };

    match value.get("error_code").and_then(Value::as_i64) {
        None | Some(0) => Ok(()),
        Some(code) => Err(TransportError::Device(code)),
    }
}
