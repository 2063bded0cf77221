//! Command descriptors for the Pixoo HTTP protocol
//!
//! Commands are divided into two categories:
//! - Channel: device state (brightness, screen power)
//! - Draw: frame upload and frame id bookkeeping

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

// Command names
pub const CMD_SET_BRIGHTNESS: &str = "Channel/SetBrightness";
pub const CMD_ON_OFF_SCREEN: &str = "Channel/OnOffScreen";
pub const CMD_RESET_GIF_ID: &str = "Draw/ResetHttpGifId";
pub const CMD_SEND_GIF: &str = "Draw/SendHttpGif";

/// Highest brightness level accepted by the device
pub const MAX_BRIGHTNESS: u8 = 100;

/// Display duration of a single uploaded frame, in milliseconds
pub const PIC_SPEED_MS: u32 = 1000;

/// Commands sent from the client to the device
///
/// Serializes to the flat JSON object the device expects, with the variant
/// name in the `Command` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Command")]
pub enum Command {
    /// Set screen brightness (0-100)
    #[serde(rename = "Channel/SetBrightness")]
    SetBrightness {
        #[serde(rename = "Brightness")]
        brightness: u8,
    },
    /// Turn the screen on (1) or off (0)
    #[serde(rename = "Channel/OnOffScreen")]
    OnOffScreen {
        #[serde(rename = "OnOff")]
        on_off: u8,
    },
    /// Reset the device's frame id tracking and drop queued frames
    #[serde(rename = "Draw/ResetHttpGifId")]
    ResetHttpGifId,
    /// Upload one full frame
    #[serde(rename = "Draw/SendHttpGif")]
    SendHttpGif {
        /// Frames in the sequence (always 1)
        #[serde(rename = "PicNum")]
        pic_num: u8,
        /// Display side length in pixels
        #[serde(rename = "PicWidth")]
        pic_width: usize,
        /// Index of this frame in the sequence (always 0)
        #[serde(rename = "PicOffset")]
        pic_offset: u32,
        /// Frame identifier
        #[serde(rename = "PicID")]
        pic_id: u32,
        /// Per-frame display duration in milliseconds
        #[serde(rename = "PicSpeed")]
        pic_speed: u32,
        /// Base64 frame data, see [`crate::payload`]
        #[serde(rename = "PicData")]
        pic_data: String,
    },
}

impl Command {
    /// Brightness command, clamping `level` to [`MAX_BRIGHTNESS`]
    pub fn brightness(level: u8) -> Self {
        Command::SetBrightness {
            brightness: level.min(MAX_BRIGHTNESS),
        }
    }

    /// Screen power command
    pub fn power(on: bool) -> Self {
        Command::OnOffScreen {
            on_off: u8::from(on),
        }
    }

    /// Frame id reset command
    pub fn reset_gif_id() -> Self {
        Command::ResetHttpGifId
    }

    /// Single-frame upload of `width`×`width` pixels
    pub fn send_gif(width: usize, pic_id: u32, pic_data: String) -> Self {
        Command::SendHttpGif {
            pic_num: 1,
            pic_width: width,
            pic_offset: 0,
            pic_id,
            pic_speed: PIC_SPEED_MS,
            pic_data,
        }
    }

    /// Value of the `Command` field
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetBrightness { .. } => CMD_SET_BRIGHTNESS,
            Command::OnOffScreen { .. } => CMD_ON_OFF_SCREEN,
            Command::ResetHttpGifId => CMD_RESET_GIF_ID,
            Command::SendHttpGif { .. } => CMD_SEND_GIF,
        }
    }

    /// Serialize to the JSON request body
    pub fn to_json(&self) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(self).map_err(|_| ProtocolError::Serialize)
    }

    /// Parse a JSON request body (for testing or simulation)
    pub fn from_json(body: &[u8]) -> Result<Self, ProtocolError> {
        serde_json::from_slice(body).map_err(|_| ProtocolError::Deserialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn to_value(command: &Command) -> Value {
        serde_json::from_slice(&command.to_json().unwrap()).unwrap()
    }

    #[test]
    fn test_brightness_fields() {
        let value = to_value(&Command::brightness(42));
        assert_eq!(value["Command"], "Channel/SetBrightness");
        assert_eq!(value["Brightness"], 42);
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_brightness_clamped() {
        assert_eq!(
            Command::brightness(250),
            Command::SetBrightness { brightness: 100 }
        );
    }

    #[test]
    fn test_power_fields() {
        let on = to_value(&Command::power(true));
        assert_eq!(on["Command"], "Channel/OnOffScreen");
        assert_eq!(on["OnOff"], 1);

        let off = to_value(&Command::power(false));
        assert_eq!(off["OnOff"], 0);
    }

    #[test]
    fn test_reset_has_only_command() {
        let value = to_value(&Command::reset_gif_id());
        assert_eq!(value["Command"], "Draw/ResetHttpGifId");
        assert_eq!(value.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_send_gif_fields() {
        let command = Command::send_gif(64, 7, String::from("AAAA"));
        let value = to_value(&command);
        assert_eq!(value["Command"], "Draw/SendHttpGif");
        assert_eq!(value["PicNum"], 1);
        assert_eq!(value["PicWidth"], 64);
        assert_eq!(value["PicOffset"], 0);
        assert_eq!(value["PicID"], 7);
        assert_eq!(value["PicSpeed"], 1000);
        assert_eq!(value["PicData"], "AAAA");
        assert_eq!(value.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_name_matches_serialized_field() {
        let commands = [
            Command::brightness(10),
            Command::power(true),
            Command::reset_gif_id(),
            Command::send_gif(16, 1, String::new()),
        ];

        for command in commands {
            assert_eq!(to_value(&command)["Command"], command.name());
        }
    }

    #[test]
    fn test_from_json() {
        let body = br#"{"Command":"Channel/OnOffScreen","OnOff":1}"#;
        assert_eq!(Command::from_json(body).unwrap(), Command::power(true));
        assert_eq!(
            Command::from_json(br#"{"Command":"Nope"}"#),
            Err(ProtocolError::Deserialize)
        );
    }
}
