// rcs300/src/protocol/commands/mod.rs

/// Session control and protocol switch.
pub mod control;
/// FeliCa transceive envelope and APDU header.
pub mod felica;
/// FeliCa polling request.
pub mod polling;
/// Communicate-through-EX envelope.
pub mod through;

pub use control::{
    encode_end_transparent, encode_rf_off, encode_rf_on, encode_session,
    encode_start_transparent, encode_switch_protocol,
};
pub use felica::{encode_apdu_header, encode_felica_envelope};
pub use polling::encode_polling;
pub use through::encode_through;

use crate::Result;
use crate::types::Protocol;

/// Reader-level command carried as the payload of one outer frame.
/// Per-command encoders live in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Enter transparent mode
    StartTransparent,
    /// Leave transparent mode
    EndTransparent,
    /// RF field on
    RfOn,
    /// RF field off
    RfOff,
    /// Select the radio protocol
    SwitchProtocol(Protocol),
    /// Raw bytes for the selected card, wrapped in communicate-through-EX
    CommunicateThrough(Vec<u8>),
}

impl Command {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartTransparent => "start-transparent",
            Self::EndTransparent => "end-transparent",
            Self::RfOn => "rf-on",
            Self::RfOff => "rf-off",
            Self::SwitchProtocol(_) => "switch-protocol",
            Self::CommunicateThrough(_) => "communicate-through-ex",
        }
    }

    /// Encode the command into the outer frame payload.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::StartTransparent => Ok(encode_start_transparent().to_vec()),
            Self::EndTransparent => Ok(encode_end_transparent().to_vec()),
            Self::RfOn => Ok(encode_rf_on().to_vec()),
            Self::RfOff => Ok(encode_rf_off().to_vec()),
            Self::SwitchProtocol(p) => Ok(encode_switch_protocol(*p).to_vec()),
            Self::CommunicateThrough(inner) => encode_through(inner),
        }
    }
}
