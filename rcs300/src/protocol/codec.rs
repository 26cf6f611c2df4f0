// rcs300/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::responses::{ThroughResponse, decode_through};

/// Encode a Command into a full outer frame with the given sequence number.
pub fn encode_command_frame(cmd: &Command, sequence: u8) -> Result<Vec<u8>> {
    let payload = cmd.encode()?;
    Frame::encode(&payload, sequence)
}

/// Decode a raw communicate-through-EX response frame.
pub fn decode_through_frame(raw: &[u8]) -> Result<ThroughResponse> {
    let frame = Frame::decode(raw)?;
    decode_through(&frame.payload)
}
