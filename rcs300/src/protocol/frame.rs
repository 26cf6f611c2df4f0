// rcs300/src/protocol/frame.rs

use crate::constants::{
    FRAME_HEADER_LEN, FRAME_MESSAGE_TYPE, FRAME_MIN_LEN, FRAME_SLOT, FRAME_TRAILER_LEN,
};
use crate::{Error, Result};

/// Outer command frame exchanged over the bulk endpoints.
/// Format: [Type(1)=0x6B] [Len(4, LE)] [Slot(1)] [Seq(1)] [Reserved(3)] [Payload(n)]
/// Responses append two trailing status bytes after the payload.
pub struct Frame;

/// A decoded response frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    /// Bytes between the header and the trailer
    pub payload: Vec<u8>,
    /// Slot number, always 0 on this reader
    pub slot: u8,
    /// Echo of the request sequence number
    pub sequence: u8,
    /// Two trailing status bytes
    pub trailer: [u8; 2],
}

impl Frame {
    /// Encode a payload into a full outer frame
    pub fn encode(payload: &[u8], sequence: u8) -> Result<Vec<u8>> {
        let len = u32::try_from(payload.len()).map_err(|_| Error::CommandTooLong {
            max: u32::MAX as usize,
            actual: payload.len(),
        })?;

        let mut out = Vec::with_capacity(FRAME_HEADER_LEN + payload.len());
        out.push(FRAME_MESSAGE_TYPE);
        out.extend_from_slice(&len.to_le_bytes());
        out.push(FRAME_SLOT);
        out.push(sequence);
        out.extend_from_slice(&[0x00, 0x00, 0x00]);
        out.extend_from_slice(payload);
        Ok(out)
    }

    /// Decode a raw response frame. The length field is not consulted; the
    /// payload is everything between the header and the 2-byte trailer.
    pub fn decode(raw: &[u8]) -> Result<ResponseFrame> {
        if raw.len() < FRAME_MIN_LEN {
            return Err(Error::InvalidLength {
                expected: FRAME_MIN_LEN,
                actual: raw.len(),
            });
        }

        let end = raw.len() - FRAME_TRAILER_LEN;
        Ok(ResponseFrame {
            payload: raw[FRAME_HEADER_LEN..end].to_vec(),
            slot: raw[5],
            sequence: raw[6],
            trailer: [raw[end], raw[end + 1]],
        })
    }
}
