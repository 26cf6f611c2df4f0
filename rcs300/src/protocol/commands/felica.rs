// rcs300/src/protocol/commands/felica.rs

//! Transceive envelope used to reach FeliCa and wrapped-APDU commands
//! through communicate-through-EX.

use crate::constants::{APDU_WRAP_PREFIX, FELICA_TIMER_LEN, FELICA_TIMER_TAG, FELICA_TRANSCEIVE_TAG};
use crate::{Error, Result};

/// Wrap a card command: `5F 46 04 <timeout LE u32> 95 82 <len BE u16> <command>`.
pub fn encode_felica_envelope(command: &[u8], timeout_ms: u32) -> Result<Vec<u8>> {
    let len = u16::try_from(command.len()).map_err(|_| Error::CommandTooLong {
        max: u16::MAX as usize,
        actual: command.len(),
    })?;

    let mut buf = Vec::with_capacity(11 + command.len());
    buf.extend_from_slice(&FELICA_TIMER_TAG);
    buf.push(FELICA_TIMER_LEN);
    buf.extend_from_slice(&timeout_ms.to_le_bytes());
    buf.extend_from_slice(&FELICA_TRANSCEIVE_TAG);
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(command);
    Ok(buf)
}

/// Encode a 4-byte APDU header for the transceive envelope: `0A 02 CLA INS P1 P2`.
///
/// Only the header is carried; there is no Lc/data/Le. Commands that need a
/// data field are out of reach of this builder.
pub fn encode_apdu_header(cla: u8, ins: u8, p1: u8, p2: u8) -> [u8; 6] {
    [APDU_WRAP_PREFIX[0], APDU_WRAP_PREFIX[1], cla, ins, p1, p2]
}
