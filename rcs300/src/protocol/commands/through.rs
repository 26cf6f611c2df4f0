// rcs300/src/protocol/commands/through.rs

use crate::constants::{ESCAPE_CLA, ESCAPE_INS, THROUGH_P1, THROUGH_P2};
use crate::{Error, Result};

/// Encode a communicate-through-EX request carrying `command` to the
/// selected card.
///
/// Layout: `FF 50 00 01` + extended Lc `00 00 <n>` + command + extended Le
/// `00 00 00`. The short form of Lc means `command` may not exceed 255 bytes.
pub fn encode_through(command: &[u8]) -> Result<Vec<u8>> {
    let len = u8::try_from(command.len()).map_err(|_| Error::CommandTooLong {
        max: u8::MAX as usize,
        actual: command.len(),
    })?;

    let mut buf = Vec::with_capacity(7 + command.len() + 3);
    buf.extend_from_slice(&[ESCAPE_CLA, ESCAPE_INS, THROUGH_P1, THROUGH_P2, 0x00, 0x00]);
    buf.push(len);
    buf.extend_from_slice(command);
    buf.extend_from_slice(&[0x00, 0x00, 0x00]);
    Ok(buf)
}
