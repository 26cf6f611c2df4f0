// rcs300/src/protocol/commands/polling.rs

use crate::constants::FELICA_CMD_POLLING;
use crate::types::SystemCode;

/// Encode a FeliCa Polling request for the transceive envelope.
/// Layout: len(1)=6 + command code(1)=0x00 + system code(2, BE) +
/// request code(1, low 2 bits) + time slot(1)=0
pub fn encode_polling(system_code: SystemCode, request_code: u8) -> [u8; 6] {
    let [hi, lo] = system_code.to_be_bytes();
    [0x06, FELICA_CMD_POLLING, hi, lo, request_code & 0x03, 0x00]
}
