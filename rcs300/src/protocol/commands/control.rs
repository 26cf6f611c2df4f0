// rcs300/src/protocol/commands/control.rs

//! Reader-level session control: transparent session and RF field.
//! Every command is the escape APDU `FF 50 P1 P2 Lc <data object>`.

use crate::constants::{
    END_TRANSPARENT, ESCAPE_CLA, ESCAPE_INS, RF_OFF, RF_ON, SESSION_P1, SESSION_P2,
    START_TRANSPARENT, SWITCH_PROTOCOL_P1, SWITCH_PROTOCOL_P2, SWITCH_PROTOCOL_TAG,
};
use crate::types::Protocol;

/// Encode a session control command: `FF 50 00 00 02 <op> 00 00`.
pub fn encode_session(op: u8) -> [u8; 8] {
    [ESCAPE_CLA, ESCAPE_INS, SESSION_P1, SESSION_P2, 0x02, op, 0x00, 0x00]
}

/// `FF 50 00 00 02 81 00 00`
pub fn encode_start_transparent() -> [u8; 8] {
    encode_session(START_TRANSPARENT)
}

/// `FF 50 00 00 02 82 00 00`
pub fn encode_end_transparent() -> [u8; 8] {
    encode_session(END_TRANSPARENT)
}

/// `FF 50 00 00 02 84 00 00`
pub fn encode_rf_on() -> [u8; 8] {
    encode_session(RF_ON)
}

/// `FF 50 00 00 02 83 00 00`
pub fn encode_rf_off() -> [u8; 8] {
    encode_session(RF_OFF)
}

/// Reader-side (layer, type) pair selecting the radio protocol.
fn protocol_selector(protocol: Protocol) -> [u8; 2] {
    match protocol {
        Protocol::TypeF => [0x03, 0x00],
        Protocol::Iso14443_3A => [0x00, 0x03],
        Protocol::Iso14443_4A => [0x00, 0x04],
        Protocol::Iso14443_4B => [0x01, 0x04],
        Protocol::Iso15693 => [0x02, 0x03],
    }
}

/// Encode a switch-protocol command: `FF 50 00 02 04 8F 02 <a> <b> 00`.
pub fn encode_switch_protocol(protocol: Protocol) -> [u8; 10] {
    let [a, b] = protocol_selector(protocol);
    [
        ESCAPE_CLA,
        ESCAPE_INS,
        SWITCH_PROTOCOL_P1,
        SWITCH_PROTOCOL_P2,
        0x04,
        SWITCH_PROTOCOL_TAG,
        0x02,
        a,
        b,
        0x00,
    ]
}
