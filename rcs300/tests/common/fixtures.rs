// fixtures.rs — captured reader replies and the payloads behind them

use rcs300::types::{Idm, Pmm, SystemCode};

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).expect("fixture hex")
}

pub fn sample_idm() -> Idm {
    Idm::from_bytes([0x01, 0x2e, 0x4c, 0xd4, 0x3a, 0x1b, 0x7c, 0x99])
}

pub fn sample_pmm() -> Pmm {
    Pmm::from_bytes([0x10, 0x0b, 0x4b, 0x42, 0x84, 0x85, 0xd0, 0xff])
}

pub fn sample_system_code() -> SystemCode {
    SystemCode::SUICA
}

/// Reply to a session control command (start/end transparent, RF on/off).
pub fn control_ok_frame(sequence: u8) -> Vec<u8> {
    let mut raw = unhex("83 02000000 00 00 000000 9000 9000");
    raw[6] = sequence;
    raw
}

/// Reply to switch protocol.
pub fn switch_protocol_frame(sequence: u8) -> Vec<u8> {
    let mut raw = unhex("83 07000000 00 00 000000 c003009000 9000 9000");
    raw[6] = sequence;
    raw
}

/// Polling reply: status 90 00, a 0x96 object, then the 0x97 object with
/// length, response code, IDm, PMm and request data 00 03.
pub fn polling_frame(sequence: u8) -> Vec<u8> {
    let mut raw = unhex(
        "83 1f000000 00 00 000000 \
         c0 03 00 90 00 \
         96 02 00 00 \
         97 14 14 01 012e4cd43a1b7c99 100b4b428485d0ff 0003 \
         9000",
    );
    raw[6] = sequence;
    raw
}

/// Polling reply with no card in the field: the reader reports 64 01.
pub fn polling_no_card_frame(sequence: u8) -> Vec<u8> {
    let mut raw = unhex("83 05000000 00 00 000000 c003006401 9000");
    raw[6] = sequence;
    raw
}

/// Polling reply whose 0x97 object is too short to hold an IDm and PMm.
pub fn polling_short_frame(sequence: u8) -> Vec<u8> {
    let mut raw = unhex("83 09000000 00 00 000000 c003009000 97 02 01a7 9000");
    raw[6] = sequence;
    raw
}

/// Card reply to a 4-byte APDU header: response data 6a 82 (file not found).
pub fn apdu_reply_frame(sequence: u8) -> Vec<u8> {
    let mut raw = unhex("83 09000000 00 00 000000 c003009000 97 02 6a82 9000");
    raw[6] = sequence;
    raw
}

/// An accepted reply whose TLV area ends in the middle of a value.
pub fn truncated_tlv_frame() -> Vec<u8> {
    unhex("83 09000000 00 00 000000 c003009000 97 05 0102 9000")
}
