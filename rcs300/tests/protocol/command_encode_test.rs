use rcs300::protocol::commands::*;
use rcs300::{Protocol, SystemCode};

#[test]
fn session_commands_literal() {
    assert_eq!(encode_start_transparent(), [0xFF, 0x50, 0x00, 0x00, 0x02, 0x81, 0x00, 0x00]);
    assert_eq!(encode_end_transparent(), [0xFF, 0x50, 0x00, 0x00, 0x02, 0x82, 0x00, 0x00]);
    assert_eq!(encode_rf_off(), [0xFF, 0x50, 0x00, 0x00, 0x02, 0x83, 0x00, 0x00]);
    assert_eq!(encode_rf_on(), [0xFF, 0x50, 0x00, 0x00, 0x02, 0x84, 0x00, 0x00]);
}

#[test]
fn switch_protocol_type_v() {
    assert_eq!(
        encode_switch_protocol(Protocol::Iso15693),
        [0xFF, 0x50, 0x00, 0x02, 0x04, 0x8F, 0x02, 0x02, 0x03, 0x00]
    );
}

#[test]
fn through_envelope_is_ten_plus_n() {
    for n in [0usize, 1, 16, 255] {
        let cmd = vec![0xA5; n];
        let out = encode_through(&cmd).unwrap();
        assert_eq!(out.len(), 10 + n);
        assert_eq!(out[6] as usize, n);
    }
    assert!(encode_through(&[0u8; 256]).is_err());
}

#[test]
fn felica_envelope_layout() {
    let poll = encode_polling(SystemCode::new(0x12FC), 0x07);
    // request code keeps only its low two bits
    assert_eq!(poll, [0x06, 0x00, 0x12, 0xFC, 0x03, 0x00]);

    let env = encode_felica_envelope(&poll, 10_000).unwrap();
    assert_eq!(&env[..3], &[0x5F, 0x46, 0x04]);
    assert_eq!(&env[3..7], &10_000u32.to_le_bytes());
    assert_eq!(&env[7..11], &[0x95, 0x82, 0x00, 0x06]);
    assert_eq!(&env[11..], &poll);
}

#[test]
fn apdu_header_layout() {
    assert_eq!(
        encode_apdu_header(0x00, 0xCA, 0x01, 0x02),
        [0x0A, 0x02, 0x00, 0xCA, 0x01, 0x02]
    );
}
