#[path = "../common/mod.rs"]
mod common;

use rcs300::protocol::codec::{decode_through_frame, encode_command_frame};
use rcs300::protocol::{Command, Frame, SequenceCounter};

#[test]
fn command_frames_carry_length_and_sequence() {
    let mut seq = SequenceCounter::default();
    let a = encode_command_frame(&Command::StartTransparent, seq.advance()).unwrap();
    let b = encode_command_frame(&Command::CommunicateThrough(vec![0; 20]), seq.advance()).unwrap();

    assert_eq!(&a[..7], &[0x6B, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(&b[..7], &[0x6B, 0x1E, 0x00, 0x00, 0x00, 0x00, 0x01]);
    assert_eq!(b.len(), 10 + 30);
}

#[test]
fn captured_polling_reply_decodes() {
    let raw = common::fixtures::polling_frame(7);
    let frame = Frame::decode(&raw).unwrap();
    assert_eq!(frame.sequence, 7);
    assert_eq!(frame.slot, 0);
    assert_eq!(frame.payload.len(), 31);
    assert_eq!(frame.trailer, [0x90, 0x00]);

    let resp = decode_through_frame(&raw).unwrap();
    let tlv = resp.data().unwrap();
    assert_eq!(tlv.len(), 2);
    assert_eq!(tlv.get(0x96), Some(&[0x00, 0x00][..]));
    assert_eq!(tlv.get_hex("97").map(<[u8]>::len), Some(20));
}

#[test]
fn short_frame_is_rejected() {
    let err = Frame::decode(&[0x83; 11]).unwrap_err();
    assert!(err.is_transport());
}
