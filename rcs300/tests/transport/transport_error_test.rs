#[path = "../common/mod.rs"]
mod common;

use rcs300::device::Reader;
use rcs300::transport::mock::MockTransport;
use rcs300::{Direction, Error, InTransfer, TransferStatus};

#[test]
fn bulk_out_stall_surfaces_direction() {
    common::init_logger();
    let mut m = MockTransport::rcs300();
    m.stall_bulk_out_at(0);
    let mut reader = Reader::new(Box::new(m)).unwrap();

    match reader.send(&[0x00]) {
        Err(Error::Transfer {
            direction: Direction::Out,
            status: TransferStatus::Stall,
        }) => {}
        other => panic!("expected Transfer error, got {:?}", other),
    }
}

#[test]
fn oversize_reply_babbles() {
    let mut m = MockTransport::rcs300();
    m.push_transfer(InTransfer::ok(vec![0u8; 100]));
    let mut reader = Reader::new(Box::new(m)).unwrap();

    let err = reader.receive(64).unwrap_err();
    assert_eq!(err.to_string(), "bulk in transfer failed: status=babble");
}
