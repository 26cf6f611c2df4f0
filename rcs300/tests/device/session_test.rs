#[path = "../common/mod.rs"]
mod common;

use rcs300::device::{Reader, ReaderBuilder};
use rcs300::transport::mock::{MockCall, MockTransport};
use rcs300::test_support::shared_mock;
use rcs300::{Direction, Error, Protocol, ReaderMode, TransferStatus};

#[test]
fn open_then_close_round_trip() {
    common::init_logger();
    let mut mock = MockTransport::rcs300();
    for f in common::open_replies() {
        mock.push_response(f);
    }
    mock.push_response(common::fixtures::control_ok_frame(4));
    mock.push_response(common::fixtures::control_ok_frame(5));
    let (shared, boxed) = shared_mock(mock);

    let mut reader = ReaderBuilder::new().with_transport(boxed).open().unwrap();
    assert!(reader.mode().is_open());
    reader.close().unwrap();
    assert_eq!(reader.mode(), ReaderMode::Closed);

    let m = shared.lock().unwrap();
    assert!(!m.is_open);
    let ops: Vec<u8> = m.sent.iter().map(|f| f[15]).collect();
    assert_eq!(ops, vec![0x82, 0x81, 0x83, 0x84, 0x83, 0x82]);
    assert_eq!(m.calls.last(), Some(&MockCall::Close));
}

#[test]
fn every_protocol_switches_with_one_read() {
    let frames = (4..9).map(common::fixtures::switch_protocol_frame).collect();
    let (mut reader, shared) = common::opened_reader(frames);

    for protocol in Protocol::ALL {
        let frame = reader.switch_protocol(protocol).unwrap();
        assert_eq!(frame.payload, vec![0xC0, 0x03, 0x00, 0x90, 0x00, 0x90, 0x00]);
        assert_eq!(reader.mode(), ReaderMode::ProtocolSelected(protocol));
    }

    let m = shared.lock().unwrap();
    assert_eq!(m.read_count(), 4 + 5);
    let selectors: Vec<(u8, u8)> = m.sent[4..].iter().map(|f| (f[17], f[18])).collect();
    assert_eq!(
        selectors,
        vec![(0x03, 0x00), (0x00, 0x03), (0x00, 0x04), (0x01, 0x04), (0x02, 0x03)]
    );
}

#[test]
fn protocol_names_resolve() {
    let frames = vec![
        common::fixtures::switch_protocol_frame(4),
        common::fixtures::switch_protocol_frame(5),
    ];
    let (mut reader, _shared) = common::opened_reader(frames);

    reader.switch_protocol_named("Type-F").unwrap();
    assert_eq!(reader.mode(), ReaderMode::ProtocolSelected(Protocol::TypeF));
    reader.switch_protocol_named("ISO 15693").unwrap();
    assert_eq!(reader.mode(), ReaderMode::ProtocolSelected(Protocol::Iso15693));
    assert!(matches!(
        reader.switch_protocol_named("Type-C"),
        Err(Error::UnknownProtocol(_))
    ));
}

#[test]
fn bulk_in_stall_is_a_transfer_error() {
    let (mut reader, shared) = common::opened_reader(vec![]);
    shared.lock().unwrap().push_transfer(rcs300::InTransfer {
        status: TransferStatus::Stall,
        data: vec![],
    });

    match reader.rf_off() {
        Err(Error::Transfer {
            direction: Direction::In,
            status: TransferStatus::Stall,
        }) => {}
        other => panic!("expected Transfer error, got {:?}", other),
    }
    // rf state is unchanged by a failed exchange
    assert!(reader.is_rf_on());
}

#[test]
fn missing_reply_times_out() {
    let (mut reader, _shared) = common::opened_reader(vec![]);
    let err = reader.start_transparent().unwrap_err();
    assert!(matches!(err, Error::Timeout));
    assert!(err.is_transport());
}

#[test]
fn into_transport_hands_back_the_mock() {
    let reader = Reader::new(Box::new(MockTransport::rcs300())).unwrap();
    let transport = reader.into_transport();
    assert!(transport.device_id().is_supported());
}
