use rcs300::transport::Transport;
use rcs300::transport::mock::{MOCK_INTERFACE, MockCall, MockTransport};
use rcs300::{DeviceId, TransferStatus};

#[test]
fn mock_transport_bulk_out_and_in() {
    let mut m = MockTransport::rcs300();
    m.push_response(vec![0x01]);
    assert_eq!(m.bulk_out(MOCK_INTERFACE.endpoint_out, &[0xAA]).unwrap(), TransferStatus::Ok);
    assert_eq!(m.pop_sent(), Some(vec![0xAA]));
    let r = m.bulk_in(MOCK_INTERFACE.endpoint_in, 64).unwrap();
    assert_eq!(r.data, vec![0x01]);
    assert!(r.status.is_ok());
}

#[test]
fn mock_reports_its_identity() {
    let m = MockTransport::new(DeviceId::new(0x054c, 0x0dc9));
    assert_eq!(m.device_id().to_string(), "054c:0dc9");
    assert_eq!(m.interface_info(), Some(MOCK_INTERFACE));
}

#[test]
fn mock_records_claim_and_release() {
    let mut m = MockTransport::rcs300();
    m.claim_interface(MOCK_INTERFACE.interface).unwrap();
    m.release_interface(MOCK_INTERFACE.interface).unwrap();
    assert_eq!(
        m.calls,
        vec![MockCall::ClaimInterface(0), MockCall::ReleaseInterface(0)]
    );
}
