#[path = "../common/mod.rs"]
mod common;

use rcs300::SystemCode;

#[test]
fn polling_returns_card_identity() {
    let (mut reader, shared) = common::opened_reader(vec![common::fixtures::polling_frame(4)]);

    let card = reader.polling().unwrap().expect("card in field");
    assert_eq!(card.idm, common::fixtures::sample_idm());
    assert_eq!(card.pmm, common::fixtures::sample_pmm());
    assert_eq!(card.system_code(), Some(common::fixtures::sample_system_code()));

    let m = shared.lock().unwrap();
    let sent = &m.sent[4];
    // default system code FFFF, request code 01
    assert_eq!(&sent[sent.len() - 9..sent.len() - 3], &[0x06, 0x00, 0xFF, 0xFF, 0x01, 0x00]);
}

#[test]
fn polling_without_card_is_none() {
    let (mut reader, _shared) =
        common::opened_reader(vec![common::fixtures::polling_no_card_frame(4)]);
    assert!(
        reader
            .felica_polling(SystemCode::COMMON, 0x00, 1_000)
            .unwrap()
            .is_none()
    );
}

#[test]
fn polling_timeout_is_little_endian_in_envelope() {
    let (mut reader, shared) = common::opened_reader(vec![common::fixtures::polling_no_card_frame(4)]);
    reader.felica_polling(SystemCode::ANY, 0x01, 0x0001_0203).unwrap();

    let m = shared.lock().unwrap();
    // frame header(10) + through header(7) + 5F 46 04
    assert_eq!(&m.sent[4][20..24], &[0x03, 0x02, 0x01, 0x00]);
}

#[test]
fn truncated_tlv_is_an_error() {
    let (mut reader, _shared) = common::opened_reader(vec![common::fixtures::truncated_tlv_frame()]);
    let err = reader.polling().unwrap_err();
    assert!(matches!(err, rcs300::Error::TruncatedTlv { .. }));
}

#[test]
fn short_polling_value_is_no_card() {
    let (mut reader, _shared) =
        common::opened_reader(vec![common::fixtures::polling_short_frame(4)]);
    assert!(reader.polling().unwrap().is_none());
    // the session is still usable
    assert!(reader.mode().is_open());
}
