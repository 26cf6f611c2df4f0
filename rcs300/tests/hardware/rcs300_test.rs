#![cfg(feature = "usb")]

#[path = "common.rs"]
mod common;

use rcs300::{Protocol, Result};
use serial_test::serial;

// These tests need an RC-S300 attached. They are `#[ignore]`d so CI does
// not attempt them, and `#[serial]` because they share one device. Run with:
//
// cargo test -p rcs300 --test hardware --features usb -- --ignored

#[test]
#[ignore]
#[serial]
fn open_and_close() -> anyhow::Result<()> {
    if let Some(mut reader) = common::open_reader()? {
        assert!(reader.is_rf_on());
        reader.close()?;
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn poll_felica_card() -> anyhow::Result<()> {
    let Some(mut reader) = common::open_reader()? else {
        return Ok(());
    };
    reader.switch_protocol(Protocol::TypeF)?;
    match reader.polling()? {
        Some(card) => println!("idm={} pmm={}", card.idm.to_hex(), card.pmm.to_hex()),
        None => println!("no card in field"),
    }
    reader.close()?;
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn get_uid_type_a() -> Result<()> {
    let Some(mut reader) = common::open_reader()? else {
        return Ok(());
    };
    reader.switch_protocol(Protocol::Iso14443_4A)?;
    let resp = reader.communicate(&[0xFF, 0xCA, 0x00, 0x00])?;
    println!("{:?}", resp);
    reader.close()
}
