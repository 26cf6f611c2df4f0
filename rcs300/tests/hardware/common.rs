#![cfg(feature = "usb")]

//! Helpers for tests against a real reader.
//!
//! Compiled only with `--features usb`. When no reader is attached (CI)
//! the helpers return `Ok(None)` so the tests pass vacuously.

use rcs300::device::Reader;
use rcs300::transport::UsbTransport;
use rcs300::{Error, Result};

/// Find the first RC-S300 and open a session on it.
///
/// - Ok(Some(reader)) : reader found and opened
/// - Ok(None) : no reader attached
/// - Err(e) : any other failure
pub fn open_reader() -> Result<Option<Reader>> {
    let _ = env_logger::builder().is_test(true).try_init();
    match UsbTransport::find() {
        Ok(transport) => {
            let mut reader = Reader::new(Box::new(transport))?;
            reader.open()?;
            Ok(Some(reader))
        }
        Err(Error::DeviceNotFound) => Ok(None),
        Err(e) => Err(e),
    }
}
