//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build reader response frames and share a MockTransport
//! between a Reader and the test that inspects it.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::constants::{FRAME_HEADER_LEN, FRAME_SLOT};
use crate::device::Reader;
use crate::transport::Transport;
use crate::transport::mock::MockTransport;
use crate::types::{DeviceId, InTransfer, InterfaceInfo, TransferStatus};
use crate::Result;

/// Build a raw response frame as the reader would return it:
/// 10-byte header, `payload`, two trailing bytes.
#[doc(hidden)]
pub fn response_frame(sequence: u8, payload: &[u8]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(FRAME_HEADER_LEN + payload.len() + 2);
    raw.push(0x83);
    raw.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    raw.push(FRAME_SLOT);
    raw.push(sequence);
    raw.extend_from_slice(&[0x00, 0x00, 0x00]);
    raw.extend_from_slice(payload);
    raw.extend_from_slice(&[0x90, 0x00]);
    raw
}

/// Response frame with sequence 0.
#[doc(hidden)]
pub fn ok_frame(payload: &[u8]) -> Vec<u8> {
    response_frame(0, payload)
}

/// One TLV object.
#[doc(hidden)]
pub fn tlv(tag: u8, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + value.len());
    out.push(tag);
    out.push(value.len() as u8);
    out.extend_from_slice(value);
    out
}

/// A communicate-through-EX reply carrying `status` and the raw TLV bytes.
#[doc(hidden)]
pub fn through_frame(status: [u8; 2], tlv_bytes: &[u8]) -> Vec<u8> {
    let mut payload = vec![0xC0, 0x03, 0x00, status[0], status[1]];
    payload.extend_from_slice(tlv_bytes);
    ok_frame(&payload)
}

/// Polling reply value as found in the 0x97 object: response code and
/// length, IDm, PMm, request data 00 03.
#[doc(hidden)]
pub fn polling_value() -> Vec<u8> {
    vec![
        0x14, 0x01, // length, response code
        0x01, 0x2e, 0x4c, 0xd4, 0x3a, 0x1b, 0x7c, 0x99, // idm
        0x10, 0x0b, 0x4b, 0x42, 0x84, 0x85, 0xd0, 0xff, // pmm
        0x00, 0x03, // system code
    ]
}

/// MockTransport shared between a Reader and the test inspecting it.
pub type SharedMock = Arc<Mutex<MockTransport>>;

/// Transport wrapper that delegates into a shared MockTransport.
#[doc(hidden)]
pub struct SharedTransport {
    inner: SharedMock,
}

impl SharedTransport {
    /// Wrap a shared mock.
    pub fn new(inner: SharedMock) -> Self {
        Self { inner }
    }

    fn mock(&self) -> MutexGuard<'_, MockTransport> {
        // a panicking test must not hide the recorded calls from the next one
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for SharedTransport {
    fn device_id(&self) -> DeviceId {
        self.mock().device_id()
    }

    fn interface_info(&self) -> Option<InterfaceInfo> {
        self.mock().interface_info()
    }

    fn open(&mut self) -> Result<()> {
        self.mock().open()
    }

    fn close(&mut self) -> Result<()> {
        self.mock().close()
    }

    fn select_configuration(&mut self, configuration: u8) -> Result<()> {
        self.mock().select_configuration(configuration)
    }

    fn claim_interface(&mut self, interface: u8) -> Result<()> {
        self.mock().claim_interface(interface)
    }

    fn release_interface(&mut self, interface: u8) -> Result<()> {
        self.mock().release_interface(interface)
    }

    fn bulk_out(&mut self, endpoint: u8, data: &[u8]) -> Result<TransferStatus> {
        self.mock().bulk_out(endpoint, data)
    }

    fn bulk_in(&mut self, endpoint: u8, max_len: usize) -> Result<InTransfer> {
        self.mock().bulk_in(endpoint, max_len)
    }
}

/// Wrap `mock` so a test keeps a handle to it after boxing.
#[doc(hidden)]
pub fn shared_mock(mock: MockTransport) -> (SharedMock, Box<dyn Transport>) {
    let shared = Arc::new(Mutex::new(mock));
    let boxed: Box<dyn Transport> = Box::new(SharedTransport::new(shared.clone()));
    (shared, boxed)
}

/// Create and open a Reader backed by a MockTransport. The four open
/// replies are queued first, then `frames`.
#[doc(hidden)]
pub fn opened_mock_reader(frames: Vec<Vec<u8>>) -> Result<(Reader, SharedMock)> {
    let mut mock = MockTransport::rcs300();
    for seq in 0..4 {
        mock.push_response(response_frame(seq, &[0x90, 0x00]));
    }
    for f in frames {
        mock.push_response(f);
    }
    let (shared, boxed) = shared_mock(mock);
    let mut reader = Reader::new(boxed)?;
    reader.open()?;
    Ok((reader, shared))
}
