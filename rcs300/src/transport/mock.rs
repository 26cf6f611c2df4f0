// rcs300/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::types::{DeviceId, InTransfer, InterfaceInfo, SUPPORTED_DEVICES, TransferStatus};
use crate::{Error, Result};

/// Interface layout reported by the mock unless a test overrides it.
pub const MOCK_INTERFACE: InterfaceInfo = InterfaceInfo {
    configuration: 1,
    interface: 0,
    endpoint_in: 0x81,
    endpoint_out: 0x02,
};

/// Every call the mock saw, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    /// `Transport::open`
    Open,
    /// `Transport::close`
    Close,
    /// Configuration value selected
    SelectConfiguration(u8),
    /// Interface number claimed
    ClaimInterface(u8),
    /// Interface number released
    ReleaseInterface(u8),
    /// Write of `len` bytes
    BulkOut {
        /// Endpoint address
        endpoint: u8,
        /// Bytes written
        len: usize,
    },
    /// Read request of up to `max_len` bytes
    BulkIn {
        /// Endpoint address
        endpoint: u8,
        /// Requested length
        max_len: usize,
    },
}

/// Mock transport for unit tests. It records bulk OUT payloads and returns
/// queued bulk IN transfers.
#[derive(Debug)]
pub struct MockTransport {
    /// Identity reported to the reader
    pub device_id: DeviceId,
    /// `None` simulates a device without bulk endpoints
    pub interface: Option<InterfaceInfo>,
    /// Payloads written to bulk OUT, in order
    pub sent: Vec<Vec<u8>>,
    /// Every trait call, in order
    pub calls: Vec<MockCall>,
    /// Bulk IN replies, served in order
    pub responses: VecDeque<InTransfer>,
    /// Testing hook: zero-based bulk OUT index that completes with `Stall`
    pub stall_out_at: Option<usize>,
    /// Between `open` and `close`
    pub is_open: bool,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new(SUPPORTED_DEVICES[0])
    }
}

impl MockTransport {
    /// Mock of `device_id` with [`MOCK_INTERFACE`].
    pub fn new(device_id: DeviceId) -> Self {
        Self {
            device_id,
            interface: Some(MOCK_INTERFACE),
            sent: Vec::new(),
            calls: Vec::new(),
            responses: VecDeque::new(),
            stall_out_at: None,
            is_open: false,
        }
    }

    /// Mock of an RC-S300/S with the default interface layout.
    pub fn rcs300() -> Self {
        Self::default()
    }

    /// Drop the interface description, as a device without bulk endpoints would.
    pub fn without_interface(mut self) -> Self {
        self.interface = None;
        self
    }

    /// Make the `index`-th bulk OUT transfer (zero-based) report `Stall`.
    pub fn stall_bulk_out_at(&mut self, index: usize) {
        self.stall_out_at = Some(index);
    }

    /// Queue a successful bulk IN reply.
    pub fn push_response(&mut self, data: Vec<u8>) {
        self.responses.push_back(InTransfer::ok(data));
    }

    /// Queue a bulk IN reply with an explicit status.
    pub fn push_transfer(&mut self, transfer: InTransfer) {
        self.responses.push_back(transfer);
    }

    /// Take the most recent bulk OUT payload.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Number of bulk IN transfers requested so far.
    pub fn read_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, MockCall::BulkIn { .. }))
            .count()
    }
}

impl Transport for MockTransport {
    fn device_id(&self) -> DeviceId {
        self.device_id
    }

    fn interface_info(&self) -> Option<InterfaceInfo> {
        self.interface
    }

    fn open(&mut self) -> Result<()> {
        self.calls.push(MockCall::Open);
        self.is_open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.calls.push(MockCall::Close);
        self.is_open = false;
        Ok(())
    }

    fn select_configuration(&mut self, configuration: u8) -> Result<()> {
        self.calls.push(MockCall::SelectConfiguration(configuration));
        Ok(())
    }

    fn claim_interface(&mut self, interface: u8) -> Result<()> {
        self.calls.push(MockCall::ClaimInterface(interface));
        Ok(())
    }

    fn release_interface(&mut self, interface: u8) -> Result<()> {
        self.calls.push(MockCall::ReleaseInterface(interface));
        Ok(())
    }

    fn bulk_out(&mut self, endpoint: u8, data: &[u8]) -> Result<TransferStatus> {
        let index = self.sent.len();
        self.calls.push(MockCall::BulkOut {
            endpoint,
            len: data.len(),
        });
        self.sent.push(data.to_vec());
        if self.stall_out_at == Some(index) {
            return Ok(TransferStatus::Stall);
        }
        Ok(TransferStatus::Ok)
    }

    fn bulk_in(&mut self, endpoint: u8, max_len: usize) -> Result<InTransfer> {
        self.calls.push(MockCall::BulkIn { endpoint, max_len });
        let mut transfer = self.responses.pop_front().ok_or(Error::Timeout)?;
        if transfer.data.len() > max_len {
            transfer.data.truncate(max_len);
            transfer.status = TransferStatus::Babble;
        }
        Ok(transfer)
    }
}
