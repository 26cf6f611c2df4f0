// rcs300/src/transport/traits.rs

use crate::Result;
use crate::types::{DeviceId, InTransfer, InterfaceInfo, TransferStatus};

/// Transport trait abstracts the USB device away from the protocol logic.
///
/// `Err` is reserved for I/O failures the transport cannot express as a
/// transfer status (device gone, access denied). A transfer that completes
/// with a non-ok status is reported through `TransferStatus`.
///
/// Transports are `Send` so a reader can be moved to, or shared behind a
/// `Mutex` with, another thread.
pub trait Transport: Send {
    /// Vendor/product identity of the underlying device
    fn device_id(&self) -> DeviceId;

    /// Configuration, interface and bulk endpoints of the reader function,
    /// or `None` when the device does not expose them
    fn interface_info(&self) -> Option<InterfaceInfo>;

    /// Open the device handle.
    fn open(&mut self) -> Result<()>;

    /// Close the device handle.
    fn close(&mut self) -> Result<()>;

    /// Make `configuration` the active configuration.
    fn select_configuration(&mut self, configuration: u8) -> Result<()>;

    /// Claim `interface` for exclusive use.
    fn claim_interface(&mut self, interface: u8) -> Result<()>;

    /// Release a claimed interface.
    fn release_interface(&mut self, interface: u8) -> Result<()>;

    /// Write `data` to a bulk OUT endpoint
    fn bulk_out(&mut self, endpoint: u8, data: &[u8]) -> Result<TransferStatus>;

    /// Read up to `max_len` bytes from a bulk IN endpoint
    fn bulk_in(&mut self, endpoint: u8, max_len: usize) -> Result<InTransfer>;
}
