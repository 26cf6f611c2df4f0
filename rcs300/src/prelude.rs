// rcs300/src/prelude.rs

pub use crate::config::ReaderConfig;
pub use crate::device::{Reader, ReaderBuilder};
pub use crate::protocol::{PollingResult, ThroughResponse, TlvMap};
pub use crate::transport::{MockTransport, Transport};
#[cfg(feature = "usb")]
pub use crate::transport::UsbTransport;
pub use crate::{
    DeviceId, Error, Idm, Pmm, Protocol, ReaderMode, ReaderModel, Result, SystemCode,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
