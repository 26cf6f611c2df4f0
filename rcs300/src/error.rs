// rcs300/src/error.rs

use thiserror::Error;

use crate::types::{Direction, TransferStatus};

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// No supported reader is attached.
    #[error("device not found")]
    DeviceNotFound,

    /// The device is not an RC-S300.
    #[error("unsupported device: vendor={vendor_id:#06x}, product={product_id:#06x}")]
    DeviceMismatch {
        /// Reported vendor id
        vendor_id: u16,
        /// Reported product id
        product_id: u16,
    },

    /// The device does not expose the expected interface.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Raw USB I/O failure.
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    /// Raw USB I/O failure (no `usb` feature).
    #[cfg(not(feature = "usb"))]
    #[error("usb error: {0}")]
    UsbString(String),

    /// A bulk transfer completed with a non-ok status.
    #[error("bulk {direction} transfer failed: status={status}")]
    Transfer {
        /// Which endpoint failed
        direction: Direction,
        /// Completion status reported by the transport
        status: TransferStatus,
    },

    /// A frame or value received from the reader is too short.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Minimum length required
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// A caller-supplied command does not fit its length field. Nothing
    /// was sent.
    #[error("command too long: at most {max} bytes, got {actual}")]
    CommandTooLong {
        /// Largest length the field can carry
        max: usize,
        /// Length supplied
        actual: usize,
    },

    /// A TLV entry runs past the end of the response.
    #[error("truncated tlv entry at offset {offset}")]
    TruncatedTlv {
        /// Offset of the entry's tag byte
        offset: usize,
    },

    /// A TLV tag in text form is not two hex digits.
    #[error("invalid tlv tag: {0:?}")]
    InvalidTag(String),

    /// A protocol name matched none of the known names.
    #[error("unknown protocol: {0}")]
    UnknownProtocol(String),

    /// A bulk IN produced no reply in time.
    #[error("operation timed out")]
    Timeout,
}

impl Error {
    /// True for failures that leave the reader's USB-side state unknown.
    /// Callers should close and re-open the session after one of these.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Transfer { .. }
            | Self::InvalidLength { .. }
            | Self::TruncatedTlv { .. }
            | Self::Timeout => true,
            #[cfg(feature = "usb")]
            Self::Usb(_) => true,
            #[cfg(not(feature = "usb"))]
            Self::UsbString(_) => true,
            _ => false,
        }
    }
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;
