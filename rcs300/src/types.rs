// rcs300/src/types.rs

use std::convert::TryFrom;
use std::str::FromStr;

use derive_more::Display;

use crate::Error;

/// IDm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Idm([u8; 8]);

impl Idm {
    /// Wrap 8 raw bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Lowercase hex, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// PMm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pmm([u8; 8]);

impl Pmm {
    /// Wrap 8 raw bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Lowercase hex, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Pmm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// SystemCode (u16). On the RC-S300 polling path the code travels
/// big-endian, unlike the little-endian FeliCa block commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04X}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemCode(u16);

impl SystemCode {
    /// Wildcard: any system
    pub const ANY: Self = Self(0xffff);
    /// Common area
    pub const COMMON: Self = Self(0xfe00);
    /// Transit IC
    pub const SUICA: Self = Self(0x0003);

    /// System code from its numeric value.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Numeric value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Wire order on the polling path.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Read a big-endian system code.
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

impl Default for SystemCode {
    fn default() -> Self {
        Self::ANY
    }
}

/// USB vendor/product pair used to filter supported readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04x}:{:04x}", vendor_id, product_id)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceId {
    /// USB vendor id
    pub vendor_id: u16,
    /// USB product id
    pub product_id: u16,
}

impl DeviceId {
    /// Pair from raw ids.
    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }

    /// True if this pair is one of [`SUPPORTED_DEVICES`].
    pub fn is_supported(&self) -> bool {
        SUPPORTED_DEVICES.contains(self)
    }

    /// Model name for a supported pair.
    pub fn model(&self) -> Option<ReaderModel> {
        if self.vendor_id != crate::constants::SONY_VENDOR_ID {
            return None;
        }
        match self.product_id {
            0x0dc8 => Some(ReaderModel::Rcs300S),
            0x0dc9 => Some(ReaderModel::Rcs300P),
            _ => None,
        }
    }
}

/// Readers this driver knows how to talk to.
pub const SUPPORTED_DEVICES: [DeviceId; 2] = [
    DeviceId::new(crate::constants::SONY_VENDOR_ID, 0x0dc8),
    DeviceId::new(crate::constants::SONY_VENDOR_ID, 0x0dc9),
];

/// Supported reader variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ReaderModel {
    /// Product id 0x0dc8
    #[display(fmt = "RC-S300/S")]
    Rcs300S,
    /// Product id 0x0dc9
    #[display(fmt = "RC-S300/P")]
    Rcs300P,
}

/// Configuration, interface and bulk endpoints the session talks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceInfo {
    /// Configuration value to select
    pub configuration: u8,
    /// Interface number to claim
    pub interface: u8,
    /// Bulk IN endpoint address
    pub endpoint_in: u8,
    /// Bulk OUT endpoint address
    pub endpoint_out: u8,
}

/// Bulk transfer direction, for error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Direction {
    /// Device to host
    #[display(fmt = "in")]
    In,
    /// Host to device
    #[display(fmt = "out")]
    Out,
}

/// Completion status of a single bulk transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TransferStatus {
    /// Completed normally
    #[display(fmt = "ok")]
    Ok,
    /// Endpoint halted
    #[display(fmt = "stall")]
    Stall,
    /// Device sent more data than requested
    #[display(fmt = "babble")]
    Babble,
}

impl TransferStatus {
    /// True for `Ok`.
    pub fn is_ok(&self) -> bool {
        *self == TransferStatus::Ok
    }
}

/// Result of a bulk IN transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InTransfer {
    /// Completion status
    pub status: TransferStatus,
    /// Bytes received, at most the requested length
    pub data: Vec<u8>,
}

impl InTransfer {
    /// A successful transfer carrying `data`.
    pub fn ok(data: Vec<u8>) -> Self {
        Self {
            status: TransferStatus::Ok,
            data,
        }
    }
}

/// Contactless protocol the reader's radio can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Protocol {
    /// FeliCa
    #[display(fmt = "Type-F")]
    TypeF,
    /// ISO 14443-3 Type A, without the -4 transport layer
    #[display(fmt = "ISO 14443-3A")]
    Iso14443_3A,
    /// Also known as Type-A
    #[display(fmt = "ISO 14443-4A")]
    Iso14443_4A,
    /// Also known as Type-B
    #[display(fmt = "ISO 14443-4B")]
    Iso14443_4B,
    /// Also known as Type-V
    #[display(fmt = "ISO 15693")]
    Iso15693,
}

impl Protocol {
    /// Every protocol, in selector order.
    pub const ALL: [Protocol; 5] = [
        Protocol::TypeF,
        Protocol::Iso14443_3A,
        Protocol::Iso14443_4A,
        Protocol::Iso14443_4B,
        Protocol::Iso15693,
    ];
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Type-F" => Ok(Self::TypeF),
            "ISO 14443-3A" => Ok(Self::Iso14443_3A),
            "ISO 14443-4A" | "Type-A" => Ok(Self::Iso14443_4A),
            "ISO 14443-4B" | "Type-B" => Ok(Self::Iso14443_4B),
            "ISO 15693" | "Type-V" => Ok(Self::Iso15693),
            other => Err(Error::UnknownProtocol(other.to_string())),
        }
    }
}

/// Logical reader state tracked by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderMode {
    /// Not opened, or closed
    Closed,
    /// Interface claimed, transparent mode off
    TransparentInactive,
    /// Transparent mode on, no protocol selected
    TransparentActive,
    /// Transparent mode on with a radio protocol selected
    ProtocolSelected(Protocol),
}

impl ReaderMode {
    /// False only for `Closed`.
    pub fn is_open(&self) -> bool {
        !matches!(self, ReaderMode::Closed)
    }
}
