// rcs300/src/protocol/responses/polling.rs

use crate::protocol::parser;
use crate::types::{Idm, Pmm, SystemCode};
use crate::Result;

/// Card identity returned by FeliCa polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollingResult {
    /// Manufacture ID
    pub idm: Idm,
    /// Manufacture parameter
    pub pmm: Pmm,
    /// Present only when polling asked for request data (request code != 0)
    pub request_data: Option<[u8; 2]>,
}

impl PollingResult {
    /// Request data read as a system code; meaningful for request code 0x01.
    pub fn system_code(&self) -> Option<SystemCode> {
        self.request_data.map(SystemCode::from_be_bytes)
    }
}

/// Shortest tag 97 value that carries a card identity.
pub const POLLING_MIN_LEN: usize = 2 + 8 + 8;

/// Decode the tag 97 value of a polling reply.
/// Layout: len(1) + response code(1) + idm(8) + pmm(8) + [request data(2)]
pub fn decode_polling(value: &[u8]) -> Result<PollingResult> {
    parser::ensure_len(value, POLLING_MIN_LEN)?;

    let idm = parser::idm_at(value, 2)?;
    let pmm = parser::pmm_at(value, 10)?;
    let request_data = parser::pair_at(value, 18).ok();

    Ok(PollingResult {
        idm,
        pmm,
        request_data,
    })
}
