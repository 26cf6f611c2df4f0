// rcs300/src/protocol/responses/through.rs

use log::debug;

use crate::constants::{STATUS_SUCCESS, THROUGH_STATUS_OFFSET, THROUGH_TLV_OFFSET};
use crate::protocol::parser;
use crate::protocol::responses::ThroughResponse;
use crate::protocol::tlv::TlvMap;
use crate::Result;

/// Decode the payload of a communicate-through-EX response frame.
/// Layout: prefix(3) + status(2) + TLV...
pub fn decode_through(payload: &[u8]) -> Result<ThroughResponse> {
    let status = parser::pair_at(payload, THROUGH_STATUS_OFFSET)?;
    if status != STATUS_SUCCESS {
        debug!(
            "communicate-through rejected: status={:02X}{:02X}",
            status[0], status[1]
        );
        return Ok(ThroughResponse::Rejected { status });
    }

    let map = TlvMap::parse(payload, THROUGH_TLV_OFFSET)?;
    Ok(ThroughResponse::Accepted(map))
}
