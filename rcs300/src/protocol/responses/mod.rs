// rcs300/src/protocol/responses/mod.rs

/// Polling reply.
pub mod polling;
/// Communicate-through-EX reply.
pub mod through;

pub use polling::{POLLING_MIN_LEN, PollingResult, decode_polling};
pub use through::decode_through;

use crate::constants::RESPONSE_DATA_TAG;
use crate::protocol::tlv::TlvMap;

/// Outcome of a communicate-through-EX exchange. A rejection is an
/// expected result (no card in the field, command refused) and carries
/// only the status bytes the reader reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThroughResponse {
    /// Status 90 00 with the reply objects
    Accepted(TlvMap),
    /// Any other status
    Rejected {
        /// Status bytes reported instead of 90 00
        status: [u8; 2],
    },
}

impl ThroughResponse {
    /// True for status 90 00.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Reply objects of an accepted response.
    pub fn data(&self) -> Option<&TlvMap> {
        match self {
            Self::Accepted(map) => Some(map),
            Self::Rejected { .. } => None,
        }
    }

    /// Owned reply objects of an accepted response.
    pub fn into_data(self) -> Option<TlvMap> {
        match self {
            Self::Accepted(map) => Some(map),
            Self::Rejected { .. } => None,
        }
    }

    /// Value of the card response data object (tag 97), if any.
    pub fn response_data(&self) -> Option<&[u8]> {
        self.data()?.get(RESPONSE_DATA_TAG)
    }
}
