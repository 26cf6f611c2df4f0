// rcs300/src/protocol/mod.rs

/// Frame-level glue between commands and replies.
pub mod codec;
/// Reader and card command encoders.
pub mod commands;
/// Outer bulk frame.
pub mod frame;
/// Bounds-checked slicing helpers.
pub mod parser;
/// Reply decoders.
pub mod responses;
/// Frame sequence counter.
pub mod sequence;
/// TLV map.
pub mod tlv;

pub use commands::{
    Command, encode_apdu_header, encode_end_transparent, encode_felica_envelope, encode_polling,
    encode_rf_off, encode_rf_on, encode_session, encode_start_transparent, encode_switch_protocol,
    encode_through,
};
pub use frame::{Frame, ResponseFrame};
pub use responses::{
    POLLING_MIN_LEN, PollingResult, ThroughResponse, decode_polling, decode_through,
};
pub use sequence::SequenceCounter;
pub use tlv::{Tag, TlvMap};
