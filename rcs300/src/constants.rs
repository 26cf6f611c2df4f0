// rcs300/src/constants.rs
//! Common protocol constants used across the crate

/// Sony Corporation USB vendor id
pub const SONY_VENDOR_ID: u16 = 0x054c;

/// Outer frame message type (PC_to_RDR_Escape)
pub const FRAME_MESSAGE_TYPE: u8 = 0x6B;

/// Outer frame header: type(1) + length(4) + slot(1) + seq(1) + reserved(3)
pub const FRAME_HEADER_LEN: usize = 10;

/// Trailing status bytes on every response frame
pub const FRAME_TRAILER_LEN: usize = 2;

/// Smallest response frame the decoder accepts
pub const FRAME_MIN_LEN: usize = FRAME_HEADER_LEN + FRAME_TRAILER_LEN;

/// The reader exposes a single slot
pub const FRAME_SLOT: u8 = 0x00;

/// Reader escape command class/instruction (CLA=FF INS=50)
pub const ESCAPE_CLA: u8 = 0xFF;
/// Escape instruction byte
pub const ESCAPE_INS: u8 = 0x50;

/// Session control P1/P2 (transparent session and RF switches)
pub const SESSION_P1: u8 = 0x00;
/// Session control P2
pub const SESSION_P2: u8 = 0x00;

/// Session control data objects
pub const START_TRANSPARENT: u8 = 0x81;
/// End transparent session
pub const END_TRANSPARENT: u8 = 0x82;
/// Turn the RF field off
pub const RF_OFF: u8 = 0x83;
/// Turn the RF field on
pub const RF_ON: u8 = 0x84;

/// Switch-protocol P1/P2 and data object tag
pub const SWITCH_PROTOCOL_P1: u8 = 0x00;
/// Switch-protocol P2
pub const SWITCH_PROTOCOL_P2: u8 = 0x02;
/// Switch-protocol data object tag
pub const SWITCH_PROTOCOL_TAG: u8 = 0x8F;

/// Communicate-through-EX P1/P2
pub const THROUGH_P1: u8 = 0x00;
/// Communicate-through-EX P2
pub const THROUGH_P2: u8 = 0x01;

/// Offset of the 2-byte status inside a communicate-through-EX response
pub const THROUGH_STATUS_OFFSET: usize = 3;

/// First TLV byte inside a communicate-through-EX response
pub const THROUGH_TLV_OFFSET: usize = 5;

/// Status bytes reported by the reader on success
pub const STATUS_SUCCESS: [u8; 2] = [0x90, 0x00];

/// FeliCa envelope: timer data object tag and length
pub const FELICA_TIMER_TAG: [u8; 2] = [0x5F, 0x46];
/// FeliCa envelope: timer value length
pub const FELICA_TIMER_LEN: u8 = 0x04;

/// FeliCa envelope: transceive data object tag (2-byte length form)
pub const FELICA_TRANSCEIVE_TAG: [u8; 2] = [0x95, 0x82];

/// Response data object carrying the card's reply
pub const RESPONSE_DATA_TAG: u8 = 0x97;

/// FeliCa polling command code
pub const FELICA_CMD_POLLING: u8 = 0x00;

/// Wrapped APDU prefix
pub const APDU_WRAP_PREFIX: [u8; 2] = [0x0A, 0x02];
