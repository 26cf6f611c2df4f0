// rcs300/src/config.rs
//! Runtime defaults for a reader session.
//!
//! Read lengths are the `max_len` handed to each bulk IN transfer. The FeliCa
//! timeout is a protocol field carried inside the command envelope; it does
//! not bound how long the host waits for the reply.

use crate::types::SystemCode;

/// Bulk IN length for transparent/RF session control replies
pub const CONTROL_READ_LEN: usize = 64;

/// Bulk IN length for switch-protocol replies
pub const SWITCH_PROTOCOL_READ_LEN: usize = 128;

/// Default bulk IN length for communicate-through-EX
pub const THROUGH_READ_LEN: usize = 128;

/// Default bulk IN length for FeliCa envelopes
pub const FELICA_READ_LEN: usize = 64;

/// Default FeliCa command timeout (ms)
pub const FELICA_TIMEOUT_MS: u32 = 10_000;

/// Default polling request code (system code request)
pub const POLLING_REQUEST_CODE: u8 = 0x01;

/// Runtime settings of a [`crate::device::Reader`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    /// Bulk IN length for session control replies
    pub control_read_len: usize,
    /// Bulk IN length for switch-protocol replies
    pub switch_protocol_read_len: usize,
    /// Bulk IN length for communicate-through-EX replies
    pub through_read_len: usize,
    /// Bulk IN length for FeliCa envelope replies
    pub felica_read_len: usize,
    /// Card-side timeout carried in the FeliCa envelope (ms)
    pub felica_timeout_ms: u32,
    /// System code used by `polling()`
    pub polling_system_code: SystemCode,
    /// Request code used by `polling()`
    pub polling_request_code: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            control_read_len: CONTROL_READ_LEN,
            switch_protocol_read_len: SWITCH_PROTOCOL_READ_LEN,
            through_read_len: THROUGH_READ_LEN,
            felica_read_len: FELICA_READ_LEN,
            felica_timeout_ms: FELICA_TIMEOUT_MS,
            polling_system_code: SystemCode::ANY,
            polling_request_code: POLLING_REQUEST_CODE,
        }
    }
}

impl ReaderConfig {
    /// Same as `Default::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the communicate-through-EX read length.
    pub fn with_through_read_len(mut self, len: usize) -> Self {
        self.through_read_len = len;
        self
    }

    /// Set the FeliCa envelope read length.
    pub fn with_felica_read_len(mut self, len: usize) -> Self {
        self.felica_read_len = len;
        self
    }

    /// Set the FeliCa card-side timeout.
    pub fn with_felica_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.felica_timeout_ms = timeout_ms;
        self
    }

    /// Defaults used by [`crate::device::Reader::polling`].
    pub fn with_polling(mut self, system_code: SystemCode, request_code: u8) -> Self {
        self.polling_system_code = system_code;
        self.polling_request_code = request_code;
        self
    }
}
