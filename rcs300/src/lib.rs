// rcs300/src/lib.rs

//! rcs300
//!
//! Pure Rust driver for the Sony RC-S300 contactless reader.
//!
//! The reader is driven over two bulk endpoints with CCID escape frames. A
//! [`Reader`] opens the device into transparent mode, switches the radio
//! protocol and passes raw commands through to the card in the field.
#![warn(missing_docs)]

/// Runtime settings and their defaults.
pub mod config;
/// Wire constants.
pub mod constants;
/// Reader session and builder.
pub mod device;
/// Error type.
pub mod error;
/// Common imports.
pub mod prelude;
/// Pure codecs for frames, reader commands and card replies.
pub mod protocol;
/// Helpers for tests.
pub mod test_support;
/// USB transport abstraction.
pub mod transport;
/// Plain data types.
pub mod types;
/// Small helpers.
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
