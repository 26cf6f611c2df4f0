// rcs300/src/device/mod.rs

/// `ReaderBuilder`.
pub mod builder;
/// The `Reader` session.
pub mod reader;

pub use builder::ReaderBuilder;
pub use reader::Reader;
