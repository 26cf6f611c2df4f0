// Shared helpers for integration tests. Each aggregator pulls this in with
// `#[path = "../common/mod.rs"]`, so not every item is used everywhere.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;

/// Route `log` output through env_logger; `RUST_LOG=rcs300=trace` shows
/// every frame on the wire.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
