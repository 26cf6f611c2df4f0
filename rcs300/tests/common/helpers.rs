// helpers.rs — reader construction shared by integration tests

use rcs300::device::Reader;
use rcs300::test_support::{self, SharedMock};

use super::fixtures;

/// Open a mock-backed reader with the four open replies queued, then
/// `frames`. Sequence numbers 0..=3 are consumed by open.
pub fn opened_reader(frames: Vec<Vec<u8>>) -> (Reader, SharedMock) {
    super::init_logger();
    test_support::opened_mock_reader(frames).expect("open mock reader")
}

/// Open-sequence replies with matching sequence numbers.
pub fn open_replies() -> Vec<Vec<u8>> {
    (0..4).map(fixtures::control_ok_frame).collect()
}
