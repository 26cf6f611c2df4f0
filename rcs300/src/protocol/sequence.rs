// rcs300/src/protocol/sequence.rs

/// Outer-frame sequence number. Wraps modulo 256.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceCounter(u8);

impl SequenceCounter {
    /// Counter starting at `start`.
    pub const fn new(start: u8) -> Self {
        Self(start)
    }

    /// Value the next outgoing frame will carry.
    pub fn current(&self) -> u8 {
        self.0
    }

    /// Return the current value and advance.
    pub fn advance(&mut self) -> u8 {
        let seq = self.0;
        self.0 = self.0.wrapping_add(1);
        seq
    }
}
