//! Timestamps carried by frames and transfers.

use embedded_time::duration::Nanoseconds;

/// The point in time a frame was received, expressed two ways: wall-clock ("system") time for
/// presentation, and a monotonic clock for transfer-ID timeout arithmetic. Mirrors the
/// `(system_ns, monotonic_ns)` pair the upstream transport implementation this crate's reassembly
/// algorithm was distilled from uses for the same purpose.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Timestamp {
    pub system_ns: u64,
    pub monotonic_ns: u64,
}

impl Timestamp {
    pub const fn new(system_ns: u64, monotonic_ns: u64) -> Self {
        Self {
            system_ns,
            monotonic_ns,
        }
    }

    /// The monotonic delta between `self` and an earlier timestamp, saturating at zero rather
    /// than underflowing if `self` is not actually later (frames may be delivered out of order).
    pub fn monotonic_since(&self, earlier: &Timestamp) -> Nanoseconds<u64> {
        Nanoseconds::new(self.monotonic_ns.saturating_sub(earlier.monotonic_ns))
    }
}
