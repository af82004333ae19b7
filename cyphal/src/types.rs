//! Small wire-level value types shared by the frame/transfer contracts.

/// Identifier of a remote node on the bus.
pub type NodeId = u16;

/// Sender-assigned counter identifying a transfer. Treated as an unbounded integer; this crate
/// performs naive numeric comparison and relies on the transfer-ID timeout to cover wraps on
/// transports with a narrower wire width (see the transfer-ID width note in the design notes).
pub type TransferId = u64;

/// Protocol-level priority. Transports may support more than these eight base levels, but there
/// is currently no API for that.
#[derive(FromPrimitive, ToPrimitive, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug, Hash)]
pub enum Priority {
    Exceptional,
    Immediate,
    Fast,
    High,
    Nominal,
    Low,
    Slow,
    Optional,
}
