//! The reassembler's output type.

use alloc::vec::Vec;

use crate::time::Timestamp;
use crate::types::{NodeId, Priority, TransferId};

/// A complete, integrity-verified application-level message.
///
/// `fragmented_payload` is the ordered sequence of fragments as stored by the reassembler; the
/// concatenation of its elements is the application payload. For multi-frame transfers the CRC
/// trailer has already been removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub timestamp: Timestamp,
    pub priority: Priority,
    pub transfer_id: TransferId,
    pub fragmented_payload: Vec<Vec<u8>>,
    pub source_node_id: Option<NodeId>,
}

impl Transfer {
    /// Total length of the concatenated payload.
    pub fn payload_len(&self) -> usize {
        self.fragmented_payload.iter().map(Vec::len).sum()
    }
}
