//! The reassembler's input type.

use crate::time::Timestamp;
use crate::types::{Priority, TransferId};

/// One link-layer datagram carrying a slice of a transfer. Borrowed: the payload only needs to
/// live for the duration of the `process_frame` call that consumes it, since the reassembler
/// copies any bytes it needs to retain.
#[derive(Clone, Debug)]
pub struct Frame<'p> {
    pub timestamp: Timestamp,
    pub priority: Priority,
    pub transfer_id: TransferId,
    pub index: usize,
    pub end_of_transfer: bool,
    pub payload: &'p [u8],
}

impl<'p> Frame<'p> {
    /// A frame that is both the first and the last of its transfer.
    pub fn single_frame_transfer(&self) -> bool {
        self.index == 0 && self.end_of_transfer
    }
}
