//! Stateless handling of anonymous (sourceless) transfers.
//!
//! Anonymous senders have no node-ID to key a reassembler by, so the protocol forbids them from
//! ever sending a multi-frame transfer. Validating that requires no state at all.

use alloc::vec;

use crate::frame::Frame;
use crate::transfer::Transfer;

/// Builds a transfer from a frame claiming to be anonymous, if and only if it is a valid
/// single-frame transfer. Any other frame (in particular, any attempt at a multi-frame anonymous
/// transfer) is silently rejected by returning `None` — the caller's routing layer is expected to
/// have already decided this frame belongs to an anonymous sender before calling this helper.
pub fn construct_anonymous_transfer(frame: &Frame<'_>) -> Option<Transfer> {
    if frame.single_frame_transfer() {
        Some(Transfer {
            timestamp: frame.timestamp,
            priority: frame.priority,
            transfer_id: frame.transfer_id,
            fragmented_payload: vec![frame.payload.to_vec()],
            source_node_id: None,
        })
    } else {
        None
    }
}
