//! Integrity validation for a complete candidate transfer.

use alloc::vec::Vec;

use super::trim::trim_crc_tail;
use crate::crc::{TransferCrc, CRC_SIZE_BYTES};
use crate::time::Timestamp;
use crate::transfer::Transfer;
use crate::types::{NodeId, Priority, TransferId};

/// Validates and packages a complete set of fragments into a `Transfer`.
///
/// `frame_payloads` must be non-empty and contain every fragment of the candidate transfer, in
/// index order. A single fragment needs no CRC (single-frame transfers carry none); more than one
/// fragment must pass the CRC residue check before the trailing CRC bytes are trimmed off.
pub(crate) fn finalize_transfer(
    timestamp: Timestamp,
    priority: Priority,
    transfer_id: TransferId,
    mut frame_payloads: Vec<Vec<u8>>,
    source_node_id: Option<NodeId>,
) -> Option<Transfer> {
    debug_assert!(!frame_payloads.is_empty());

    if frame_payloads.len() == 1 {
        return Some(Transfer {
            timestamp,
            priority,
            transfer_id,
            fragmented_payload: frame_payloads,
            source_node_id,
        });
    }

    let total_len: usize = frame_payloads.iter().map(Vec::len).sum();
    if total_len <= CRC_SIZE_BYTES {
        return None;
    }

    let mut crc = TransferCrc::new();
    crc.digest_fragments(frame_payloads.iter().map(Vec::as_slice));
    if !crc.check_residue() {
        return None;
    }

    trim_crc_tail(&mut frame_payloads);
    Some(Transfer {
        timestamp,
        priority,
        transfer_id,
        fragmented_payload: frame_payloads,
        source_node_id,
    })
}
