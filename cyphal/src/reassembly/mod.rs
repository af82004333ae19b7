//! The transfer reassembly state machine.
//!
//! One instance accepts frames from a single remote source node and emits complete,
//! integrity-verified transfers, tolerating reordering, duplication, and retries.

mod finalize;
mod trim;


use alloc::vec::Vec;

use embedded_time::duration::Nanoseconds;

use crate::frame::Frame;
use crate::time::Timestamp;
use crate::transfer::Transfer;
use crate::types::{NodeId, TransferId};

use finalize::finalize_transfer;

/// Error states the transfer reassembly state machine may encounter. Whenever an error is
/// encountered, the corresponding error counter is incremented by one and a verbose report is
/// logged at `log::debug!`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ReassemblyError {
    /// New transfer started before the old one could be completed. Old transfer discarded.
    MultiframeMissingFrames,
    /// A reassembled multi-frame transfer payload did not pass integrity checks. Discarded.
    MultiframeIntegrityError,
    /// A frame without payload received as part of a multi-frame transfer.
    MultiframeEmptyFrame,
    /// The end-of-transfer flag is set on a frame with index N, but a frame with index > N was
    /// also accepted into this transfer. Discarded.
    MultiframeEotMisplaced,
    /// The end-of-transfer flag is set on frames with indexes N and M, N != M. Discarded.
    MultiframeEotInconsistent,
    /// The payload exceeds the configured limit. Discarded.
    PayloadSizeExceedsLimit,
}

/// Accepts frames from one remote source node and assembles them into transfers.
pub struct Reassembler<F: FnMut(ReassemblyError)> {
    source_node_id: NodeId,
    max_payload_size_bytes: usize,
    on_error: F,

    /// Fragment buffers, indexed by frame index. Unseen positions hold an empty sentinel.
    payloads: Vec<Vec<u8>>,
    /// Index of the frame that carried `end_of_transfer`, once known.
    max_index: Option<usize>,
    /// Timestamp of the first frame of the transfer currently being accumulated.
    first_timestamp: Timestamp,
    /// Transfer-ID this instance is currently accepting.
    current_transfer_id: TransferId,
}

impl<F: FnMut(ReassemblyError)> Reassembler<F> {
    /// Creates a reassembler listening for transfers from `source_node_id`, discarding anything
    /// that would grow past `max_payload_size_bytes`, reporting anomalies through `on_error`.
    ///
    /// `source_node_id` and `max_payload_size_bytes` are unsigned, so the "negative parameter"
    /// failure mode the algorithm this was distilled from rejects at runtime is unrepresentable
    /// here; construction cannot fail.
    pub fn new(source_node_id: NodeId, max_payload_size_bytes: usize, on_error: F) -> Self {
        Self {
            source_node_id,
            max_payload_size_bytes,
            on_error,
            payloads: Vec::new(),
            max_index: None,
            first_timestamp: Timestamp::default(),
            current_transfer_id: 0,
        }
    }

    /// The remote node-ID this instance is listening for.
    pub fn source_node_id(&self) -> NodeId {
        self.source_node_id
    }

    /// Updates the reassembly state machine with a newly received frame.
    ///
    /// Returns a transfer if this frame completed one; returns `None` and updates internal state
    /// otherwise. Never blocks, never panics, never re-enters `on_error`.
    pub fn process_frame(
        &mut self,
        frame: Frame<'_>,
        transfer_id_timeout: Nanoseconds<u64>,
    ) -> Option<Transfer> {
        // (a) A multi-frame transfer cannot contain frames with no payload.
        if !frame.single_frame_transfer() && frame.payload.is_empty() {
            (self.on_error)(ReassemblyError::MultiframeEmptyFrame);
            return None;
        }

        // (b) Detect a new transfer: either a newer TID, or the TID timeout has elapsed.
        if frame.transfer_id > self.current_transfer_id
            || frame.timestamp.monotonic_since(&self.first_timestamp) > transfer_id_timeout
        {
            let preempted = !self.payloads.is_empty();
            self.restart(
                frame.timestamp,
                frame.transfer_id,
                preempted.then_some(ReassemblyError::MultiframeMissingFrames),
            );
        }

        // (c) Drop frames from non-matching (stale) transfers. Not an error.
        if frame.transfer_id < self.current_transfer_id {
            return None;
        }
        debug_assert_eq!(frame.transfer_id, self.current_transfer_id);

        // (d) Determine the max frame index for this transfer. A second, differing EOT frame is
        // a structural violation.
        if frame.end_of_transfer {
            if let Some(max_index) = self.max_index {
                if max_index != frame.index {
                    self.restart(
                        frame.timestamp,
                        frame.transfer_id + 1,
                        Some(ReassemblyError::MultiframeEotInconsistent),
                    );
                    return None;
                }
            }
            self.max_index = Some(frame.index);
        }

        // (e) Reject frames, or previously stored fragments, past the declared end of transfer.
        if let Some(max_index) = self.max_index {
            let stored_past_end = self.payloads.len().saturating_sub(1) > max_index;
            if frame.index > max_index || stored_past_end {
                self.restart(
                    frame.timestamp,
                    frame.transfer_id + 1,
                    Some(ReassemblyError::MultiframeEotMisplaced),
                );
                return None;
            }
        }

        // (f) Accept the payload. Duplicates overwrite; this is benign assuming duplicates carry
        // identical bytes, which the CRC ultimately verifies.
        if self.payloads.len() <= frame.index {
            self.payloads.resize(frame.index + 1, Vec::new());
        }
        self.payloads[frame.index] = frame.payload.to_vec();

        // (g) Don't let a babbling sender exhaust our memory quota.
        if self.pure_payload_size_bytes() > self.max_payload_size_bytes {
            self.restart(
                frame.timestamp,
                frame.transfer_id + 1,
                Some(ReassemblyError::PayloadSizeExceedsLimit),
            );
            return None;
        }

        // (h) Check if all frames are in. Single-frame transfers with empty payload are legal.
        if !self.is_complete() {
            return None;
        }

        let fragments = core::mem::take(&mut self.payloads);
        let result = finalize_transfer(
            self.first_timestamp,
            frame.priority,
            self.current_transfer_id,
            fragments,
            Some(self.source_node_id),
        );
        self.restart(
            frame.timestamp,
            frame.transfer_id + 1,
            result.is_none().then_some(ReassemblyError::MultiframeIntegrityError),
        );
        result
    }

    fn is_complete(&self) -> bool {
        match self.max_index {
            None => false,
            Some(0) => true,
            Some(max_index) => self
                .payloads
                .get(..=max_index)
                .is_some_and(|fragments| fragments.iter().all(|f| !f.is_empty())),
        }
    }

    /// Pure user-payload size held so far: the sum of stored fragment lengths, minus the CRC
    /// trailer once more than one fragment is held. May be meaningless (but never panics) while
    /// the transfer is still malformed.
    fn pure_payload_size_bytes(&self) -> usize {
        let total: usize = self.payloads.iter().map(Vec::len).sum();
        if self.payloads.len() > 1 {
            total.saturating_sub(crate::crc::CRC_SIZE_BYTES)
        } else {
            total
        }
    }

    /// Resets to await `transfer_id` starting at `timestamp`. If `error` is set, it is reported
    /// — together with a debug log of the pre-reset context — before the state is actually
    /// cleared, since the diagnostic value of that context disappears once it's gone.
    fn restart(&mut self, timestamp: Timestamp, transfer_id: TransferId, error: Option<ReassemblyError>) {
        if let Some(error) = error {
            log::debug!(
                "{error:?}: first_timestamp={:?} current_transfer_id={} max_index={:?} fragments={}/{}",
                self.first_timestamp,
                self.current_transfer_id,
                self.max_index,
                self.payloads.iter().filter(|f| !f.is_empty()).count(),
                self.payloads.len(),
            );
            (self.on_error)(error);
        }
        self.first_timestamp = timestamp;
        self.current_transfer_id = transfer_id;
        self.max_index = None;
        self.payloads.clear();
    }
}
