//! Black-box coverage of the reassembler's public contract, exercised through the crate's
//! exported API only — no access to internal reassembly state.

#[cfg(test)]
mod tests {
    extern crate cyphal_reassembly as cyphal;

    use cyphal::{construct_anonymous_transfer, Frame, Priority, ReassemblyError, Reassembler, Timestamp};
    use embedded_time::duration::Nanoseconds;

    const HORSE: &[u8] = b"He thought about the Horse: how was she doing there, in the fog?";

    fn timeout() -> Nanoseconds<u64> {
        Nanoseconds::new(1_000_000_000)
    }

    fn ts(ns: u64) -> Timestamp {
        Timestamp::new(ns, ns)
    }

    fn frame(transfer_id: u64, index: usize, eot: bool, t_ns: u64, payload: &[u8]) -> Frame<'_> {
        Frame {
            timestamp: ts(t_ns),
            priority: Priority::Nominal,
            transfer_id,
            index,
            end_of_transfer: eot,
            payload,
        }
    }

    fn crc_bytes(payload: &[u8]) -> [u8; 2] {
        let mut crc = cyphal::crc::TransferCrc::new();
        crc.digest(payload);
        crc.value_as_bytes()
    }

    #[test]
    fn oversized_single_frame_transfer_is_rejected() {
        // The size ceiling applies to every frame, single-frame transfers included — a lone
        // fragment still has its length measured against `max_payload_size_bytes` in step (g).
        let mut errors = Vec::new();
        let mut r = Reassembler::new(9, 4, |e| errors.push(e));
        assert!(r.process_frame(frame(0, 0, true, 0, HORSE), timeout()).is_none());
        assert_eq!(errors, vec![ReassemblyError::PayloadSizeExceedsLimit]);
    }

    #[test]
    fn permutation_of_frame_arrival_order_does_not_affect_the_result() {
        let crc = crc_bytes(HORSE);
        let mut tail = HORSE[30..].to_vec();
        tail.extend_from_slice(&crc);
        let middle = HORSE[15..30].to_vec();
        let head = HORSE[..15].to_vec();

        let orderings: [[(usize, &[u8]); 3]; 2] = [
            [(0, &head), (1, &middle), (2, &tail)],
            [(2, &tail), (0, &head), (1, &middle)],
        ];

        for (run, ordering) in orderings.iter().enumerate() {
            let mut errors = Vec::new();
            let mut r = Reassembler::new(1, 1000, |e| errors.push(e));
            let mut result = None;
            for &(index, payload) in ordering {
                let eot = index == 2;
                result = r.process_frame(frame(run as u64, index, eot, index as u64, payload), timeout());
            }
            let transfer = result.expect("all three fragments were delivered");
            assert_eq!(transfer.payload_len(), HORSE.len(), "run {run}");
            assert!(errors.is_empty(), "run {run}");
        }
    }

    #[test]
    fn anonymous_transfer_never_needs_a_reassembler() {
        let f = frame(0, 0, true, 0, HORSE);
        let t = construct_anonymous_transfer(&f).expect("single-frame, so it qualifies as anonymous");
        assert_eq!(t.source_node_id, None);
        assert_eq!(t.payload_len(), HORSE.len());
    }

    #[test]
    fn anonymous_multiframe_attempt_is_rejected() {
        let f = frame(0, 0, false, 0, HORSE);
        assert!(construct_anonymous_transfer(&f).is_none());
    }

    #[test]
    fn babbling_sender_is_cut_off_and_does_not_poison_later_transfers() {
        let mut errors: Vec<ReassemblyError> = Vec::new();
        let mut r = Reassembler::new(3, 8, |e| errors.push(e));
        assert!(r
            .process_frame(frame(0, 0, false, 0, b"way too much data"), timeout())
            .is_none());
        assert_eq!(errors, vec![ReassemblyError::PayloadSizeExceedsLimit]);

        errors.clear();
        let t = r
            .process_frame(frame(1, 0, true, 1, b"ok"), timeout())
            .expect("the oversized transfer must not prevent a later well-formed one");
        assert_eq!(t.fragmented_payload, vec![b"ok".to_vec()]);
        assert!(errors.is_empty());
    }

    #[test]
    fn retransmitted_duplicate_fragment_does_not_break_reassembly() {
        let crc = crc_bytes(HORSE);
        let mut tail = HORSE[30..].to_vec();
        tail.extend_from_slice(&crc);

        let mut errors = Vec::new();
        let mut r = Reassembler::new(1, 1000, |e| errors.push(e));
        assert!(r.process_frame(frame(4, 0, false, 0, &HORSE[..30]), timeout()).is_none());
        // A duplicate of the same fragment, re-sent before the completing frame arrives.
        assert!(r.process_frame(frame(4, 0, false, 1, &HORSE[..30]), timeout()).is_none());
        let t = r
            .process_frame(frame(4, 1, true, 2, &tail), timeout())
            .expect("duplicate fragment must not block completion");
        assert_eq!(t.payload_len(), HORSE.len());
        assert!(errors.is_empty());
    }
}
