//! Removes the trailing CRC bytes from a completed fragment list.

use alloc::vec::Vec;

use crate::crc::CRC_SIZE_BYTES;

/// Strips exactly `CRC_SIZE_BYTES` bytes from the tail of `fragments`, popping or shrinking
/// trailing entries as needed, in place. If the total length is less than `CRC_SIZE_BYTES`, the
/// result is empty. Trailing empty fragments are popped without consuming from the budget.
/// Preserves the order of whatever fragments remain.
pub(crate) fn trim_crc_tail(fragments: &mut Vec<Vec<u8>>) {
    let mut remaining = CRC_SIZE_BYTES;
    while remaining > 0 {
        let Some(last) = fragments.last_mut() else {
            break;
        };
        if last.len() <= remaining {
            remaining -= last.len();
            fragments.pop();
        } else {
            let new_len = last.len() - remaining;
            last.truncate(new_len);
            remaining = 0;
        }
    }
}
