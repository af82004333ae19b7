//! The transfer CRC: CRC-16/CCITT-FALSE, incrementally absorbed across fragment boundaries.

use crc_any::CRCu16;

/// Size in bytes of the transfer CRC trailer appended to the last frame of a multi-frame
/// transfer.
pub const CRC_SIZE_BYTES: usize = 2;

/// Incremental CRC-16/CCITT-FALSE accumulator with a residue check.
#[derive(Clone)]
pub struct TransferCrc(CRCu16);

impl TransferCrc {
    pub fn new() -> Self {
        Self(CRCu16::crc16ccitt_false())
    }

    /// Absorbs one fragment into the running CRC.
    pub fn digest(&mut self, bytes: &[u8]) {
        self.0.digest(bytes);
    }

    /// Absorbs an ordered sequence of fragments into the running CRC.
    pub fn digest_fragments<'f, I>(&mut self, fragments: I)
    where
        I: IntoIterator<Item = &'f [u8]>,
    {
        for fragment in fragments {
            self.digest(fragment);
        }
    }

    /// The final CRC value, 16 bits.
    pub fn value(&mut self) -> u16 {
        self.0.get_crc()
    }

    /// The final CRC value as 2 little-endian bytes, as appended on the wire.
    pub fn value_as_bytes(&mut self) -> [u8; CRC_SIZE_BYTES] {
        self.value().to_le_bytes()
    }

    /// True iff the register has collapsed to the algorithm's residue constant (`0x0000` for
    /// CRC-16/CCITT-FALSE). Intended to be called after digesting a payload together with its
    /// own appended CRC bytes.
    pub fn check_residue(mut self) -> bool {
        self.0.get_crc() == 0
    }
}

impl Default for TransferCrc {
    fn default() -> Self {
        Self::new()
    }
}
