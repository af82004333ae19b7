//! # Cyphal transfer reassembly
//!
//! Reassembles OpenCyphal/UAVCAN v1 transfers out of frames received over a high-overhead
//! transport (UDP, serial, IEEE 802.15.4, or any other medium where a frame is cheap enough that
//! it doesn't need the tail-byte/toggle-bit tricks CAN relies on).
//!
//! One [`Reassembler`] tracks a single remote source node. It accepts frames in whatever order
//! they arrive, tolerates duplicates and retransmissions, and emits a [`Transfer`] only once a
//! complete payload has passed its CRC check. Frames from a node with no identity at all (an
//! anonymous sender) never need reassembly state to begin with — see
//! [`construct_anonymous_transfer`].
//!
//! This crate has no opinion on what transport the frames came from, how sessions are keyed to
//! node-IDs, or what happens to a transfer once it's been reassembled. It covers exactly the
//! reassembly state machine.
#![no_std]

#[allow(unused_imports)]
#[cfg(feature = "std")]
#[macro_use]
extern crate std;

#[macro_use]
extern crate num_derive;

extern crate alloc;

pub mod anonymous;
pub mod crc;
pub mod frame;
pub mod reassembly;
pub mod time;
pub mod transfer;
pub mod types;

pub use anonymous::construct_anonymous_transfer;
pub use crc::CRC_SIZE_BYTES;
pub use frame::Frame;
pub use reassembly::{Reassembler, ReassemblyError};
pub use time::Timestamp;
pub use transfer::Transfer;
pub use types::{NodeId, Priority, TransferId};
