//! Core of the Opossum cipher: an experimental substitution–permutation
//! network on 2048-bit blocks with 2048-bit keys.
//!
//! This crate provides:
//! - The fixed substitution table, its inverse, and the byte-position
//!   permutation.
//! - The key schedule expanding a 256-byte master key into per-round
//!   subkeys.
//! - Single-block encryption with a configurable round count.
//!
//! The construction is an educational/experimental primitive. The
//! implementation aims for clarity and exact, interoperable semantics
//! rather than constant-time guarantees; it should not be treated as
//! side-channel hardened or as a vetted cipher. Streaming over
//! arbitrary-length inputs lives in the companion CTR crate.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod sbox;
mod tables;

pub use crate::block::{rotate_left_bits, xor_in_place, Block, BLOCK_BYTES};
pub use crate::cipher::{Opossum, DEFAULT_ROUNDS};
pub use crate::error::CipherError;
pub use crate::key::{OpossumKey, RoundKeys, KEY_BYTES};
pub use crate::sbox::SBOX;
