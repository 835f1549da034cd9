//! Opossum: an experimental 2048-bit SPN block cipher with a CTR
//! streaming mode.
//!
//! This umbrella crate re-exports the core block primitive
//! ([`opossum_core`]) and the counter-mode streaming driver
//! ([`opossum_ctr`]). It is a research/toy construction — the semantics
//! are exact and interoperable, but no security claims are made.
//!
//! ```
//! use opossum::OpossumCtr;
//!
//! let ctr = OpossumCtr::new();
//! let key = [0x42u8; 256];
//! let iv = [0x24u8; 32];
//!
//! let ciphertext = ctr.encrypt(b"hello opossum", &key, &iv).unwrap();
//! let plaintext = ctr.decrypt(&ciphertext, &key, &iv).unwrap();
//! assert_eq!(plaintext, b"hello opossum");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub use opossum_core::{
    rotate_left_bits, xor_in_place, Block, CipherError, Opossum, OpossumKey, RoundKeys,
    BLOCK_BYTES, DEFAULT_ROUNDS, KEY_BYTES, SBOX,
};
pub use opossum_ctr::{OpossumCtr, IV_BYTES};
