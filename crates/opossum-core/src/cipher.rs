//! Cipher context, key schedule, and single-block encryption.

use zeroize::Zeroize;

use crate::block::{Block, BLOCK_BYTES};
use crate::error::CipherError;
use crate::key::{OpossumKey, RoundKeys, KEY_BYTES};
use crate::round::{add_round_key, mix_groups, permute_bytes, round_transform, sub_bytes};
use crate::sbox::{invert, SBOX};
use crate::tables::row_shift_permutation;

/// Default number of rounds.
pub const DEFAULT_ROUNDS: usize = 160;

/// Cipher context.
///
/// Owns the substitution tables, the byte-position permutation, and the
/// round count. The context is immutable after construction and holds no
/// key material, so a single instance can serve many concurrent
/// encrypt/decrypt calls.
pub struct Opossum {
    sbox: [u8; 256],
    inv_sbox: [u8; 256],
    perm: [usize; BLOCK_BYTES],
    rounds: usize,
}

impl Opossum {
    /// Builds a context with the default round count.
    pub fn new() -> Self {
        Self::with_rounds(DEFAULT_ROUNDS)
    }

    /// Builds a context with an explicit round count.
    ///
    /// # Panics
    ///
    /// Panics if `rounds` is zero; one round is the defined minimum.
    pub fn with_rounds(rounds: usize) -> Self {
        assert!(rounds >= 1, "round count must be at least 1");
        Self {
            sbox: SBOX,
            inv_sbox: invert(&SBOX),
            perm: row_shift_permutation(),
            rounds,
        }
    }

    /// Number of rounds applied per block.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// The substitution table.
    pub fn sbox(&self) -> &[u8; 256] {
        &self.sbox
    }

    /// The inverse substitution table (`inv_sbox[sbox[i]] == i`).
    pub fn inv_sbox(&self) -> &[u8; 256] {
        &self.inv_sbox
    }

    /// Expands a master key into `rounds + 1` round keys.
    ///
    /// The first round key is the master key itself; every following key
    /// is derived from its predecessor by a 3-byte rotation, a sparse
    /// S-box pass, a round-constant injection, and an XOR with the
    /// predecessor.
    pub fn expand_key(&self, key: &OpossumKey) -> RoundKeys {
        let mut expanded = vec![0u8; (self.rounds + 1) * KEY_BYTES];
        expanded[..KEY_BYTES].copy_from_slice(key.as_bytes());

        for offset in (KEY_BYTES..(self.rounds + 1) * KEY_BYTES).step_by(KEY_BYTES) {
            let mut t = [0u8; KEY_BYTES];
            t.copy_from_slice(&expanded[offset - KEY_BYTES..offset]);
            t.rotate_left(3);
            for j in (0..KEY_BYTES).step_by(4) {
                t[j] = self.sbox[t[j] as usize];
            }
            t[0] ^= ((offset / KEY_BYTES) % 256) as u8;
            for (j, byte) in t.iter_mut().enumerate() {
                *byte ^= expanded[offset - KEY_BYTES + j];
            }
            expanded[offset..offset + KEY_BYTES].copy_from_slice(&t);
            t.zeroize();
        }

        let keys = expanded
            .chunks_exact(KEY_BYTES)
            .map(|chunk| {
                let mut round_key = [0u8; BLOCK_BYTES];
                round_key.copy_from_slice(chunk);
                round_key
            })
            .collect();
        expanded.zeroize();
        RoundKeys(keys)
    }

    /// Encrypts one 256-byte block under pre-expanded round keys.
    ///
    /// Fails with [`CipherError::InvalidBlockLength`] when `block` is not
    /// exactly 256 bytes.
    pub fn encrypt_block(
        &self,
        block: &[u8],
        round_keys: &RoundKeys,
    ) -> Result<Block, CipherError> {
        if block.len() != BLOCK_BYTES {
            return Err(CipherError::InvalidBlockLength);
        }
        debug_assert_eq!(round_keys.len(), self.rounds + 1);

        let mut state = [0u8; BLOCK_BYTES];
        state.copy_from_slice(block);

        add_round_key(&mut state, round_keys.get(0));

        for round in 1..self.rounds {
            sub_bytes(&mut state, &self.sbox);
            permute_bytes(&mut state, &self.perm);
            mix_groups(&mut state);
            round_transform(&mut state, round);
            add_round_key(&mut state, round_keys.get(round));
        }

        // The final round skips the group diffusion.
        sub_bytes(&mut state, &self.sbox);
        permute_bytes(&mut state, &self.perm);
        round_transform(&mut state, self.rounds);
        add_round_key(&mut state, round_keys.get(self.rounds));

        Ok(state)
    }
}

impl Default for Opossum {
    fn default() -> Self {
        Self::new()
    }
}
