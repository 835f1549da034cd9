//! Round transformations for the Opossum block primitive.

use crate::block::{rotate_left_bits, xor_in_place, Block, BLOCK_BYTES};

/// Bytes per diffusion group; the block splits into 16 such groups.
const GROUP_BYTES: usize = 16;

/// Applies the substitution table to every state byte.
#[inline]
pub fn sub_bytes(state: &mut Block, sbox: &[u8; 256]) {
    for byte in state.iter_mut() {
        *byte = sbox[*byte as usize];
    }
}

/// Moves every byte to its destination under the position permutation.
pub fn permute_bytes(state: &mut Block, perm: &[usize; BLOCK_BYTES]) {
    let mut tmp = [0u8; BLOCK_BYTES];
    for (i, &dest) in perm.iter().enumerate() {
        tmp[dest] = state[i];
    }
    *state = tmp;
}

/// Intra-group diffusion over 16 groups of 16 consecutive bytes.
///
/// Each byte is XORed with the bit-rotated successor and the predecessor
/// of its group, both read from a snapshot taken before the group is
/// touched. Reading live neighbours instead would change the cipher.
pub fn mix_groups(state: &mut Block) {
    for group in 0..BLOCK_BYTES / GROUP_BYTES {
        let start = group * GROUP_BYTES;
        let mut snapshot = [0u8; GROUP_BYTES];
        snapshot.copy_from_slice(&state[start..start + GROUP_BYTES]);
        for i in 0..GROUP_BYTES {
            let next = snapshot[(i + 1) % GROUP_BYTES];
            state[start + i] ^= next.rotate_left(3);
            state[start + i] ^= snapshot[(i + GROUP_BYTES - 1) % GROUP_BYTES];
        }
    }
}

/// Round-dependent mixing: a whole-state bit rotation followed by a
/// positional mask.
///
/// The rotation distance is `(round mod 8) + 1`, so the bit shift stays
/// in `[1, 7]` or falls on a whole-byte boundary.
pub fn round_transform(state: &mut Block, round: usize) {
    let rot = (round % 8) + 1;
    rotate_left_bits(state, rot);
    let x = (round * 17 + 83) % 256;
    for (i, byte) in state.iter_mut().enumerate() {
        *byte ^= ((x + i) % 256) as u8;
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
