//! Counter-mode streaming driver for the Opossum block cipher.
//!
//! CTR mode turns the 2048-bit block primitive into a length-preserving
//! stream cipher: successive counter blocks are encrypted and the
//! resulting keystream is XORed against the input. Encryption and
//! decryption are the same operation, so ciphertexts round-trip without
//! a separate decryption algorithm.
//!
//! The counter block reserves its first 32 bytes for the caller-supplied
//! IV; the remaining 224 bytes form a big-endian counter field. Callers
//! transport the IV out-of-band — the output carries no framing, nonce,
//! or authentication tag.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use opossum_core::{CipherError, Opossum, OpossumKey, BLOCK_BYTES};
use zeroize::Zeroize;

/// Size of the caller-supplied IV in bytes (256 bits).
pub const IV_BYTES: usize = 32;

/// CTR driver wrapping an immutable cipher context.
///
/// The driver itself holds no key material; keys are supplied per call
/// and the derived round keys are scrubbed before the call returns.
pub struct OpossumCtr {
    cipher: Opossum,
}

impl OpossumCtr {
    /// Builds a driver with the default round count.
    pub fn new() -> Self {
        Self {
            cipher: Opossum::new(),
        }
    }

    /// Builds a driver with an explicit round count.
    ///
    /// # Panics
    ///
    /// Panics if `rounds` is zero; one round is the defined minimum.
    pub fn with_rounds(rounds: usize) -> Self {
        Self {
            cipher: Opossum::with_rounds(rounds),
        }
    }

    /// Wraps an existing cipher context.
    pub fn from_cipher(cipher: Opossum) -> Self {
        Self { cipher }
    }

    /// The wrapped cipher context.
    pub fn cipher(&self) -> &Opossum {
        &self.cipher
    }

    /// Encrypts `data` under a 256-byte key and a 32-byte IV.
    ///
    /// The output has the same length as the input; a zero-length input
    /// yields a zero-length output without invoking the block primitive.
    /// Fails with [`CipherError::InvalidKeyLength`] or
    /// [`CipherError::InvalidIvLength`] before touching the data.
    pub fn encrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        let key = OpossumKey::try_from(key)?;
        if iv.len() != IV_BYTES {
            return Err(CipherError::InvalidIvLength);
        }
        let round_keys = self.cipher.expand_key(&key);

        let mut output = vec![0u8; data.len()];
        let mut counter = [0u8; BLOCK_BYTES];
        counter[..IV_BYTES].copy_from_slice(iv);

        let mut pos = 0;
        while pos < data.len() {
            let mut keystream = self.cipher.encrypt_block(&counter, &round_keys)?;
            let n = BLOCK_BYTES.min(data.len() - pos);
            for j in 0..n {
                output[pos + j] = data[pos + j] ^ keystream[j];
            }
            keystream.zeroize();
            pos += n;
            increment_counter(&mut counter);
        }

        counter.zeroize();
        Ok(output)
    }

    /// Decrypts `data`; CTR is an involution, so this is [`Self::encrypt`].
    pub fn decrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.encrypt(data, key, iv)
    }
}

impl Default for OpossumCtr {
    fn default() -> Self {
        Self::new()
    }
}

/// Increments the big-endian counter field (`counter[32..256)`) by one.
///
/// The carry runs from index 255 toward index 32 and never crosses into
/// the IV prefix; a full wrap silently restarts the field from zero.
fn increment_counter(counter: &mut [u8; BLOCK_BYTES]) {
    for i in (IV_BYTES..BLOCK_BYTES).rev() {
        counter[i] = counter[i].wrapping_add(1);
        if counter[i] != 0 {
            break;
        }
    }
}
