//! Key types for the Opossum cipher.

use core::fmt;

use zeroize::Zeroize;

use crate::block::Block;
use crate::error::CipherError;

/// Size of the master key in bytes (2048 bits).
pub const KEY_BYTES: usize = 256;

/// Master key wrapper. The key material is scrubbed when the wrapper is
/// dropped.
#[derive(Clone)]
pub struct OpossumKey(pub [u8; KEY_BYTES]);

impl OpossumKey {
    /// Returns the raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_BYTES] {
        &self.0
    }
}

impl From<[u8; KEY_BYTES]> for OpossumKey {
    fn from(value: [u8; KEY_BYTES]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for OpossumKey {
    type Error = CipherError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_BYTES] = value
            .try_into()
            .map_err(|_| CipherError::InvalidKeyLength)?;
        Ok(Self(bytes))
    }
}

impl Drop for OpossumKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

// Key material stays out of debug output.
impl fmt::Debug for OpossumKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OpossumKey(..)")
    }
}

/// Expanded round keys (`rounds + 1` entries of 256 bytes). Scrubbed on
/// drop.
#[derive(Clone, PartialEq, Eq)]
pub struct RoundKeys(pub(crate) Vec<Block>);

impl RoundKeys {
    /// Returns the round key at the requested index (`0..=rounds`).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Number of round keys held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no round keys are held.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for RoundKeys {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
