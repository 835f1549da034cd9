//! Error taxonomy for key, IV, and block validation.

use core::fmt;

/// Errors raised by size validation.
///
/// Every variant is detected before any transformation begins; no
/// operation produces partial output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Key is not exactly 256 bytes.
    InvalidKeyLength,
    /// IV is not exactly 32 bytes.
    InvalidIvLength,
    /// Block-encrypt was handed a block that is not exactly 256 bytes.
    InvalidBlockLength,
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidKeyLength => {
                write!(f, "key must be exactly 256 bytes (2048 bits)")
            }
            CipherError::InvalidIvLength => {
                write!(f, "IV must be exactly 32 bytes (256 bits)")
            }
            CipherError::InvalidBlockLength => {
                write!(f, "block must be exactly 256 bytes (2048 bits)")
            }
        }
    }
}

impl std::error::Error for CipherError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_expected_sizes() {
        assert!(CipherError::InvalidKeyLength.to_string().contains("256 bytes"));
        assert!(CipherError::InvalidIvLength.to_string().contains("32 bytes"));
        assert!(CipherError::InvalidBlockLength.to_string().contains("256 bytes"));
    }
}
