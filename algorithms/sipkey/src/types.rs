//! Shared types used across the Sipkey library.

use crate::kernels::constants::{KEY_SIZE, TAG_SIZE, TAIL_LIMIT};
use core::fmt;
#[cfg(feature = "std")]
use std::error;

/// An 8-byte authentication tag (big-endian encoding of the final state).
pub type Tag = [u8; TAG_SIZE];

// =============================================================================
// KEY
// =============================================================================

/// A validated 16-byte key, split into two big-endian 64-bit words.
///
/// Holding a `SipKey` proves the length check already happened, so every
/// digest method on it is infallible (except `digest_3x32`, whose third word
/// is range-checked).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SipKey {
    k0: u64,
    k1: u64,
}

impl SipKey {
    /// Build a key from exactly 16 bytes.
    ///
    /// Bytes `0..8` form `k0` and bytes `8..16` form `k1`, each decoded
    /// big-endian.
    #[must_use]
    pub const fn new(bytes: [u8; KEY_SIZE]) -> Self {
        let [a0, a1, a2, a3, a4, a5, a6, a7, b0, b1, b2, b3, b4, b5, b6, b7] = bytes;
        Self {
            k0: u64::from_be_bytes([a0, a1, a2, a3, a4, a5, a6, a7]),
            k1: u64::from_be_bytes([b0, b1, b2, b3, b4, b5, b6, b7]),
        }
    }

    /// Build a key from an arbitrary slice.
    ///
    /// # Errors
    /// Returns `SipError::InvalidKeyLength` unless `bytes.len() == 16`.
    /// No truncation or padding is ever applied.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SipError> {
        let arr: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| SipError::InvalidKeyLength {
                actual: bytes.len(),
            })?;
        Ok(Self::new(arr))
    }

    /// First key word (bytes `0..8`, big-endian).
    #[must_use]
    pub const fn k0(&self) -> u64 {
        self.k0
    }

    /// Second key word (bytes `8..16`, big-endian).
    #[must_use]
    pub const fn k1(&self) -> u64 {
        self.k1
    }
}

impl From<[u8; KEY_SIZE]> for SipKey {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl TryFrom<&[u8]> for SipKey {
    type Error = SipError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

// Key material never reaches logs or panic messages.
impl fmt::Debug for SipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SipKey").finish_non_exhaustive()
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Precondition violations detected before any state is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SipError {
    /// The key was not exactly 16 bytes long.
    InvalidKeyLength {
        /// Length of the rejected key in bytes.
        actual: usize,
    },
    /// A value folded into the accumulator would overwrite the length tag.
    TailOverflow {
        /// The rejected value.
        value: u64,
    },
}

impl fmt::Display for SipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength { actual } => write!(
                f,
                "invalid key length: expected {KEY_SIZE} bytes, got {actual}"
            ),
            Self::TailOverflow { value } => write!(
                f,
                "tail word {value:#x} does not fit below the length tag (limit {TAIL_LIMIT:#x})"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for SipError {}
