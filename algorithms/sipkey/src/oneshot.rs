//! Public API Layer
//!
//! Every entry point builds a fresh `SipState`, absorbs its input, and
//! finalizes. The integer-tuple fast paths produce exactly the tag the byte
//! path produces for the little-endian encoding of the same integers.

#![allow(clippy::many_single_char_names)]

use crate::kernels::constants::TAIL_LIMIT;
use crate::kernels::state::SipState;
use crate::types::{SipError, SipKey, Tag};
use subtle::ConstantTimeEq;

#[cfg(not(feature = "std"))]
use alloc::string::String;

// =============================================================================
// KEYED ENTRY POINTS
// =============================================================================

impl SipKey {
    /// Digest an arbitrary byte string.
    #[must_use]
    pub fn digest(&self, input: &[u8]) -> Tag {
        let mut s = SipState::new(self, input.len() as u64);
        s.absorb_bytes(input);
        s.finalize()
    }

    /// Digest one 64-bit word (length tag 8).
    #[must_use]
    pub const fn digest_1x64(&self, a: u64) -> Tag {
        let mut s = SipState::new(self, 8);
        s.compress(a);
        s.finalize()
    }

    /// Digest two 64-bit words (length tag 16).
    #[must_use]
    pub const fn digest_2x64(&self, a: u64, b: u64) -> Tag {
        let mut s = SipState::new(self, 16);
        s.compress(a);
        s.compress(b);
        s.finalize()
    }

    /// Digest three 64-bit words (length tag 24).
    #[must_use]
    pub const fn digest_3x64(&self, a: u64, b: u64, c: u64) -> Tag {
        let mut s = SipState::new(self, 24);
        s.compress(a);
        s.compress(b);
        s.compress(c);
        s.finalize()
    }

    /// Digest four 64-bit words (length tag 32).
    #[must_use]
    pub const fn digest_4x64(&self, a: u64, b: u64, c: u64, d: u64) -> Tag {
        let mut s = SipState::new(self, 32);
        s.compress(a);
        s.compress(b);
        s.compress(c);
        s.compress(d);
        s.finalize()
    }

    /// Digest one 32-bit word (length tag 4). The word is folded straight into
    /// the accumulator; no compression round runs before finalization.
    #[must_use]
    pub const fn digest_1x32(&self, a: u32) -> Tag {
        let mut s = SipState::new(self, 4);
        s.fold_tail(a as u64);
        s.finalize()
    }

    /// Digest three 32-bit words (length tag 12).
    ///
    /// `a` and `b` are packed as `b << 32 | a` and compressed; `c` is folded
    /// into the accumulator. `c` may use up to 56 bits; only values below
    /// 2^32 keep the result equal to the 12-byte little-endian byte path.
    ///
    /// # Errors
    /// Returns `SipError::TailOverflow` if `c >= 2^56`, since such a value
    /// would overwrite the length tag.
    pub const fn digest_3x32(&self, a: u32, b: u32, c: u64) -> Result<Tag, SipError> {
        if c >= TAIL_LIMIT {
            return Err(SipError::TailOverflow { value: c });
        }
        let mut s = SipState::new(self, 12);
        s.compress(((b as u64) << 32) | a as u64);
        s.fold_tail(c);
        Ok(s.finalize())
    }

    /// Verify a tag in constant time.
    #[must_use]
    pub fn verify(&self, input: &[u8], expected: &Tag) -> bool {
        self.digest(input).ct_eq(expected).into()
    }
}

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the tag of an arbitrary byte string.
///
/// # Errors
/// Returns `SipError::InvalidKeyLength` if `key` is not exactly 16 bytes.
///
/// # Example
/// ```rust
/// let tag = sipkey::digest(&[0u8; 16], b"hello")?;
/// assert_eq!(tag.len(), 8);
/// # Ok::<(), sipkey::SipError>(())
/// ```
#[inline]
pub fn digest(key: &[u8], input: &[u8]) -> Result<Tag, SipError> {
    Ok(SipKey::from_slice(key)?.digest(input))
}

// =============================================================================
// 64-BIT TUPLE FAST PATHS
// =============================================================================

/// Tag of one 64-bit word; equals `digest(key, &a.to_le_bytes())`.
///
/// # Errors
/// Returns `SipError::InvalidKeyLength` if `key` is not exactly 16 bytes.
#[inline]
pub fn digest_1x64(key: &[u8], a: u64) -> Result<Tag, SipError> {
    Ok(SipKey::from_slice(key)?.digest_1x64(a))
}

/// Tag of two 64-bit words.
///
/// # Errors
/// Returns `SipError::InvalidKeyLength` if `key` is not exactly 16 bytes.
///
/// # Example
/// ```rust
/// let key = [7u8; 16];
/// let mut bytes = Vec::new();
/// bytes.extend_from_slice(&1u64.to_le_bytes());
/// bytes.extend_from_slice(&2u64.to_le_bytes());
/// assert_eq!(sipkey::digest_2x64(&key, 1, 2)?, sipkey::digest(&key, &bytes)?);
/// # Ok::<(), sipkey::SipError>(())
/// ```
#[inline]
pub fn digest_2x64(key: &[u8], a: u64, b: u64) -> Result<Tag, SipError> {
    Ok(SipKey::from_slice(key)?.digest_2x64(a, b))
}

/// Tag of three 64-bit words.
///
/// # Errors
/// Returns `SipError::InvalidKeyLength` if `key` is not exactly 16 bytes.
#[inline]
pub fn digest_3x64(key: &[u8], a: u64, b: u64, c: u64) -> Result<Tag, SipError> {
    Ok(SipKey::from_slice(key)?.digest_3x64(a, b, c))
}

/// Tag of four 64-bit words.
///
/// # Errors
/// Returns `SipError::InvalidKeyLength` if `key` is not exactly 16 bytes.
#[inline]
pub fn digest_4x64(key: &[u8], a: u64, b: u64, c: u64, d: u64) -> Result<Tag, SipError> {
    Ok(SipKey::from_slice(key)?.digest_4x64(a, b, c, d))
}

// =============================================================================
// 32-BIT TUPLE FAST PATHS
// =============================================================================

/// Tag of one 32-bit word; equals `digest(key, &a.to_le_bytes())`.
///
/// # Errors
/// Returns `SipError::InvalidKeyLength` if `key` is not exactly 16 bytes.
#[inline]
pub fn digest_1x32(key: &[u8], a: u32) -> Result<Tag, SipError> {
    Ok(SipKey::from_slice(key)?.digest_1x32(a))
}

/// Tag of three 32-bit words, see [`SipKey::digest_3x32`].
///
/// # Errors
/// Returns `SipError::InvalidKeyLength` for a bad key, or
/// `SipError::TailOverflow` if `c >= 2^56`. The key is checked first.
#[inline]
pub fn digest_3x32(key: &[u8], a: u32, b: u32, c: u64) -> Result<Tag, SipError> {
    SipKey::from_slice(key)?.digest_3x32(a, b, c)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a tag in constant time (timing attack resistant).
///
/// # Errors
/// Returns `SipError::InvalidKeyLength` if `key` is not exactly 16 bytes.
///
/// # Example
/// ```rust
/// let key = [42u8; 16];
/// let tag = sipkey::digest(&key, b"packet")?;
/// assert!(sipkey::verify(&key, b"packet", &tag)?);
/// assert!(!sipkey::verify(&key, b"packex", &tag)?);
/// # Ok::<(), sipkey::SipError>(())
/// ```
pub fn verify(key: &[u8], input: &[u8], expected: &Tag) -> Result<bool, SipError> {
    Ok(SipKey::from_slice(key)?.verify(input, expected))
}

// =============================================================================
// HEX VIEW
// =============================================================================

/// Lowercase hex rendering of a tag (16 characters).
#[must_use]
pub fn to_hex(tag: &Tag) -> String {
    hex::encode(tag)
}
