//! Batch Digest Engine
//!
//! Digests many independent inputs under one key. Each input gets its own
//! `SipState`, so items can be spread across threads with no coordination
//! (parallel via Rayon if `multithread` feature enabled, otherwise serial).

use crate::types::{SipError, SipKey, Tag};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// BATCH API
// =============================================================================

impl SipKey {
    /// Digest every input; `out[i] == self.digest(inputs[i])`.
    pub fn digest_batch<I>(&self, inputs: &[I]) -> Vec<Tag>
    where
        I: AsRef<[u8]> + Sync,
    {
        inputs.process_items(|input| self.digest(input.as_ref()))
    }

    /// Digest a batch of 64-bit word pairs (e.g. flow or packet tuples).
    pub fn digest_batch_2x64(&self, pairs: &[(u64, u64)]) -> Vec<Tag> {
        pairs.process_items(|&(a, b)| self.digest_2x64(a, b))
    }
}

/// Digest many byte strings under one key, validated once.
///
/// Output order matches input order.
///
/// # Errors
/// Returns `SipError::InvalidKeyLength` if `key` is not exactly 16 bytes.
///
/// # Example
/// ```rust
/// let key = [1u8; 16];
/// let tags = sipkey::digest_batch(&key, &[b"a".as_slice(), b"bc".as_slice()])?;
/// assert_eq!(tags[1], sipkey::digest(&key, b"bc")?);
/// # Ok::<(), sipkey::SipError>(())
/// ```
pub fn digest_batch<I>(key: &[u8], inputs: &[I]) -> Result<Vec<Tag>, SipError>
where
    I: AsRef<[u8]> + Sync,
{
    Ok(SipKey::from_slice(key)?.digest_batch(inputs))
}

// =============================================================================
// INTERNAL HELPERS
// =============================================================================

/// Helper for feature-agnostic item processing
trait ItemProcessor<T> {
    fn process_items<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&T) -> R + Sync + Send,
        R: Send;
}

impl<T: Sync> ItemProcessor<T> for &[T] {
    fn process_items<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_iter().map(f).collect()
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.iter().map(f).collect()
        }
    }
}
