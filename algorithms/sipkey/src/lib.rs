#![cfg_attr(not(feature = "std"), no_std)]

//! # Sipkey
//!
//! Keyed `SipHash-2-4` pseudorandom function producing 64-bit tags, with fast
//! paths for small fixed tuples of integers.
//!
//! # Byte order
//! Message bytes are absorbed little-endian, but the key words are decoded
//! **big-endian** and the tag is emitted **big-endian**. Tags therefore do not
//! match the published `SipHash-2-4` vectors directly: reverse each 8-byte half
//! of the key and the 8 tag bytes to translate between the two conventions.

//! # Usage
//! ```rust
//! use sipkey::SipKey;
//!
//! // 1. One-shot, key validated per call
//! let tag = sipkey::digest(b"0123456789abcdef", b"GET /index.html")?;
//! println!("{}", sipkey::to_hex(&tag));
//!
//! // 2. Integer tuples (e.g. a flow 4-tuple)
//! let flow = sipkey::digest_4x64(b"0123456789abcdef", 10, 20, 443, 6)?;
//!
//! // 3. Validate once, hash many
//! let key = SipKey::from_slice(b"0123456789abcdef")?;
//! assert_eq!(key.digest_4x64(10, 20, 443, 6), flow);
//! assert!(key.verify(b"GET /index.html", &tag));
//! # Ok::<(), sipkey::SipError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
mod kernels;
mod oneshot;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use engine::batch::digest_batch;
pub use kernels::constants::{KEY_SIZE, TAG_SIZE};
pub use oneshot::{
    digest, digest_1x32, digest_1x64, digest_2x64, digest_3x32, digest_3x64, digest_4x64, to_hex,
    verify,
};
pub use types::{SipError, SipKey, Tag};
