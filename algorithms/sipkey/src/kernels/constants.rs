//! Sipkey Kernel Constants
//!
//! The four initialization words are the ASCII strings
//! `"somepseudorandomlygeneratedbytes"` split into 64-bit big-endian chunks,
//! unchanged from the published `SipHash` construction.

// =============================================================================
// ROUNDS
// =============================================================================

/// Compression rounds applied per absorbed 64-bit word.
pub const C_ROUNDS: usize = 2;

/// Finalization rounds applied after the `FINAL_XOR` injection.
pub const D_ROUNDS: usize = 4;

// =============================================================================
// INITIALIZATION CONSTANTS
// =============================================================================

pub const IV0: u64 = 0x736f_6d65_7073_6575; // "somepseu"
pub const IV1: u64 = 0x646f_7261_6e64_6f6d; // "dorandom"
pub const IV2: u64 = 0x6c79_6765_6e65_7261; // "lygenera"
pub const IV3: u64 = 0x7465_6462_7974_6573; // "tedbytes"

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Key size in bytes (two 64-bit words).
pub const KEY_SIZE: usize = 16;

/// Tag (digest) size in bytes.
pub const TAG_SIZE: usize = 8;

/// Bytes absorbed per compression step.
pub const BLOCK_SIZE: usize = 8;

/// Bit position of the length tag inside the accumulator word.
pub const LENGTH_SHIFT: u32 = 56;

/// Values folded directly into the accumulator must stay below this bound,
/// otherwise they overwrite the length tag.
pub const TAIL_LIMIT: u64 = 1 << LENGTH_SHIFT;

/// Domain-separation constant injected into `v2` before the final rounds.
pub const FINAL_XOR: u64 = 0xff;
