//! Per-call `SipHash-2-4` state.
//!
//! A `SipState` lives for exactly one digest computation: it is created by the
//! preamble, mutated by compression steps and accumulator folds, and consumed
//! by `finalize`. It is a plain `Copy` value kept on the stack.

use crate::kernels::constants::{
    BLOCK_SIZE, C_ROUNDS, D_ROUNDS, FINAL_XOR, IV0, IV1, IV2, IV3, LENGTH_SHIFT, TAG_SIZE,
};
use crate::types::SipKey;

// =============================================================================
// STATE
// =============================================================================

/// Internal per-call state: four permutation words plus the accumulator `b`.
///
/// The top byte of `b` carries the input length (mod 256); the low 56 bits
/// collect whatever is folded in before finalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SipState {
    pub v0: u64,
    pub v1: u64,
    pub v2: u64,
    pub v3: u64,
    pub b: u64,
}

impl SipState {
    // =========================================================================
    // PREAMBLE
    // =========================================================================

    /// Initialize state from the key and the total input length in bytes.
    #[inline]
    pub const fn new(key: &SipKey, len: u64) -> Self {
        let (k0, k1) = (key.k0(), key.k1());
        Self {
            v0: IV0 ^ k0,
            v1: IV1 ^ k1,
            v2: IV2 ^ k0,
            v3: IV3 ^ k1,
            b: len << LENGTH_SHIFT,
        }
    }

    // =========================================================================
    // ROUND FUNCTION
    // =========================================================================

    /// One ARX round. Operation order is fixed.
    #[inline(always)]
    #[allow(clippy::inline_always)]
    pub const fn sipround(&mut self) {
        self.v0 = self.v0.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(13);
        self.v1 ^= self.v0;
        self.v0 = self.v0.rotate_left(32);

        self.v2 = self.v2.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(16);
        self.v3 ^= self.v2;

        self.v0 = self.v0.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(21);
        self.v3 ^= self.v0;

        self.v2 = self.v2.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(17);
        self.v1 ^= self.v2;
        self.v2 = self.v2.rotate_left(32);
    }

    // =========================================================================
    // ABSORPTION
    // =========================================================================

    /// Absorb one 64-bit message word.
    #[inline]
    pub const fn compress(&mut self, m: u64) {
        self.v3 ^= m;
        let mut i = 0;
        while i < C_ROUNDS {
            self.sipround();
            i += 1;
        }
        self.v0 ^= m;
    }

    /// OR a value into the accumulator below the length tag.
    ///
    /// Callers guarantee `value < TAIL_LIMIT`.
    #[inline]
    pub const fn fold_tail(&mut self, value: u64) {
        self.b |= value;
    }

    /// Absorb an arbitrary byte string: full 8-byte words little-endian, then
    /// the trailing 0..=7 bytes packed little-endian into the accumulator.
    pub fn absorb_bytes(&mut self, data: &[u8]) {
        let blocks = data.chunks_exact(BLOCK_SIZE);
        let rest = blocks.remainder();

        for block in blocks {
            let mut word = [0u8; BLOCK_SIZE];
            word.copy_from_slice(block);
            self.compress(u64::from_le_bytes(word));
        }

        self.fold_tail(pack_tail(rest));
    }

    // =========================================================================
    // POSTAMBLE
    // =========================================================================

    /// Run the 2-then-4 finalization schedule and extract the big-endian tag.
    #[inline]
    pub const fn finalize(mut self) -> [u8; TAG_SIZE] {
        self.v3 ^= self.b;
        let mut i = 0;
        while i < C_ROUNDS {
            self.sipround();
            i += 1;
        }
        self.v0 ^= self.b;

        self.v2 ^= FINAL_XOR;
        let mut i = 0;
        while i < D_ROUNDS {
            self.sipround();
            i += 1;
        }

        ((self.v0 ^ self.v1) ^ (self.v2 ^ self.v3)).to_be_bytes()
    }
}

// =============================================================================
// INTERNAL HELPERS
// =============================================================================

/// Pack up to 7 trailing bytes little-endian: byte `i` lands at bit `8 * i`.
#[inline]
fn pack_tail(rest: &[u8]) -> u64 {
    debug_assert!(rest.len() < BLOCK_SIZE);
    rest.iter()
        .enumerate()
        .fold(0u64, |acc, (i, &byte)| acc | (u64::from(byte) << (8 * i)))
}
