//! `SipHash-2-4` Kernel
//!
//! Constants and the per-call permutation state shared by every entry point.

pub mod constants;
pub mod state;
