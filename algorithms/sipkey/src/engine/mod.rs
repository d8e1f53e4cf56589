//! Execution Engine
//!
//! Batch processing over many independent inputs.

pub mod batch;
