//! Capability boundary to the erasure-coding block generator.

/// Block, stream and generator contracts.
pub mod block;
