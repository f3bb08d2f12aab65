//! ungrd - Uniform spatial-hashing grids
//!
//! This crate re-exports all layers of the ungrd system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: ungrd_grid        — CompactGrid, DenseGrid, CompactMultiGrid
//! Layer 1: ungrd_pool        — Chunked object pool with stable handles
//! Layer 0: ungrd_foundation  — Core types (Position, Entry, NdIndexing, Error)
//! ```

pub use ungrd_foundation as foundation;
pub use ungrd_grid as grid;
pub use ungrd_pool as pool;
