//! Chunked, handle-addressed object pool for ungrd.
//!
//! This crate provides:
//! - [`ObjectPool`] - Chunked allocator with stable object slots
//! - [`PoolHandle`] - Copyable `(chunk, slot)` address of a pooled object
//! - [`Pooled`] / [`SharedPooled`] - Owners that release their slot on drop
//! - [`PoolConfig`] - Chunk sizing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod chunk;
pub mod config;
pub mod handle;
pub mod owned;
pub mod pool;

pub use config::{DEFAULT_CHUNK_BYTES, PoolConfig};
pub use handle::PoolHandle;
pub use owned::{Pooled, SharedPool, SharedPooled, shared_pool};
pub use pool::ObjectPool;
