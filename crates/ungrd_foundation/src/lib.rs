//! Core types for the ungrd uniform grids.
//!
//! This crate provides:
//! - [`Coordinate`] and [`Position`] - N-dimensional integer grid positions
//! - [`Entry`] - Externally owned entry identifiers
//! - [`NdIndexing`] - Row-major N-d ↔ linear index conversion
//! - [`FixedBitSet`] - Fixed-capacity bitset for slot tracking
//! - [`HashMap`], [`HashSet`], [`SmallSortSet`] - Container building blocks
//! - [`Error`] - Error types shared by the pool and grid layers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bitset;
pub mod collections;
pub mod coord;
pub mod entry;
pub mod error;
pub mod indexing;

pub use bitset::FixedBitSet;
pub use collections::{HashMap, HashSet, SmallSortSet};
pub use coord::{
    Coordinate, Dim, Position, componentwise_max, componentwise_min, grid_position,
    most_negative, most_positive,
};
pub use entry::Entry;
pub use error::{Error, ErrorKind, Result};
pub use indexing::{NdIndex, NdIndexing};
