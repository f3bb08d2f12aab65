//! Uniform spatial-hashing grids for ungrd.
//!
//! A grid maps integer positions to the entries currently located there.
//! Three variants share the read-side contract ([`GridQuery`]) and differ in
//! storage topology:
//!
//! - [`CompactGrid`] - Hash map of positions to cells; one cell per entry
//! - [`DenseGrid`] - Flat array over a bounding box; one cell per entry
//! - [`CompactMultiGrid`] - Hash map of positions to cells; an entry may
//!   occupy many cells
//!
//! The single-cell variants also implement [`UniformGrid`], which offers a
//! full rebuild and a differential update driven by `(entry, position)`
//! pairs.
//!
//! # Example
//!
//! ```
//! use ungrd_grid::{CompactGrid, GridQuery, UniformGrid};
//!
//! let mut grid: CompactGrid<u32, i32, 3> = CompactGrid::new();
//! grid.update([(0, [0, 0, 0]), (1, [0, 0, 0]), (2, [4, 0, -1])]);
//! grid.differential_update([(1, [4, 0, -1])], [(1, [0, 0, 0])]);
//!
//! assert_eq!(grid.entries_at(&[0, 0, 0]), &[0]);
//! assert_eq!(grid.count_filled_cells(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cell;
pub mod compact;
pub mod config;
pub mod dense;
pub mod grid;
pub mod multi;

pub use cell::Cell;
pub use compact::{CellIndex, CompactGrid, GridState, SENTINEL_CELL};
pub use config::{DEFAULT_CELL_RESERVE, GridConfig};
pub use dense::DenseGrid;
pub use grid::{GridQuery, UniformGrid};
pub use multi::CompactMultiGrid;
