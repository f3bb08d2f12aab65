//! Configuration for grids.

use ungrd_foundation::Result;
use ungrd_pool::PoolConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of entries a freshly created cell reserves room for.
pub const DEFAULT_CELL_RESERVE: usize = 50;

/// Configuration shared by all grid variants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Entries reserved in each newly created cell.
    pub cell_reserve: usize,

    /// Chunk sizing for pooled cell storage (dense grid only).
    pub pool: PoolConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_reserve: DEFAULT_CELL_RESERVE,
            pool: PoolConfig::default(),
        }
    }
}

impl GridConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that reserves nothing up front.
    ///
    /// Suits sparse distributions where most cells hold one or two entries.
    #[must_use]
    pub fn lean() -> Self {
        Self {
            cell_reserve: 0,
            ..Self::default()
        }
    }

    /// Builder method to set the per-cell reservation.
    #[must_use]
    pub fn with_cell_reserve(mut self, cell_reserve: usize) -> Self {
        self.cell_reserve = cell_reserve;
        self
    }

    /// Builder method to set the cell pool configuration.
    #[must_use]
    pub fn with_pool(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        self.pool.validate()
    }
}
