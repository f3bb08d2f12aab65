//! Integration tests for grid and pool configuration

use ungrd::grid::{CompactGrid, DenseGrid, GridConfig, GridQuery, UniformGrid};
use ungrd::pool::PoolConfig;

#[test]
fn lean_config_builds_working_grids() {
    let mut compact: CompactGrid<u16, i8, 1> = CompactGrid::with_config(GridConfig::lean()).unwrap();
    compact.update([(0, [-128]), (1, [127])]);
    assert_eq!(compact.count_filled_cells(), 2);

    let mut dense: DenseGrid<u16, i8, 1> = DenseGrid::with_config(GridConfig::lean()).unwrap();
    dense.update([(0, [-128]), (1, [127])]);
    assert_eq!(dense.extents(), [256]);
    assert_eq!(dense.count_filled_cells(), 2);
}

#[test]
fn dense_grid_uses_configured_pool() {
    let config = GridConfig::new().with_pool(PoolConfig::new().with_chunk_bytes(1));
    let mut grid: DenseGrid<u32, i32, 2> = DenseGrid::with_config(config).unwrap();
    assert_eq!(grid.pool().chunk_capacity(), 1);

    grid.update([(0, [0, 0]), (1, [0, 1]), (2, [1, 1])]);
    assert_eq!(grid.pool().count_chunks(), 3);
    assert_eq!(grid.pool().count_used_objects(), 3);

    grid.update([(0, [0, 0]), (1, [0, 1]), (2, [1, 1])]);
    assert_eq!(grid.pool().count_chunks(), 3);
    assert_eq!(grid.pool().count_used_objects(), 3);
}

#[test]
fn invalid_pool_config_is_rejected() {
    let config = GridConfig::new().with_pool(PoolConfig::new().with_chunk_bytes(0));
    assert!(DenseGrid::<u32, i32, 2>::with_config(config.clone()).is_err());
    assert!(CompactGrid::<u32, i32, 2>::with_config(config).is_err());
}

#[test]
fn cell_reserve_is_configurable() {
    let config = GridConfig::new().with_cell_reserve(4);
    assert_eq!(config.cell_reserve, 4);

    let grid: CompactGrid<u32, i32, 3> = CompactGrid::with_config(config.clone()).unwrap();
    assert_eq!(grid.config(), &config);
}
