//! Tick cycle integration tests
//!
//! Particles move each tick; the driver buckets them with `grid_position`
//! and feeds the grids either full or differential updates.

use std::collections::{BTreeMap, BTreeSet};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use ungrd::foundation::grid_position;
use ungrd::grid::{CompactGrid, CompactMultiGrid, DenseGrid, GridQuery, UniformGrid};

type Cells = BTreeMap<[i32; 2], BTreeSet<u32>>;

const CELL_SIZE: f64 = 2.0;

// =============================================================================
// Helper Functions
// =============================================================================

struct Particles {
    points: Vec<[f64; 2]>,
    velocities: Vec<[f64; 2]>,
}

impl Particles {
    fn new(count: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let points = (0..count)
            .map(|_| [rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0)])
            .collect();
        let velocities = (0..count)
            .map(|_| [rng.gen_range(-0.7..0.7), rng.gen_range(-0.7..0.7)])
            .collect();
        Self { points, velocities }
    }

    fn cells(&self) -> Vec<(u32, [i32; 2])> {
        self.points
            .iter()
            .enumerate()
            .map(|(entry, &point)| (entry as u32, grid_position(point, CELL_SIZE).unwrap()))
            .collect()
    }

    fn step(&mut self) {
        for (point, velocity) in self.points.iter_mut().zip(&self.velocities) {
            point[0] += velocity[0];
            point[1] += velocity[1];
        }
    }
}

fn model(pairs: &[(u32, [i32; 2])]) -> Cells {
    let mut cells = Cells::new();
    for &(entry, position) in pairs {
        cells.entry(position).or_default().insert(entry);
    }
    cells
}

fn cells_of<G: GridQuery<u32, i32, 2>>(grid: &G) -> Cells {
    let mut cells = Cells::new();
    grid.foreach_position(|position| {
        grid.foreach_entry_at_position(&position, |entry| {
            cells.entry(position).or_default().insert(entry);
        });
    });
    cells
}

/// Returns the stale and fresh pairs between two bucketings.
fn diff(
    before: &[(u32, [i32; 2])],
    after: &[(u32, [i32; 2])],
) -> (Vec<(u32, [i32; 2])>, Vec<(u32, [i32; 2])>) {
    before
        .iter()
        .zip(after)
        .filter(|(old, new)| old.1 != new.1)
        .map(|(&old, &new)| (new, old))
        .unzip()
}

// =============================================================================
// Tick Cycle
// =============================================================================

fn run_ticks<G: UniformGrid<u32, i32, 2> + Default>(differential: bool) {
    let mut particles = Particles::new(300, 11);
    let mut grid = G::default();
    let mut previous = particles.cells();
    grid.update(previous.iter().copied());

    for _ in 0..40 {
        particles.step();
        let current = particles.cells();
        if differential {
            let (fresh, stale) = diff(&previous, &current);
            grid.differential_update(fresh, stale);
        } else {
            grid.update(current.iter().copied());
        }

        assert_eq!(cells_of(&grid), model(&current));
        assert_eq!(grid.count_entries(), 300);
        previous = current;
    }
}

#[test]
fn compact_grid_full_ticks() {
    run_ticks::<CompactGrid<u32, i32, 2>>(false);
}

#[test]
fn compact_grid_differential_ticks() {
    run_ticks::<CompactGrid<u32, i32, 2>>(true);
}

#[test]
fn dense_grid_full_ticks() {
    run_ticks::<DenseGrid<u32, i32, 2>>(false);
}

#[test]
fn dense_grid_differential_ticks() {
    run_ticks::<DenseGrid<u32, i32, 2>>(true);
}

// =============================================================================
// Extended Particles
// =============================================================================

/// Cells overlapped by a disc of `radius` around `point`.
fn overlapped(point: [f64; 2], radius: f64) -> Vec<[i32; 2]> {
    let lo: [i32; 2] = grid_position([point[0] - radius, point[1] - radius], CELL_SIZE).unwrap();
    let hi: [i32; 2] = grid_position([point[0] + radius, point[1] + radius], CELL_SIZE).unwrap();
    let mut cells = Vec::new();
    for x in lo[0]..=hi[0] {
        for y in lo[1]..=hi[1] {
            cells.push([x, y]);
        }
    }
    cells
}

#[test]
fn multi_grid_tracks_extended_particles() {
    let mut particles = Particles::new(100, 23);
    let mut grid: CompactMultiGrid<u32, i32, 2> = CompactMultiGrid::new();

    for _ in 0..25 {
        let footprints: Vec<(u32, Vec<[i32; 2]>)> = particles
            .points
            .iter()
            .enumerate()
            .map(|(entry, &point)| (entry as u32, overlapped(point, 1.5)))
            .collect();
        grid.update(footprints.iter().cloned());

        let mut expected = Cells::new();
        for (entry, cells) in &footprints {
            for &cell in cells {
                expected.entry(cell).or_default().insert(*entry);
            }
            let mut recorded: Vec<_> = grid.positions_of(*entry).collect();
            recorded.sort_unstable();
            let mut wanted = cells.clone();
            wanted.sort_unstable();
            assert_eq!(recorded, wanted);
        }
        assert_eq!(cells_of(&grid), expected);

        particles.step();
    }
}

// =============================================================================
// Neighborhood Queries
// =============================================================================

#[test]
fn neighbor_candidates_from_adjacent_cells() {
    let particles = Particles::new(200, 5);
    let pairs = particles.cells();
    let mut grid: CompactGrid<u32, i32, 2> = CompactGrid::new();
    grid.update(pairs.iter().copied());

    for &(entry, [x, y]) in pairs.iter().take(20) {
        let mut candidates = BTreeSet::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                grid.foreach_entry_at_position(&[x + dx, y + dy], |other| {
                    candidates.insert(other);
                });
            }
        }
        assert!(candidates.contains(&entry));

        for (other, point) in particles.points.iter().enumerate() {
            let own = particles.points[entry as usize];
            let distance = ((point[0] - own[0]).powi(2) + (point[1] - own[1]).powi(2)).sqrt();
            if distance < CELL_SIZE {
                assert!(candidates.contains(&(other as u32)));
            }
        }
    }
}
