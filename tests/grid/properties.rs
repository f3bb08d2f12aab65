//! Property tests: full and differential updates agree with a naive model

use proptest::prelude::*;

use ungrd_grid::{CompactGrid, DenseGrid, UniformGrid};

use crate::{expected, snapshot};

type Pair = (u32, [i32; 3]);

fn position() -> impl Strategy<Value = [i32; 3]> {
    prop::array::uniform3(-6i32..6)
}

/// Initial positions for up to 32 entries, then rounds of moves. A move
/// names an entry (modulo the entry count) and its new position.
fn scenario() -> impl Strategy<Value = (Vec<[i32; 3]>, Vec<Vec<(usize, [i32; 3])>>)> {
    (
        prop::collection::vec(position(), 1..32),
        prop::collection::vec(prop::collection::vec((any::<usize>(), position()), 0..8), 1..6),
    )
}

fn pairs(positions: &[[i32; 3]]) -> Vec<Pair> {
    positions
        .iter()
        .enumerate()
        .map(|(entry, &position)| (entry as u32, position))
        .collect()
}

/// Applies one round of moves, returning the fresh and stale pairs.
fn apply_moves(positions: &mut [[i32; 3]], moves: &[(usize, [i32; 3])]) -> (Vec<Pair>, Vec<Pair>) {
    let before = positions.to_vec();
    for &(entry, target) in moves {
        let entry = entry % positions.len();
        positions[entry] = target;
    }

    let mut fresh = Vec::new();
    let mut stale = Vec::new();
    for (entry, (&old, &new)) in before.iter().zip(positions.iter()).enumerate() {
        if old != new {
            stale.push((entry as u32, old));
            fresh.push((entry as u32, new));
        }
    }
    (fresh, stale)
}

fn check_rounds<G: UniformGrid<u32, i32, 3> + Default>(
    initial: &[[i32; 3]],
    rounds: &[Vec<(usize, [i32; 3])>],
) -> Result<(), TestCaseError> {
    let mut positions = initial.to_vec();
    let mut full = G::default();
    let mut differential = G::default();
    full.update(pairs(&positions));
    differential.update(pairs(&positions));

    for moves in rounds {
        let (fresh, stale) = apply_moves(&mut positions, moves);
        full.update(pairs(&positions));
        differential.differential_update(fresh, stale);

        let model = expected(&pairs(&positions));
        prop_assert_eq!(&snapshot(&full), &model);
        prop_assert_eq!(&snapshot(&differential), &model);
    }
    Ok(())
}

proptest! {
    #[test]
    fn compact_grid_matches_model((initial, rounds) in scenario()) {
        check_rounds::<CompactGrid<u32, i32, 3>>(&initial, &rounds)?;
    }

    #[test]
    fn dense_grid_matches_model((initial, rounds) in scenario()) {
        check_rounds::<DenseGrid<u32, i32, 3>>(&initial, &rounds)?;
    }

    #[test]
    fn dense_box_covers_every_entry((initial, rounds) in scenario()) {
        let mut positions = initial.clone();
        let mut grid: DenseGrid<u32, i32, 3> = DenseGrid::new();
        grid.update(pairs(&positions));

        for moves in &rounds {
            let (fresh, stale) = apply_moves(&mut positions, moves);
            grid.differential_update(fresh, stale);

            let (lo, hi) = grid.bounding_box().unwrap();
            for position in &positions {
                for dim in 0..3 {
                    prop_assert!(lo[dim] <= position[dim] && position[dim] <= hi[dim]);
                }
            }
        }

        grid.update(pairs(&positions));
        let (lo, hi) = grid.bounding_box().unwrap();
        for dim in 0..3 {
            prop_assert_eq!(lo[dim], positions.iter().map(|p| p[dim]).min().unwrap());
            prop_assert_eq!(hi[dim], positions.iter().map(|p| p[dim]).max().unwrap());
        }
    }
}
