use quadlife::{CellGrid, ConfigError};

const N: usize = 64;
const SEED: u64 = 42;

/// Rule applied directly to a snapshot, with the same bounded neighborhood:
/// out-of-range offsets are skipped, not wrapped.
fn reference_step(snapshot: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let (w, h) = (snapshot.len(), snapshot[0].len());
    let mut result = vec![vec![false; h]; w];
    for x in 0..w {
        for y in 0..h {
            let mut neibs = 0;
            for dx in -1i64..=1 {
                for dy in -1i64..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                    if nx >= 0
                        && ny >= 0
                        && nx < w as i64
                        && ny < h as i64
                        && snapshot[nx as usize][ny as usize]
                    {
                        neibs += 1;
                    }
                }
            }
            result[x][y] = if snapshot[x][y] {
                neibs == 2 || neibs == 3
            } else {
                neibs == 3
            };
        }
    }
    result
}

fn snapshot(grid: &CellGrid) -> Vec<Vec<bool>> {
    (0..grid.width())
        .map(|x| (0..grid.height()).map(|y| grid.get(x, y)).collect())
        .collect()
}

#[test]
fn test_rejects_zero_dimensions() {
    assert_eq!(
        CellGrid::blank(0, 8).unwrap_err(),
        ConfigError::InvalidDimensions { width: 0, height: 8 }
    );
    assert_eq!(
        CellGrid::random(8, 0, Some(SEED)).unwrap_err(),
        ConfigError::InvalidDimensions { width: 8, height: 0 }
    );
    assert!(CellGrid::blank(0, 0).is_err());
    assert!(CellGrid::blank(1, 1).is_ok());
}

#[test]
fn test_dimensions_stable() {
    let mut grid = CellGrid::random(N, N / 2, Some(SEED)).unwrap();
    for _ in 0..16 {
        grid.step();
        assert_eq!((grid.width(), grid.height()), (N, N / 2));
        assert_eq!(grid.cells().len(), N * N / 2);
    }
}

#[test]
fn test_random_is_seeded() {
    let a = CellGrid::random(N, N, Some(SEED)).unwrap();
    let b = CellGrid::random(N, N, Some(SEED)).unwrap();
    assert_eq!(a.cells(), b.cells());
}

#[test]
fn test_matches_reference_rule() {
    let mut grid = CellGrid::random(N, N, Some(SEED)).unwrap();
    for _ in 0..8 {
        let expected = reference_step(&snapshot(&grid));
        grid.step();
        assert_eq!(snapshot(&grid), expected);
    }
}

#[test]
fn test_cell_positions_survive_steps() {
    let mut grid = CellGrid::random(8, 8, Some(SEED)).unwrap();
    grid.step();
    grid.step();
    for (i, cell) in grid.cells().iter().enumerate() {
        assert_eq!((cell.x, cell.y), (i / 8, i % 8));
    }
}

// On an all-alive 3x3 field the corner cells see exactly 3 neighbors and the
// edge cells 5. With wraparound every cell would see 8 and the whole field
// would die; with clipping only the corners survive.
#[test]
fn test_boundary_clipping() {
    let mut grid = CellGrid::blank(3, 3).unwrap();
    for x in 0..3 {
        for y in 0..3 {
            grid.set(x, y, true);
        }
    }
    grid.step();
    for x in 0..3 {
        for y in 0..3 {
            let is_corner = x != 1 && y != 1;
            assert_eq!(grid.get(x, y), is_corner, "at ({}, {})", x, y);
        }
    }
}

#[test]
fn test_lone_cell_dies() {
    let mut grid = CellGrid::blank(5, 5).unwrap();
    grid.set(2, 2, true);
    grid.step();
    assert!(grid.cells().iter().all(|c| !c.alive));
}

#[test]
fn test_block_is_still_life() {
    let mut grid = CellGrid::blank(4, 4).unwrap();
    for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
        grid.set(x, y, true);
    }
    let before = snapshot(&grid);
    for _ in 0..10 {
        grid.step();
        assert_eq!(snapshot(&grid), before);
    }
}

#[test]
fn test_blinker_oscillates() {
    let mut vertical = CellGrid::blank(5, 5).unwrap();
    for y in 1..4 {
        vertical.set(2, y, true);
    }
    let phase_vertical = snapshot(&vertical);

    vertical.step();
    let mut horizontal = CellGrid::blank(5, 5).unwrap();
    for x in 1..4 {
        horizontal.set(x, 2, true);
    }
    assert_eq!(snapshot(&vertical), snapshot(&horizontal));

    vertical.step();
    assert_eq!(snapshot(&vertical), phase_vertical);
}
