use amaze_core::{Dir, Grid, GridError, Pos};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest width or height the generators produce.
pub const MAX_DIM: i32 = 4096;

/// Maze generator driven by an RNG.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl MazeGen<StdRng> {
    /// A generator whose output depends only on `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a perfect maze with a randomized depth-first walk.
    ///
    /// Open cells sit on odd coordinates, joined through the wall cells
    /// between them; the outer ring is always wall. The start is the
    /// top-left open cell, the goal the bottom-right one. Dimensions are
    /// clamped to `3..=MAX_DIM`, and a maze too small for two lattice cells
    /// is widened to 5 so start and goal never coincide. With an even
    /// dimension the last row or column stays solid.
    pub fn carve(&mut self, width: i32, height: i32) -> Result<Grid, GridError> {
        let mut width = width.clamp(3, MAX_DIM);
        let height = height.clamp(3, MAX_DIM);
        if width < 5 && height < 5 {
            width = 5;
        }
        let idx = |p: Pos| p.row as usize * width as usize + p.col as usize;
        let on_lattice =
            |p: Pos| p.row >= 1 && p.col >= 1 && p.row <= height - 2 && p.col <= width - 2;

        let mut cells = vec![false; width as usize * height as usize];
        let start = Pos::new(1, 1);
        cells[idx(start)] = true;

        let mut stack = vec![start];
        let mut options: Vec<Dir> = Vec::with_capacity(4);
        while let Some(&cur) = stack.last() {
            options.clear();
            for d in Dir::ALL {
                let next = cur.step(d).step(d);
                if on_lattice(next) && !cells[idx(next)] {
                    options.push(d);
                }
            }
            if options.is_empty() {
                stack.pop();
                continue;
            }
            let d = options[self.rng.random_range(0..options.len())];
            let wall = cur.step(d);
            let next = wall.step(d);
            cells[idx(wall)] = true;
            cells[idx(next)] = true;
            stack.push(next);
        }

        let goal = Pos::new(last_odd_below(height), last_odd_below(width));
        log::debug!("mazegen: carved {width}x{height} maze, goal at {goal}");
        Grid::new(width, height, cells, start, goal)
    }

    /// Open wall cells that separate two corridor cells in a straight line,
    /// each with probability `pct` (clamped to 0..=1). Border cells and
    /// pillars (walls joining corridors on both axes) are left alone.
    pub fn braid(&mut self, grid: &Grid, pct: f64) -> Result<Grid, GridError> {
        let pct = pct.clamp(0.0, 1.0);
        let (w, h) = (grid.width(), grid.height());
        let mut cells: Vec<bool> = grid.iter().map(|(_, open)| open).collect();
        let mut opened = 0usize;

        for (i, (p, open)) in grid.iter().enumerate() {
            if open || p.row == 0 || p.col == 0 || p.row == h - 1 || p.col == w - 1 {
                continue;
            }
            let joins_row = grid.passable(p.step(Dir::West)) && grid.passable(p.step(Dir::East));
            let joins_col = grid.passable(p.step(Dir::North)) && grid.passable(p.step(Dir::South));
            if joins_row != joins_col && self.rng.random_bool(pct) {
                cells[i] = true;
                opened += 1;
            }
        }

        log::debug!("mazegen: braid opened {opened} walls");
        Grid::new(w, h, cells, grid.start(), grid.goal())
    }

    /// Fill a grid with independent random walls, each cell a wall with
    /// probability `wall_pct` (clamped to 0..=1). Start is the top-left
    /// corner and goal the bottom-right; both are forced open. Dimensions
    /// are clamped to `1..=MAX_DIM`, and a single cell is widened to two.
    pub fn scatter(&mut self, width: i32, height: i32, wall_pct: f64) -> Result<Grid, GridError> {
        let wall_pct = wall_pct.clamp(0.0, 1.0);
        let mut width = width.clamp(1, MAX_DIM);
        let height = height.clamp(1, MAX_DIM);
        if width == 1 && height == 1 {
            width = 2;
        }
        let len = width as usize * height as usize;
        let mut cells: Vec<bool> = (0..len).map(|_| !self.rng.random_bool(wall_pct)).collect();
        let start = Pos::ZERO;
        let goal = Pos::new(height - 1, width - 1);
        cells[0] = true;
        cells[len - 1] = true;
        Grid::new(width, height, cells, start, goal)
    }
}

/// Largest odd index that is strictly inside a dimension of size `n >= 3`.
fn last_odd_below(n: i32) -> i32 {
    let m = n - 2;
    if m % 2 == 1 { m } else { m - 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amaze_core::parse_maze;
    use amaze_paths::{Solver, bfs_distance, solve};

    /// Number of open orthogonal neighbour pairs.
    fn edge_count(grid: &Grid) -> usize {
        grid.iter()
            .filter(|&(_, open)| open)
            .map(|(p, _)| {
                [Dir::East, Dir::South]
                    .into_iter()
                    .filter(|&d| grid.passable(p.step(d)))
                    .count()
            })
            .sum()
    }

    #[test]
    fn last_odd_below_dimension() {
        assert_eq!(last_odd_below(3), 1);
        assert_eq!(last_odd_below(4), 1);
        assert_eq!(last_odd_below(5), 3);
        assert_eq!(last_odd_below(10), 7);
        assert_eq!(last_odd_below(11), 9);
    }

    #[test]
    fn carve_is_a_spanning_tree() {
        for seed in 0..20 {
            let grid = MazeGen::seeded(seed).carve(21, 15).unwrap();
            let open = grid.open_count();
            // a connected graph with n-1 edges is a tree
            assert_eq!(edge_count(&grid), open - 1, "seed {seed}");
            let mut solver = Solver::new();
            assert_eq!(solver.bfs_map(&grid, grid.start()).len(), open);
        }
    }

    #[test]
    fn carve_corners() {
        let grid = MazeGen::seeded(1).carve(10, 8).unwrap();
        assert_eq!(grid.start(), Pos::new(1, 1));
        assert_eq!(grid.goal(), Pos::new(5, 7));
        for col in 0..grid.width() {
            assert!(!grid.passable(Pos::new(0, col)));
            assert!(!grid.passable(Pos::new(grid.height() - 1, col)));
            assert!(!grid.passable(Pos::new(6, col)));
        }
    }

    #[test]
    fn carve_is_reproducible() {
        let a = MazeGen::seeded(42).carve(31, 31).unwrap();
        let b = MazeGen::seeded(42).carve(31, 31).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn carve_tiny_is_clamped() {
        let grid = MazeGen::seeded(0).carve(1, -4).unwrap();
        assert_eq!((grid.width(), grid.height()), (5, 3));
        assert_eq!(grid.start(), Pos::new(1, 1));
        assert_eq!(grid.goal(), Pos::new(1, 3));
        assert_eq!(grid.open_count(), 3);

        let tall = MazeGen::seeded(0).carve(4, 5).unwrap();
        assert_eq!((tall.width(), tall.height()), (4, 5));
        assert_eq!(tall.goal(), Pos::new(3, 1));
    }

    #[test]
    fn huge_dimensions_are_capped() {
        let grid = MazeGen::seeded(0).scatter(i32::MAX, 1, 0.0).unwrap();
        assert_eq!((grid.width(), grid.height()), (MAX_DIM, 1));
        assert_eq!(grid.goal(), Pos::new(0, MAX_DIM - 1));
    }

    #[test]
    fn generated_text_loads_back() {
        let mut mg = MazeGen::seeded(17);
        let mut grids = Vec::new();
        for (w, h) in [(1, 1), (3, 3), (4, 4), (3, 7), (12, 9)] {
            grids.push(mg.carve(w, h).unwrap());
            grids.push(mg.scatter(w, h, 0.3).unwrap());
        }
        let braided = mg.braid(&grids[8], 0.5).unwrap();
        grids.push(braided);

        for grid in &grids {
            assert_ne!(grid.start(), grid.goal());
            let back = parse_maze(&grid.to_text()).unwrap();
            assert_eq!(&back, grid);
        }
    }

    #[test]
    fn carved_mazes_solve_optimally() {
        let mut mg = MazeGen::seeded(9);
        for _ in 0..10 {
            let grid = mg.carve(41, 25).unwrap();
            let r = solve(&grid);
            assert!(r.solvable());
            assert_eq!(
                r.path_len().map(|d| d as u32),
                bfs_distance(&grid, grid.start(), grid.goal())
            );
        }
    }

    #[test]
    fn braid_adds_loops_and_keeps_corridors() {
        let mut mg = MazeGen::seeded(3);
        let perfect = mg.carve(25, 25).unwrap();
        let braided = mg.braid(&perfect, 1.0).unwrap();
        assert!(edge_count(&braided) > edge_count(&perfect));
        for (p, open) in perfect.iter() {
            if open {
                assert!(braided.passable(p));
            }
        }
        assert_eq!(braided.start(), perfect.start());
        assert_eq!(braided.goal(), perfect.goal());
        let before = solve(&perfect).path_len().unwrap();
        let after = solve(&braided).path_len().unwrap();
        assert!(after <= before);
    }

    #[test]
    fn braid_zero_is_identity() {
        let mut mg = MazeGen::seeded(5);
        let perfect = mg.carve(15, 15).unwrap();
        assert_eq!(mg.braid(&perfect, 0.0).unwrap(), perfect);
    }

    #[test]
    fn scatter_forces_endpoints_open() {
        let grid = MazeGen::seeded(11).scatter(8, 6, 1.0).unwrap();
        assert_eq!(grid.open_count(), 2);
        assert_eq!(grid.start(), Pos::new(0, 0));
        assert_eq!(grid.goal(), Pos::new(5, 7));
        assert!(!solve(&grid).solvable());

        let open = MazeGen::seeded(11).scatter(8, 6, 0.0).unwrap();
        assert_eq!(open.open_count(), 48);
        assert_eq!(solve(&open).path_len(), Some(12));
    }
}
