use log::debug;
use rand::Rng;

use crate::grid::{Cell, Grid, GRID_SIZE};
use crate::Coords;

/// A way of choosing the cell index the next food goes to.
pub trait PlacementStrategy {
    fn pick(&self, grid: &Grid, rng: &mut dyn rand::RngCore) -> Option<usize>;
}

/// Random probes, giving up after `attempts`.
pub struct Probe {
    pub attempts: usize,
}

impl PlacementStrategy for Probe {
    fn pick(&self, grid: &Grid, rng: &mut dyn rand::RngCore) -> Option<usize> {
        (0..self.attempts)
            .map(|_| rng.gen_range(0..GRID_SIZE))
            .find(|i| grid.cell(*i) != Cell::Snake)
    }
}

/// Uniform choice among the free cells in one pass. Always succeeds on a non-full grid.
pub struct Scan;

impl PlacementStrategy for Scan {
    fn pick(&self, grid: &Grid, rng: &mut dyn rand::RngCore) -> Option<usize> {
        let free = grid.empty_cells();
        if free == 0 {
            return None;
        }
        let mut countdown = rng.gen_range(0..free);
        for i in 0..GRID_SIZE {
            if grid.cell(i) != Cell::Snake {
                if countdown == 0 {
                    return Some(i);
                }
                countdown -= 1;
            }
        }
        None
    }
}

pub struct FoodPlacer {
    probe: Probe,
    scan: Scan,
}

impl FoodPlacer {
    pub fn new() -> Self {
        Self::with_probes(GRID_SIZE * 2)
    }

    pub fn with_probes(attempts: usize) -> Self {
        FoodPlacer { probe: Probe { attempts }, scan: Scan }
    }

    /// Puts food on a free cell. Does nothing when the snake fills the grid.
    pub fn drop_food(&self, grid: &mut Grid, rng: &mut dyn rand::RngCore) -> Option<Coords> {
        if grid.empty_cells() == 0 {
            return None;
        }

        let index = match self.probe.pick(grid, rng) {
            Some(i) => i,
            None => {
                debug!("probing found no free cell, scanning");
                self.scan.pick(grid, rng)?
            }
        };

        grid.set_cell(index, Cell::Food);
        Some(Grid::coords_of(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn full_except(free: usize) -> Grid {
        let mut grid = Grid::new();
        for i in 0..GRID_SIZE {
            if i != free {
                grid.set_cell(i, Cell::Snake);
            }
        }
        grid
    }

    #[test]
    fn last_free_cell_always_gets_food() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let free = (seed as usize * 37) % GRID_SIZE;
            let mut grid = full_except(free);

            let placed = FoodPlacer::with_probes(0).drop_food(&mut grid, &mut rng);
            assert_eq!(placed, Some(Grid::coords_of(free)));
            assert_eq!(grid.cell(free), Cell::Food);
        }
    }

    #[test]
    fn default_placer_also_fills_last_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = full_except(42);
        FoodPlacer::new().drop_food(&mut grid, &mut rng);
        assert_eq!(grid.cell(42), Cell::Food);
    }

    #[test]
    fn full_grid_is_left_alone() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new();
        for i in 0..GRID_SIZE {
            grid.set_cell(i, Cell::Snake);
        }
        assert_eq!(FoodPlacer::new().drop_food(&mut grid, &mut rng), None);
        assert_eq!(grid.snake_cells(), GRID_SIZE);
    }

    #[test]
    fn food_never_lands_on_snake() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let mut grid = Grid::new();
            for x in 0..30 {
                grid.set_cell_at(x, 1, Cell::Snake);
            }
            let (x, y) = FoodPlacer::new().drop_food(&mut grid, &mut rng).unwrap();
            assert_eq!(grid.cell_at(x, y), Cell::Food);
            assert_eq!(grid.snake_cells(), 30);
        }
    }

    #[test]
    fn scan_is_spread_over_free_cells() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = Grid::new();
        for i in 2..GRID_SIZE {
            grid.set_cell(i, Cell::Snake);
        }
        let picks: Vec<usize> = (0..64).filter_map(|_| Scan.pick(&grid, &mut rng)).collect();
        assert!(picks.contains(&0));
        assert!(picks.contains(&1));
        assert!(picks.iter().all(|i| *i < 2));
    }
}
