use crate::Coords;

pub const GRID_WIDTH: i32 = 40;
pub const GRID_HEIGHT: i32 = 4;
pub const GRID_SIZE: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Snake,
    Food,
}

/// Fixed 40x4 board, row-major. Columns wrap, rows don't.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new() -> Self {
        Grid { cells: vec![Cell::Empty; GRID_SIZE] }
    }

    pub fn wrap_x(x: i32) -> i32 {
        x.rem_euclid(GRID_WIDTH)
    }

    pub fn in_rows(y: i32) -> bool {
        (0..GRID_HEIGHT).contains(&y)
    }

    /// Rows outside the board read as empty.
    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        match Self::index(x, y) {
            Some(i) => self.cells[i],
            None => Cell::Empty,
        }
    }

    /// Writes to rows outside the board are dropped.
    pub fn set_cell_at(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = Self::index(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn set_cell(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    pub fn coords_of(index: usize) -> Coords {
        let i = index as i32;
        (i % GRID_WIDTH, i / GRID_WIDTH)
    }

    /// Cells food may land on. An existing food cell counts.
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Snake).count()
    }

    pub fn snake_cells(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Snake).count()
    }

    pub fn food(&self) -> Option<Coords> {
        self.cells.iter().position(|c| *c == Cell::Food).map(Self::coords_of)
    }

    fn index(x: i32, y: i32) -> Option<usize> {
        if !Self::in_rows(y) {
            return None;
        }
        Some((Self::wrap_x(x) + y * GRID_WIDTH) as usize)
    }
}
