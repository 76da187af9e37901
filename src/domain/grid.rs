use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Grid owns one generation of the toroidal board.
/// Cells are addressed as `(row, col)` and stored row-major.
/// Dimensions are fixed at construction; evolution returns a new grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }
    
    /// Get grid dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    
    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
    
    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width)
            .then(|| self.cells[self.get_index(row, col)])
    }
    
    /// Set cell at position, out-of-range positions are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.height && col < self.width {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }
    
    /// Flip a single cell in place and return its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let idx = self.get_index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
        Some(self.cells[idx])
    }
    
    /// Count live neighbors using toroidal wrapping (grid wraps like a torus).
    /// Always in `0..=8`.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let w = self.width as isize;
        let h = self.height as isize;
        
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| {
                let nr = (row as isize + dr).rem_euclid(h) as usize;
                let nc = (col as isize + dc).rem_euclid(w) as usize;
                self.cells[self.get_index(nr, nc)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }
    
    /// Next state of one cell, read from this generation only
    fn next_cell(&self, row: usize, col: usize) -> Cell {
        let current = self.cells[self.get_index(row, col)];
        current.evolve(self.neighbor_count(row, col))
    }
    
    /// Pure functional evolution - returns the next generation (serial)
    pub fn step(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();
        
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }
    
    /// Same result as [`Grid::step`], rows computed in parallel with rayon.
    /// Only pays off once the board reaches tens of thousands of cells.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|row| (0..self.width).map(move |col| self.next_cell(row, col)))
            .collect();
        
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }
    
    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
    
    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }
    
    /// Fill the grid randomly, each cell alive with probability `density`
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(density) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }
    
    /// Iterate over all cells with their `(row, col)` positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.width, idx % self.width, cell))
    }
}
