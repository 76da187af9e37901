use super::{Cell, Grid};

/// Represents a seed pattern that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,  // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }
    
    /// Place pattern with its top-left corner at `(row, col)`.
    /// Cells falling off an edge wrap to the opposite side.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        let (grid_width, grid_height) = grid.dimensions();
        if grid_width == 0 || grid_height == 0 {
            return;
        }
        for (dr, dc) in &self.cells {
            grid.set((row + dr) % grid_height, (col + dc) % grid_width, Cell::Alive);
        }
    }
    
    /// Place pattern centred on the grid
    pub fn place_centered(&self, grid: &mut Grid) {
        let (grid_width, grid_height) = grid.dimensions();
        let row = grid_height.saturating_sub(self.height) / 2;
        let col = grid_width.saturating_sub(self.width) / 2;
        self.place_on(grid, row, col);
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;
    
    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ]
        )
    }
    
    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (1, 0), (1, 1), (1, 2),
            ]
        )
    }
    
    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ]
        )
    }
    
    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ]
        )
    }
    
    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ]
        )
    }
    
    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ]
        )
    }
    
    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ]
        )
    }
    
    /// Get all available patterns, in keyboard shortcut order
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            lwss(),
            r_pentomino(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let lwss = presets::lwss();
        assert_eq!((lwss.width, lwss.height), (5, 4));
    }
    
    #[test]
    fn test_place_wraps_around_edges() {
        let mut grid = Grid::new(5, 5);
        presets::block().place_on(&mut grid, 4, 4);
        assert_eq!(grid.population(), 4);
        assert_eq!(grid.get(4, 4), Some(Cell::Alive));
        assert_eq!(grid.get(0, 0), Some(Cell::Alive));
        assert_eq!(grid.get(4, 0), Some(Cell::Alive));
        assert_eq!(grid.get(0, 4), Some(Cell::Alive));
    }
    
    #[test]
    fn test_oscillators_have_period_two() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let mut grid = Grid::new(12, 12);
            pattern.place_centered(&mut grid);
            let start = grid.clone();
            let once = grid.step();
            assert_ne!(once, start, "{} should change", pattern.name);
            assert_eq!(once.step(), start, "{} should return", pattern.name);
        }
    }
    
    #[test]
    fn test_lwss_keeps_population() {
        let mut grid = Grid::new(20, 12);
        presets::lwss().place_centered(&mut grid);
        for _ in 0..4 {
            grid = grid.step();
        }
        assert_eq!(grid.population(), 9);
    }
    
    #[test]
    fn test_all_patterns_have_unique_names() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
