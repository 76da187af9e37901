//! Board geometry and timing constants.
//!
//! Everything the simulation and the window need to agree on lives in
//! one [`Config`] so the mapper, renderer and tick timer never disagree.

use std::time::Duration;
use thiserror::Error;

/// Validated board and window settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of cell columns
    pub width: usize,
    /// Number of cell rows
    pub height: usize,
    /// Side of a cell in pixels
    pub cell_size: u32,
    /// Gap between cells in pixels
    pub border_size: u32,
    /// Delay between generations while running
    pub tick_interval: Duration,
}

impl Config {
    pub const DEFAULT_WIDTH: usize = 30;
    pub const DEFAULT_HEIGHT: usize = 20;
    pub const DEFAULT_CELL_SIZE: u32 = 30;
    pub const DEFAULT_BORDER_SIZE: u32 = 2;
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(20);
    
    /// Probability of a cell being alive after a random fill
    pub const RANDOM_DENSITY: f64 = 0.3;
    
    /// Boards with more cells than this step with rayon
    pub const PARALLEL_THRESHOLD: usize = 10_000;
    
    pub const WINDOW_TITLE: &'static str = "John Conway's Game of Life - Pause to edit squares";
    
    /// Build a config, rejecting geometry that cannot be drawn or simulated
    pub fn new(
        width: usize,
        height: usize,
        cell_size: u32,
        border_size: u32,
        tick_interval: Duration,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(Self { width, height, cell_size, border_size, tick_interval })
    }
    
    /// Distance in pixels from one cell's origin to the next
    pub const fn pitch(&self) -> u32 {
        self.cell_size + self.border_size
    }
    
    /// Window size in pixels, one extra row on top for the control strip
    pub fn window_size(&self) -> (u32, u32) {
        let pitch = self.pitch();
        let width = self.width as u32 * pitch + self.border_size;
        let height = (self.height as u32 + 1) * pitch + self.border_size;
        (width, height)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            cell_size: Self::DEFAULT_CELL_SIZE,
            border_size: Self::DEFAULT_BORDER_SIZE,
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid must have at least one cell, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("Cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("Tick interval must be non-zero")]
    ZeroTickInterval,
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_default_geometry() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (30, 20));
        assert_eq!(config.pitch(), 32);
        assert_eq!(config.window_size(), (962, 674));
        assert_eq!(config.tick_interval, Duration::from_millis(20));
    }
    
    #[test]
    fn test_new_accepts_default_values() {
        let config = Config::new(30, 20, 30, 2, Duration::from_millis(20));
        assert_eq!(config, Ok(Config::default()));
    }
    
    #[test]
    fn test_new_rejects_bad_values() {
        assert_eq!(
            Config::new(0, 20, 30, 2, Duration::from_millis(20)),
            Err(ConfigError::EmptyGrid { width: 0, height: 20 })
        );
        assert_eq!(
            Config::new(30, 20, 0, 2, Duration::from_millis(20)),
            Err(ConfigError::ZeroCellSize)
        );
        assert_eq!(
            Config::new(30, 20, 30, 2, Duration::ZERO),
            Err(ConfigError::ZeroTickInterval)
        );
    }
    
    #[test]
    fn test_error_messages() {
        let err = ConfigError::EmptyGrid { width: 0, height: 3 };
        assert_eq!(err.to_string(), "Grid must have at least one cell, got 0x3");
    }
}
