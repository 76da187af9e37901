use crate::config::Config;

/// What a pointer press landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// The play/pause square in the top-left corner
    Control,
    /// The rest of the control strip, clicks here do nothing
    DeadZone,
    /// A playable cell
    Cell { row: usize, col: usize },
}

/// Layout maps between window pixels and board cells.
///
/// The window shows one extra strip of `pitch` pixels above the board for
/// the control glyph. Screen column `i` is grid column `i`; screen row `j`
/// is grid row `j - 1`. This is the only place that axis conversion happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub cell_size: u32,
    pub border_size: u32,
    pub width: usize,
    pub height: usize,
}

impl Layout {
    pub fn new(cell_size: u32, border_size: u32, width: usize, height: usize) -> Self {
        Self { cell_size, border_size, width, height }
    }
    
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cell_size, config.border_size, config.width, config.height)
    }
    
    /// Distance between the origins of neighbouring cells
    pub const fn pitch(&self) -> u32 {
        self.cell_size + self.border_size
    }
    
    /// Convert a pointer position to whatever it hit.
    ///
    /// The control square includes its closing border line, so a press on
    /// `(pitch, pitch)` still counts as play/pause. Positions past the board
    /// clamp to the last column/row; negative positions clamp to zero.
    pub fn map_pointer(&self, x: i32, y: i32) -> Target {
        let pitch = self.pitch().max(1) as i64;
        let x = (x as i64).max(0);
        let y = (y as i64).max(0);
        
        if x <= pitch && y <= pitch {
            return Target::Control;
        }
        
        let col = ((x / pitch) as usize).min(self.width.saturating_sub(1));
        // Screen row 0 is the control strip, the board occupies rows 1..=height
        let screen_row = ((y / pitch) as usize).min(self.height);
        
        match screen_row {
            0 => Target::DeadZone,
            _ => Target::Cell { row: screen_row - 1, col },
        }
    }
    
    /// Top-left pixel of a cell's filled square
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        let pitch = self.pitch() as f32;
        let border = self.border_size as f32;
        let x = border + col as f32 * pitch;
        let y = border + (row + 1) as f32 * pitch;
        (x, y)
    }
    
    /// Top-left pixel of the control glyph
    pub fn control_origin(&self) -> (f32, f32) {
        let border = self.border_size as f32;
        (border, border)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_control_region() {
        let layout = Layout::default();
        assert_eq!(layout.map_pointer(32, 32), Target::Control);
        assert_eq!(layout.map_pointer(0, 0), Target::Control);
        assert_eq!(layout.map_pointer(15, 20), Target::Control);
    }
    
    #[test]
    fn test_cell_mapping() {
        let layout = Layout::default();
        assert_eq!(layout.map_pointer(64, 64), Target::Cell { row: 1, col: 2 });
        assert_eq!(layout.map_pointer(5, 40), Target::Cell { row: 0, col: 0 });
        assert_eq!(layout.map_pointer(40, 33), Target::Cell { row: 0, col: 1 });
    }
    
    #[test]
    fn test_control_strip_is_dead_zone() {
        let layout = Layout::default();
        assert_eq!(layout.map_pointer(33, 10), Target::DeadZone);
        assert_eq!(layout.map_pointer(500, 0), Target::DeadZone);
        assert_eq!(layout.map_pointer(961, 31), Target::DeadZone);
    }
    
    #[test]
    fn test_out_of_range_clamps() {
        let layout = Layout::default();
        assert_eq!(layout.map_pointer(10_000, 10_000), Target::Cell { row: 19, col: 29 });
        assert_eq!(layout.map_pointer(-50, 100), Target::Cell { row: 2, col: 0 });
        assert_eq!(layout.map_pointer(-5, -5), Target::Control);
    }
    
    #[test]
    fn test_every_cell_reachable_from_its_origin() {
        let layout = Layout::default();
        for row in 0..layout.height {
            for col in 0..layout.width {
                let (x, y) = layout.cell_origin(row, col);
                let hit = layout.map_pointer(x as i32 + 1, y as i32 + 1);
                assert_eq!(hit, Target::Cell { row, col });
            }
        }
    }
    
    #[test]
    fn test_origins() {
        let layout = Layout::default();
        assert_eq!(layout.control_origin(), (2.0, 2.0));
        assert_eq!(layout.cell_origin(0, 0), (2.0, 34.0));
        assert_eq!(layout.cell_origin(1, 2), (66.0, 66.0));
    }
}
