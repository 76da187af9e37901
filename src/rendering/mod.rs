use macroquad::prelude::*;
use crate::application::{Layout, Mode};
use crate::domain::Grid;

const ALIVE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const DEAD_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const BACKGROUND_COLOR: Color = Color::new(100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 1.0);
const STRIP_COLOR: Color = Color::new(175.0 / 255.0, 175.0 / 255.0, 175.0 / 255.0, 1.0);
const PLAY_COLOR: Color = Color::new(200.0 / 255.0, 10.0 / 255.0, 20.0 / 255.0, 1.0);

/// Fill the window with the border colour
pub fn draw_background() {
    clear_background(BACKGROUND_COLOR);
}

/// Draw every cell as a filled square, one row below the control strip
pub fn draw_grid(grid: &Grid, layout: &Layout) {
    let size = layout.cell_size as f32;
    
    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = layout.cell_origin(row, col);
        let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(x, y, size, size, color);
    }
}

/// Draw the light strip to the right of the control square with the generation count
pub fn draw_control_strip(layout: &Layout, generation: u64, population: usize) {
    let pitch = layout.pitch() as f32;
    let border = layout.border_size as f32;
    let size = layout.cell_size as f32;
    let strip_width = pitch * layout.width as f32 - pitch - border;
    
    draw_rectangle(border + pitch, border, strip_width, size, STRIP_COLOR);
    
    let text = format!("Generation: {}   Alive: {}", generation, population);
    let font_size = (size * 0.6).max(10.0);
    draw_text(&text, border + pitch + 8.0, border + size * 0.7, font_size, DEAD_COLOR);
}

/// Draw the control square: a play triangle while paused, pause bars while running
pub fn draw_control_glyph(mode: Mode, layout: &Layout) {
    let (x, y) = layout.control_origin();
    let size = layout.cell_size as f32;
    
    draw_rectangle(x, y, size, size, STRIP_COLOR);
    draw_rectangle_lines(x + 2.0, y + 2.0, size - 4.0, size - 4.0, 2.0, BACKGROUND_COLOR);
    
    match mode {
        Mode::Paused => {
            draw_triangle(
                vec2(x + size * 0.3, y + size * 0.2),
                vec2(x + size * 0.3, y + size * 0.77),
                vec2(x + size * 0.7, y + size * 0.47),
                PLAY_COLOR,
            );
        }
        Mode::Running => {
            let bar_width = size * 0.13;
            let bar_height = size - size * 0.47;
            draw_rectangle(x + size * 0.3, y + size * 0.23, bar_width, bar_height, DEAD_COLOR);
            draw_rectangle(x + size * 0.57, y + size * 0.23, bar_width, bar_height, DEAD_COLOR);
        }
    }
}
