//! The fixed drawing script for the mammography machine and pink ribbon.
//!
//! Shapes are layered by overwriting: a larger rectangle in one shade is
//! drawn first, then smaller rectangles and lines in lighter or darker
//! shades on top to form highlights and edges. Reordering the calls changes
//! the picture.

use crate::grid::Grid;
use crate::palette::*;

/// Cells cleared to transparent so the background reads as a rounded square
pub const ROUNDED_CORNERS: [(i32, i32); 12] = [
    (0, 0),
    (1, 0),
    (0, 1),
    (31, 0),
    (30, 0),
    (31, 1),
    (0, 31),
    (1, 31),
    (0, 30),
    (31, 31),
    (30, 31),
    (31, 30),
];

/// Oscilloscope-style trace on the monitor
pub const WAVEFORM: [(i32, i32); 5] = [(14, 8), (15, 7), (16, 8), (17, 7), (18, 6)];

/// Every ribbon cell, in drawing order
pub const RIBBON: [(i32, i32, Color); 18] = [
    // left loop
    (22, 14, RIBBON_PINK),
    (21, 15, RIBBON_PINK),
    (21, 16, RIBBON_PINK),
    (22, 17, RIBBON_PINK),
    (22, 15, RIBBON_DARK),
    (22, 16, RIBBON_DARK),
    // knot
    (23, 17, RIBBON_DARK),
    (23, 18, RIBBON_PINK),
    // right loop
    (24, 14, RIBBON_PINK),
    (25, 15, RIBBON_PINK),
    (25, 16, RIBBON_PINK),
    (24, 17, RIBBON_PINK),
    (24, 15, RIBBON_DARK),
    (24, 16, RIBBON_DARK),
    // tails
    (22, 19, RIBBON_PINK),
    (21, 20, RIBBON_PINK),
    (24, 19, RIBBON_PINK),
    (25, 20, RIBBON_PINK),
];

/// Paints the complete icon onto a fresh grid
pub fn render() -> Grid {
    let mut grid = Grid::new();

    grid.fill_rect(0, 0, 31, 31, BG);
    for (x, y) in ROUNDED_CORNERS {
        grid.set_pixel(x, y, TRANSPARENT);
    }

    draw_machine(&mut grid);
    draw_monitor(&mut grid);
    draw_ribbon(&mut grid);

    grid
}

fn draw_machine(grid: &mut Grid) {
    // Base platform
    grid.fill_rect(8, 26, 24, 27, DARK_GRAY);
    grid.fill_rect(9, 25, 23, 26, MID_GRAY);
    grid.hline(10, 22, 28, VERY_DARK);

    // Vertical column
    grid.fill_rect(14, 10, 18, 26, MID_GRAY);
    grid.fill_rect(15, 10, 17, 26, LIGHT_GRAY);
    grid.vline(14, 10, 26, DARK_GRAY);
    grid.vline(18, 10, 26, DARK_GRAY);

    // Gantry arm
    grid.fill_rect(9, 12, 14, 14, MID_GRAY);
    grid.fill_rect(10, 12, 13, 13, LIGHT_GRAY);
    grid.hline(9, 14, 12, DARK_GRAY);
    grid.hline(9, 14, 14, DARK_GRAY);
    grid.vline(9, 12, 14, DARK_GRAY);

    // Compression paddle
    grid.fill_rect(7, 15, 13, 16, LIGHT_GRAY);
    grid.hline(7, 13, 15, DARK_GRAY);
    grid.hline(7, 13, 16, MID_GRAY);

    // Detector platform
    grid.fill_rect(7, 19, 13, 20, LIGHT_GRAY);
    grid.hline(7, 13, 19, MID_GRAY);
    grid.hline(7, 13, 20, DARK_GRAY);

    // Lower arm
    grid.fill_rect(9, 20, 14, 22, MID_GRAY);
    grid.fill_rect(10, 20, 13, 21, LIGHT_GRAY);
    grid.vline(9, 20, 22, DARK_GRAY);
    // Top edge runs across the column to the ribbon
    grid.hline(9, 22, 14, DARK_GRAY);
}

fn draw_monitor(grid: &mut Grid) {
    grid.fill_rect(12, 5, 20, 10, VERY_DARK);
    grid.fill_rect(13, 6, 19, 9, SCREEN_BG);

    for (x, y) in WAVEFORM {
        grid.set_pixel(x, y, SCREEN_GREEN);
    }

    // Stand
    grid.fill_rect(15, 10, 17, 10, DARK_GRAY);
}

fn draw_ribbon(grid: &mut Grid) {
    for (x, y, color) in RIBBON {
        grid.set_pixel(x, y, color);
    }
}
