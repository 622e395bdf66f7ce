//! The 32×32 logical pixel grid and its drawing primitives.
//!
//! Coordinates are signed so that callers can pass positions that fall off
//! the grid; those writes are dropped rather than reported.

use crate::palette::{Color, BG};

/// Logical pixels per side
pub const GRID_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: [[Color; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Creates a grid with every cell set to the background color
    pub fn new() -> Self {
        Self::filled(BG)
    }

    pub fn filled(color: Color) -> Self {
        Self {
            cells: [[color; GRID_SIZE]; GRID_SIZE],
        }
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < GRID_SIZE && y < GRID_SIZE).then_some((x, y))
    }

    /// Returns the color at `(x, y)`, or `None` off the grid
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        Self::index(x, y).map(|(x, y)| self.cells[y][x])
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((x, y)) = Self::index(x, y) {
            self.cells[y][x] = color;
        }
    }

    /// Inclusive on both ends
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        for x in x1..=x2 {
            self.set_pixel(x, y, color);
        }
    }

    /// Inclusive on both ends
    pub fn vline(&mut self, x: i32, y1: i32, y2: i32, color: Color) {
        for y in y1..=y2 {
            self.set_pixel(x, y, color);
        }
    }

    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        for y in y1..=y2 {
            self.hline(x1, x2, y, color);
        }
    }

    /// Iterates over every cell as `(x, y, color)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &color)| (x as u32, y as u32, color))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
