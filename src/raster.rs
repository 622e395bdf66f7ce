use crate::grid::{Grid, GRID_SIZE};
use crate::palette::is_transparent;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::{self, FilterType},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Real pixels per logical pixel, on each side
pub const CELL_SIZE: u32 = 16;

/// Side of the full-resolution icon
pub const IMAGE_SIZE: u32 = GRID_SIZE as u32 * CELL_SIZE;

/// Side of the preview, one real pixel per logical pixel
pub const PREVIEW_SIZE: u32 = GRID_SIZE as u32;

/// Expands every opaque grid cell into a solid `CELL_SIZE` square.
///
/// The canvas starts fully transparent and transparent cells are skipped,
/// so their blocks stay transparent in the result.
pub fn rasterize(grid: &Grid) -> RgbaImage {
    let mut canvas = RgbaImage::new(IMAGE_SIZE, IMAGE_SIZE);

    for (cx, cy, color) in grid.cells() {
        if is_transparent(color) {
            continue;
        }
        let x0 = cx * CELL_SIZE;
        let y0 = cy * CELL_SIZE;
        for y in y0..y0 + CELL_SIZE {
            for x in x0..x0 + CELL_SIZE {
                canvas.put_pixel(x, y, color);
            }
        }
    }

    canvas
}

/// Nearest-neighbor reduction of the full icon to `PREVIEW_SIZE`
pub fn preview(image: &RgbaImage) -> RgbaImage {
    imageops::resize(image, PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Nearest)
}

pub fn export_full(image: &RgbaImage, path: &Path) -> Result<()> {
    save_png(image, path)
}

pub fn export_preview(image: &RgbaImage, path: &Path) -> Result<()> {
    save_png(&preview(image), path)
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_png(image, &mut writer)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush PNG {}", path.display()))?;
    Ok(())
}

// Encode RGBA pixels as PNG with compression
fn write_png<W: Write>(image: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork;
    use crate::palette::{BG, DARK_GRAY, TRANSPARENT};
    use image::Rgba;

    fn assert_block(image: &RgbaImage, cx: u32, cy: u32, expected: Rgba<u8>) {
        for y in cy * CELL_SIZE..(cy + 1) * CELL_SIZE {
            for x in cx * CELL_SIZE..(cx + 1) * CELL_SIZE {
                assert_eq!(
                    *image.get_pixel(x, y),
                    expected,
                    "pixel ({x}, {y}) of cell ({cx}, {cy})"
                );
            }
        }
    }

    #[test]
    fn test_rasterize_dimensions() {
        let image = rasterize(&Grid::new());
        assert_eq!(image.dimensions(), (512, 512));
    }

    #[test]
    fn test_rasterize_expands_every_cell() {
        let grid = artwork::render();
        let image = rasterize(&grid);
        for (cx, cy, color) in grid.cells() {
            let expected = if is_transparent(color) {
                TRANSPARENT
            } else {
                color
            };
            assert_block(&image, cx, cy, expected);
        }
    }

    #[test]
    fn test_transparent_cells_leave_block_untouched() {
        let mut grid = Grid::new();
        // A transparent value with color channels set is still skipped
        grid.set_pixel(4, 7, Rgba([255, 0, 0, 0]));
        let image = rasterize(&grid);
        assert_block(&image, 4, 7, TRANSPARENT);
        assert_block(&image, 5, 7, BG);
    }

    #[test]
    fn test_preview_matches_grid() {
        let grid = artwork::render();
        let small = preview(&rasterize(&grid));
        assert_eq!(small.dimensions(), (PREVIEW_SIZE, PREVIEW_SIZE));
        for (x, y, color) in grid.cells() {
            let pixel = *small.get_pixel(x, y);
            if is_transparent(color) {
                assert_eq!(pixel[3], 0, "preview ({x}, {y}) should be transparent");
            } else {
                assert_eq!(pixel, color, "preview ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_export_writes_readable_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut grid = Grid::new();
        grid.fill_rect(0, 0, 3, 3, DARK_GRAY);
        let image = rasterize(&grid);

        let full_path = dir.path().join("full.png");
        let preview_path = dir.path().join("preview.png");
        export_full(&image, &full_path).unwrap();
        export_preview(&image, &preview_path).unwrap();

        let full = image::open(&full_path).unwrap().to_rgba8();
        assert_eq!(full, image);
        let small = image::open(&preview_path).unwrap().to_rgba8();
        assert_eq!(small.dimensions(), (32, 32));
        assert_eq!(*small.get_pixel(2, 2), DARK_GRAY);
        assert_eq!(*small.get_pixel(10, 10), BG);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icon.png");
        let err = export_full(&rasterize(&Grid::new()), &path).unwrap_err();
        assert!(err.to_string().contains("Failed to create PNG file"));
    }
}
