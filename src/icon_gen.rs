use crate::{
    artwork,
    raster::{self, IMAGE_SIZE, PREVIEW_SIZE},
    web_icons,
};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

pub const FULL_ICON_FILE: &str = "icon-original.png";
pub const PREVIEW_ICON_FILE: &str = "icon-preview.png";

#[derive(Debug, Clone, Parser)]
#[clap(
    name = "pixel-icon",
    about = "Render the PDP Tracker pixel-art icon and its preview"
)]
pub struct Args {
    /// Directory for icon-original.png (512x512) and icon-preview.png (32x32).
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Also generate favicons, the Apple touch icon, maskable icons and manifest.json into DIR
    #[clap(long, value_name = "DIR")]
    pub web_icons: Option<PathBuf>,
}

/// Renders the artwork and writes the full icon, its preview and, when
/// requested, the web icon set
pub fn generate_icons(args: Args) -> Result<()> {
    let grid = artwork::render();
    let canvas = raster::rasterize(&grid);

    std::fs::create_dir_all(&args.output).context("Can't create output directory")?;

    raster::export_full(&canvas, &args.output.join(FULL_ICON_FILE))?;
    println!("Icon saved: {IMAGE_SIZE}x{IMAGE_SIZE}");

    raster::export_preview(&canvas, &args.output.join(PREVIEW_ICON_FILE))?;
    println!("Preview saved: {PREVIEW_SIZE}x{PREVIEW_SIZE}");

    if let Some(dir) = &args.web_icons {
        web_icons::generate_web_icons(&canvas, dir)?;
    }

    Ok(())
}
