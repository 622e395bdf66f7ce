//! Derived icon set for the web app: favicons, the Apple touch icon and
//! maskable PWA icons, all cut from the full-resolution canvas.

use crate::manifest::{self, IconPurpose};
use crate::palette::BG;
use crate::raster::save_png;
use anyhow::{Context, Result};
use image::{
    imageops::{self, FilterType},
    ImageBuffer, RgbaImage,
};
use std::{fs::create_dir_all, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebIcon {
    pub file_name: &'static str,
    pub size: u32,
    pub purpose: IconPurpose,
}

impl WebIcon {
    const fn any(file_name: &'static str, size: u32) -> Self {
        Self {
            file_name,
            size,
            purpose: IconPurpose::Any,
        }
    }

    const fn maskable(file_name: &'static str, size: u32) -> Self {
        Self {
            file_name,
            size,
            purpose: IconPurpose::Maskable,
        }
    }
}

pub const WEB_ICONS: [WebIcon; 7] = [
    WebIcon::any("icon-512x512.png", 512),
    WebIcon::any("icon-192x192.png", 192),
    WebIcon::any("apple-touch-icon.png", 180),
    WebIcon::any("favicon-32x32.png", 32),
    WebIcon::any("favicon-16x16.png", 16),
    WebIcon::maskable("icon-maskable-512x512.png", 512),
    WebIcon::maskable("icon-maskable-192x192.png", 192),
];

/// Writes every entry of [`WEB_ICONS`] plus `manifest.json` into `out_dir`
pub fn generate_web_icons(canvas: &RgbaImage, out_dir: &Path) -> Result<()> {
    create_dir_all(out_dir).context("Can't create web icon directory")?;

    println!("Generating web icons...");
    for icon in WEB_ICONS {
        let image = match icon.purpose {
            IconPurpose::Any => resize(canvas, icon.size),
            IconPurpose::Maskable => maskable(canvas, icon.size),
        };
        save_png(&image, &out_dir.join(icon.file_name))?;
        println!("  ✓ Generated {} ({}x{})", icon.file_name, icon.size, icon.size);
    }

    manifest::write_manifest(out_dir, &WEB_ICONS)?;

    Ok(())
}

// Nearest keeps the logical pixels as hard-edged blocks; a smoothing
// filter would blur the flat colors into each other.
fn resize(canvas: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(canvas, size, size, FilterType::Nearest)
}

/// Padding on each side that keeps the artwork inside the 80% safe zone
pub fn maskable_padding(size: u32) -> u32 {
    (size as f32 * 0.1).round() as u32
}

/// Places the artwork on an opaque background square, inset by
/// [`maskable_padding`] on every side
fn maskable(canvas: &RgbaImage, size: u32) -> RgbaImage {
    let padding = maskable_padding(size);
    let inner = resize(canvas, size - padding * 2);

    let mut background: RgbaImage = ImageBuffer::from_pixel(size, size, BG);
    imageops::overlay(&mut background, &inner, padding.into(), padding.into());
    background
}
