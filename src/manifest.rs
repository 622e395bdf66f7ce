//! Web app manifest written next to the web icon set
//!
//! Only the members the icon set feeds into are modelled here; the icon
//! list is derived from the same table that drives PNG generation so the
//! two never drift apart.

use crate::palette::BG_HEX;
use crate::web_icons::WebIcon;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

pub const APP_NAME: &str = "PDP Tracker";

/// Icons smaller than this are favicons and stay out of the manifest
pub const MIN_MANIFEST_ICON_SIZE: u32 = 192;

#[derive(Serialize, Debug, Clone)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub start_url: String,
    /// Display mode (e.g., "standalone", "fullscreen", "browser")
    pub display: String,
    pub theme_color: String,
    pub background_color: String,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ManifestIcon {
    /// Site-absolute URL of the PNG
    pub src: String,

    /// Space separated `WxH` list; one entry per icon here
    pub sizes: String,

    #[serde(rename = "type")]
    pub mime_type: String,

    pub purpose: IconPurpose,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IconPurpose {
    Any,
    /// Safe to crop to any shape; artwork lives in the central 80%
    Maskable,
}

impl ManifestIcon {
    pub fn new(icon: &WebIcon) -> Self {
        Self {
            src: format!("/{}", icon.file_name),
            sizes: format!("{0}x{0}", icon.size),
            mime_type: "image/png".to_string(),
            purpose: icon.purpose,
        }
    }
}

impl WebManifest {
    pub fn new(icons: &[WebIcon]) -> Self {
        Self {
            name: APP_NAME.to_string(),
            short_name: APP_NAME.to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            theme_color: BG_HEX.to_string(),
            background_color: BG_HEX.to_string(),
            icons: icons
                .iter()
                .filter(|icon| icon.size >= MIN_MANIFEST_ICON_SIZE)
                .map(ManifestIcon::new)
                .collect(),
        }
    }
}

/// Writes `manifest.json` into `dir`
pub fn write_manifest(dir: &Path, icons: &[WebIcon]) -> Result<()> {
    let manifest = WebManifest::new(icons);
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(dir.join("manifest.json"), json).context("write manifest.json")?;
    println!("  ✓ Generated manifest.json");
    Ok(())
}
