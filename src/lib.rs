pub mod artwork;
pub mod grid;
pub mod icon_gen;
pub mod manifest;
pub mod palette;
pub mod raster;
pub mod web_icons;
