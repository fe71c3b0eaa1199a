//! PNG export and raster image import.

mod export;
mod import;

pub use export::{ExportedImage, encode_png, export_file_name, export_png, render_rgba};
pub use import::{ImportJob, grid_from_image, import_image, target_dimensions};
