use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::{CanvasError, CanvasResult};
use crate::grid::Grid;
use crate::util::time;

/// An encoded PNG ready to be handed to a download/save collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub fn export_file_name(timestamp_millis: u64) -> String {
    format!("pixel-art-{}.png", timestamp_millis)
}

/// Renders the grid 1:1; empty cells stay fully transparent.
pub fn render_rgba(grid: &Grid) -> RgbaImage {
    let mut image = RgbaImage::new(grid.width() as u32, grid.height() as u32);
    for (x, y, pixel) in grid.pixels() {
        if !pixel.is_empty() {
            image.put_pixel(x as u32, y as u32, Rgba(pixel.color().to_rgba8()));
        }
    }
    image
}

pub fn encode_png(grid: &Grid) -> CanvasResult<Vec<u8>> {
    let mut bytes = Vec::new();
    render_rgba(grid)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(CanvasError::Encode)?;
    Ok(bytes)
}

pub fn export_png(grid: &Grid) -> CanvasResult<ExportedImage> {
    let bytes = encode_png(grid)?;
    let file_name = export_file_name(time::timestamp_millis());
    log::info!(
        "Exported {}x{} canvas as {} ({} bytes)",
        grid.width(),
        grid.height(),
        file_name,
        bytes.len()
    );
    Ok(ExportedImage { file_name, bytes })
}
