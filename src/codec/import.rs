use futures::channel::oneshot;
use image::DynamicImage;
use image::imageops::{self, FilterType};

use crate::color::Color;
use crate::error::{CanvasError, CanvasResult};
use crate::grid::{Grid, MAX_DIMENSION, MIN_DIMENSION, Pixel};

/// Grid size for a source image of `src_width` x `src_height`.
///
/// Large images are scaled down to fit 128 on the longer side, keeping the
/// aspect ratio and rounding down. Small images keep their size. Either side
/// is then raised to at least 8 so the result is a valid canvas.
pub fn target_dimensions(src_width: u32, src_height: u32) -> (usize, usize) {
    let (w, h) = (src_width as usize, src_height as usize);
    let longest = w.max(h);
    let (w, h) = if longest > MAX_DIMENSION {
        (w * MAX_DIMENSION / longest, h * MAX_DIMENSION / longest)
    } else {
        (w, h)
    };
    (w.max(MIN_DIMENSION), h.max(MIN_DIMENSION))
}

/// Resamples a decoded image into a grid (nearest neighbour).
pub fn grid_from_image(image: &DynamicImage) -> CanvasResult<Grid> {
    if image.width() == 0 || image.height() == 0 {
        return Err(CanvasError::EmptyImage);
    }

    let (width, height) = target_dimensions(image.width(), image.height());
    let mut rgba = image.to_rgba8();
    if (rgba.width() as usize, rgba.height() as usize) != (width, height) {
        rgba = imageops::resize(&rgba, width as u32, height as u32, FilterType::Nearest);
    }

    let rows: Vec<Vec<Pixel>> = rgba
        .rows()
        .map(|row| row.map(|p| Pixel::new(Color::from_rgba8(p.0))).collect())
        .collect();
    Grid::from_rows(width, height, rows)
}

/// Decodes any format the `image` crate understands into a grid.
pub fn import_image(bytes: &[u8]) -> CanvasResult<Grid> {
    let image = image::load_from_memory(bytes).map_err(CanvasError::Decode)?;
    log::debug!("Decoded import source: {}x{}", image.width(), image.height());
    let grid = grid_from_image(&image)?;
    log::info!(
        "Imported {}x{} image as {}x{} grid",
        image.width(),
        image.height(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

/// A decode running off the UI thread.
///
/// The result is picked up with [`ImportJob::poll`], which is the single
/// point where the imported grid enters the editor.
#[derive(Debug)]
pub struct ImportJob {
    receiver: oneshot::Receiver<CanvasResult<Grid>>,
}

impl ImportJob {
    pub fn spawn(bytes: Vec<u8>) -> Self {
        let (sender, receiver) = oneshot::channel();

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            // The receiver may be gone if the editor was dropped.
            let _ = sender.send(import_image(&bytes));
        });

        // No threads on the web: decode right away, deliver on next poll.
        #[cfg(target_arch = "wasm32")]
        {
            let _ = sender.send(import_image(&bytes));
        }

        Self { receiver }
    }

    /// Returns the outcome once the decode has finished.
    pub fn poll(&mut self) -> Option<CanvasResult<Grid>> {
        match self.receiver.try_recv() {
            Ok(Some(result)) => Some(result),
            Ok(None) => None,
            Err(oneshot::Canceled) => Some(Err(CanvasError::ImportCancelled)),
        }
    }

    /// Blocks until the decode has finished.
    pub fn wait(self) -> CanvasResult<Grid> {
        futures::executor::block_on(self.receiver).unwrap_or(Err(CanvasError::ImportCancelled))
    }
}
