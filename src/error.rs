use thiserror::Error;

/// Errors raised by the canvas engine.
///
/// Defined no-ops (filling a region with its own color, undo at the oldest
/// state, painting outside the canvas) are never reported through this type.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Invalid canvas dimensions {width}x{height}: each side must be within 8..=128")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Invalid brush size {0}: must be within 1..=10")]
    InvalidBrushSize(u8),

    #[error("Coordinate ({x}, {y}) is outside the canvas")]
    OutOfBounds { x: i32, y: i32 },

    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Source image has no pixels")]
    EmptyImage,

    #[error("Failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Failed to (de)serialize grid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Malformed grid snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("An image import is still in progress")]
    ImportPending,

    #[error("Image import was cancelled before it finished")]
    ImportCancelled,
}

/// Result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
