mod swatch;
mod tool_button;

pub use swatch::color_swatch;
pub use tool_button::ToolButton;
