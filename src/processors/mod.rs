//! Image processing ahead of recognition.

pub mod enhance;

pub use enhance::{enhance_image, enhance_to_temp_png};
