mod image;
mod pad;
mod transform;

pub use image::{CHANNELS, parse_image};
pub use pad::pad_to_dim;
pub use transform::DataTransform;
