use ndarray::{Array3, ArrayD, Ix3};

use crate::{PolicyErr, Result, record::Value};

/// The amount of color channels every parsed image has.
pub const CHANNELS: usize = 3;

/// Normalizes a camera frame into an 8-bit `(height, width, channel)` image.
///
/// Float frames are scaled from `[0, 1]` into `0..=255` (rounded and saturated), and channel-first
/// frames (leading axis of size 3) are permuted to channel-last.
///
/// # Arguments
/// * `key` - The record key the frame was read from, for error reporting.
/// * `value` - The frame.
///
/// # Returns
/// The normalized image or an error if the frame is not a rank 3, 3-channel array.
pub fn parse_image(key: &str, value: &Value) -> Result<Array3<u8>> {
    let bytes: ArrayD<u8> = match value {
        Value::Float(a) => a.mapv(|x| (255.0 * x).round() as u8),
        Value::Byte(a) => a.clone(),
        Value::Text(_) => {
            return Err(PolicyErr::UnexpectedType {
                key: key.to_string(),
                expected: "an image array",
                got: value.kind(),
            });
        }
    };

    let shape = bytes.shape().to_vec();
    let image = bytes
        .into_dimensionality::<Ix3>()
        .map_err(|_| invalid_shape(key, shape))?;

    let image = if image.shape()[0] == CHANNELS {
        image
            .permuted_axes([1, 2, 0])
            .as_standard_layout()
            .into_owned()
    } else {
        image
    };

    if image.shape()[2] != CHANNELS {
        return Err(invalid_shape(key, image.shape().to_vec()));
    }

    Ok(image)
}

fn invalid_shape(key: &str, got: Vec<usize>) -> PolicyErr {
    PolicyErr::InvalidShape {
        key: key.to_string(),
        expected: "(3, h, w) or (h, w, 3)",
        got,
    }
}
