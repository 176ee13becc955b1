use ndarray::{Array1, Array3};
use ndarray_rand::{RandomExt, rand_distr::Uniform};
use rand::Rng;

use super::{
    MAIN_LEFT_IMAGE_KEY, PROMPT_KEY, SECONDARY_0_IMAGE_KEY, SECONDARY_1_IMAGE_KEY, STATE_KEY,
};
use crate::record::Record;

/// The length of the raw SO100 state vector, 6 joints per arm.
pub const STATE_DIM: usize = 12;

/// The `(height, width, channel)` shape of the synthesized camera frames.
pub const IMAGE_SHAPE: (usize, usize, usize) = (224, 224, 3);

/// Creates a random raw SO100 example, useful for tracing and testing the policy.
///
/// # Arguments
/// * `rng` - The random number generator to sample the state and frames from.
pub fn make_example<R: Rng + ?Sized>(rng: &mut R) -> Record {
    // SAFETY: These ranges are always valid.
    let unit = Uniform::new(0.0f32, 1.0).unwrap();
    let pixel = Uniform::new_inclusive(0u8, 255).unwrap();

    let frame = |rng: &mut R| Array3::<u8>::random_using(IMAGE_SHAPE, &pixel, rng).into_dyn();

    Record::new()
        .with(STATE_KEY, Array1::<f32>::random_using(STATE_DIM, &unit, rng).into_dyn())
        .with(MAIN_LEFT_IMAGE_KEY, frame(rng))
        .with(SECONDARY_0_IMAGE_KEY, frame(rng))
        .with(SECONDARY_1_IMAGE_KEY, frame(rng))
        .with(PROMPT_KEY, "do something")
}
