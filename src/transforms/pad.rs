use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn, Slice};

use crate::{PolicyErr, Result};

/// Pads the last dimension of `x` with zeros up to `target_dim`.
///
/// # Arguments
/// * `key` - The record key the array was read from, for error reporting.
/// * `x` - The array to pad, of rank at least 1.
/// * `target_dim` - The width the last dimension should have.
///
/// # Returns
/// The padded array, or a copy of `x` if its last dimension is already `target_dim` wide or wider.
/// Fails for rank 0 arrays.
pub fn pad_to_dim(key: &str, x: ArrayViewD<f32>, target_dim: usize) -> Result<ArrayD<f32>> {
    let Some(&current) = x.shape().last() else {
        return Err(PolicyErr::InvalidShape {
            key: key.to_string(),
            expected: "rank >= 1",
            got: vec![],
        });
    };

    if current >= target_dim {
        return Ok(x.to_owned());
    }

    let mut shape = x.shape().to_vec();
    let last = shape.len() - 1;
    shape[last] = target_dim;

    let mut padded = ArrayD::zeros(IxDyn(&shape));
    padded
        .slice_axis_mut(Axis(last), Slice::from(..current))
        .assign(&x);

    Ok(padded)
}

#[cfg(test)]
mod tests {
    use ndarray::{ArrayD, IxDyn, array};

    use super::*;

    #[test]
    fn test_pad_vector_extends_with_zeros() {
        let state = array![0.1f32, 0.2, 0.3, 0.4, 0.5, 0.6].into_dyn();
        let padded = pad_to_dim("state", state.view(), 8).unwrap();

        assert_eq!(padded.shape(), &[8]);
        assert_eq!(
            padded,
            array![0.1f32, 0.2, 0.3, 0.4, 0.5, 0.6, 0.0, 0.0].into_dyn()
        );
    }

    #[test]
    fn test_pad_never_truncates() {
        let state = array![1.0f32, 2.0, 3.0].into_dyn();

        assert_eq!(pad_to_dim("state", state.view(), 3).unwrap(), state);
        assert_eq!(pad_to_dim("state", state.view(), 2).unwrap(), state);
    }

    #[test]
    fn test_pad_matrix_pads_every_row() {
        let actions = array![[1.0f32, 2.0], [3.0, 4.0], [5.0, 6.0]].into_dyn();
        let padded = pad_to_dim("actions", actions.view(), 4).unwrap();

        assert_eq!(
            padded,
            array![[1.0f32, 2.0, 0.0, 0.0], [3.0, 4.0, 0.0, 0.0], [5.0, 6.0, 0.0, 0.0]].into_dyn()
        );
    }

    #[test]
    fn test_pad_scalar_fails() {
        let scalar = ArrayD::<f32>::zeros(IxDyn(&[]));

        assert_eq!(
            pad_to_dim("state", scalar.view(), 4),
            Err(PolicyErr::InvalidShape {
                key: "state".into(),
                expected: "rank >= 1",
                got: vec![],
            })
        );
    }
}
