use log::debug;
use ndarray::{Axis, Ix2, Slice};

use super::{ACTIONS_KEY, ROBOT_ACTION_DIM};
use crate::{PolicyErr, Result, record::Record, transforms::DataTransform};

/// Maps the policy model's outputs back onto SO100 robot actions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct So100Outputs;

impl So100Outputs {
    /// Returns a new `So100Outputs`.
    pub fn new() -> Self {
        Self
    }
}

impl DataTransform for So100Outputs {
    type Input = Record;
    type Output = Record;

    fn apply(&self, data: &Record) -> Result<Record> {
        let actions = data.require_float(ACTIONS_KEY)?;
        let actions = actions
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| PolicyErr::InvalidShape {
                key: ACTIONS_KEY.to_string(),
                expected: "(timesteps, action_dim)",
                got: actions.shape().to_vec(),
            })?;

        if actions.ncols() < ROBOT_ACTION_DIM {
            return Err(PolicyErr::SizeMismatch {
                what: "action columns",
                got: actions.ncols(),
                expected: ROBOT_ACTION_DIM,
            });
        }

        // 6 per arm, the SO100 setup drives two.
        let robot_actions = actions
            .slice_axis(Axis(1), Slice::from(..ROBOT_ACTION_DIM))
            .to_owned();

        debug!(
            "adapted outputs: {:?} -> {:?}",
            actions.shape(),
            robot_actions.shape()
        );

        Ok(Record::new().with(ACTIONS_KEY, robot_actions.into_dyn()))
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, ArrayD, IxDyn, s};

    use super::*;

    fn output(actions: ArrayD<f32>) -> Record {
        Record::new().with(ACTIONS_KEY, actions)
    }

    #[test]
    fn test_keeps_first_twelve_columns() {
        let actions = Array2::<f32>::from_shape_fn((10, 20), |(t, d)| (t * 100 + d) as f32);
        let robot = So100Outputs::new()
            .apply(&output(actions.clone().into_dyn()))
            .unwrap();

        let kept = robot.require_float(ACTIONS_KEY).unwrap();
        assert_eq!(kept.shape(), &[10, 12]);
        assert_eq!(kept, &actions.slice(s![.., ..12]).to_owned().into_dyn());
        assert_eq!(robot.len(), 1);
    }

    #[test]
    fn test_exactly_twelve_columns_is_identity() {
        let actions = ArrayD::<f32>::ones(IxDyn(&[3, 12]));
        let robot = So100Outputs::new().apply(&output(actions.clone())).unwrap();

        assert_eq!(robot.require_float(ACTIONS_KEY).unwrap(), &actions);
    }

    #[test]
    fn test_too_few_columns_fails() {
        let actions = ArrayD::<f32>::zeros(IxDyn(&[4, 6]));

        assert_eq!(
            So100Outputs::new().apply(&output(actions)),
            Err(PolicyErr::SizeMismatch {
                what: "action columns",
                got: 6,
                expected: 12,
            })
        );
    }

    #[test]
    fn test_rejects_non_matrix_and_missing_actions() {
        let flat = ArrayD::<f32>::zeros(IxDyn(&[24]));

        assert!(matches!(
            So100Outputs::new().apply(&output(flat)),
            Err(PolicyErr::InvalidShape { .. })
        ));
        assert!(matches!(
            So100Outputs::new().apply(&Record::new()),
            Err(PolicyErr::MissingKey { .. })
        ));
    }
}
