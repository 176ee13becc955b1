use std::{env, fs};

use anyhow::Context;
use log::info;
use ndarray::Array2;

use so100_policy::{
    policy::{
        ACTIONS_KEY, InputsConfig, ModelType, ROBOT_ACTION_DIM, So100Inputs, So100Outputs,
        make_example,
    },
    record::Record,
    transforms::DataTransform,
};

const DEFAULT_ACTION_DIM: usize = 32;
const ACTION_HORIZON: usize = 50;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => {
            let content =
                fs::read_to_string(&path).with_context(|| format!("cannot read '{path}'"))?;
            InputsConfig::from_json(&content).with_context(|| format!("invalid config '{path}'"))?
        }
        None => InputsConfig::new(DEFAULT_ACTION_DIM, ModelType::Pi0)?,
    };
    info!("using {config:?}");

    let example = make_example(&mut rand::rng());
    info!(
        "synthesized example with keys {:?}",
        example.keys().collect::<Vec<_>>()
    );

    let adapter = So100Inputs::new(config);
    info!(
        "padding to {} for {:?}",
        adapter.action_dim(),
        adapter.model_type()
    );

    let inputs = adapter.apply(&example)?;
    info!("state {:?}", inputs.state.shape());
    for (role, image) in &inputs.image {
        info!(
            "image {role} {:?} (mask {})",
            image.shape(),
            inputs.image_mask[role]
        );
    }

    // Stand-in for the model's action chunk.
    let width = config.action_dim.max(ROBOT_ACTION_DIM);
    let model_output = Record::new().with(
        ACTIONS_KEY,
        Array2::<f32>::zeros((ACTION_HORIZON, width)).into_dyn(),
    );
    let robot = So100Outputs::new().apply(&model_output)?;
    let actions = robot.require_float(ACTIONS_KEY)?;
    info!("robot actions {:?}", actions.shape());

    Ok(())
}
