//! Adapters between SO100 teleoperation records and the pi0 policy model.

mod config;
mod example;
mod inputs;
mod outputs;

pub use config::{InputsConfig, ModelType};
pub use example::{IMAGE_SHAPE, STATE_DIM, make_example};
pub use inputs::{ImageRole, ModelInput, So100Inputs};
pub use outputs::So100Outputs;

pub const STATE_KEY: &str = "observation/state";
pub const MAIN_LEFT_IMAGE_KEY: &str = "observation/images.main.left";
pub const SECONDARY_0_IMAGE_KEY: &str = "observation/images.secondary_0";
pub const SECONDARY_1_IMAGE_KEY: &str = "observation/images.secondary_1";
pub const ACTIONS_KEY: &str = "actions";
pub const PROMPT_KEY: &str = "prompt";

/// The amount of action columns the robot executes.
pub const ROBOT_ACTION_DIM: usize = 12;
