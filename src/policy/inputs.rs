use std::{collections::BTreeMap, fmt};

use log::debug;
use ndarray::{Array3, ArrayD};

use super::{
    ACTIONS_KEY, InputsConfig, MAIN_LEFT_IMAGE_KEY, ModelType, PROMPT_KEY, SECONDARY_0_IMAGE_KEY,
    STATE_KEY,
};
use crate::{
    Result,
    record::Record,
    transforms::{DataTransform, pad_to_dim, parse_image},
};

/// The camera slots the policy model expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImageRole {
    Base,
    LeftWrist,
    RightWrist,
}

impl ImageRole {
    pub const ALL: [ImageRole; 3] = [Self::Base, Self::LeftWrist, Self::RightWrist];

    /// The name the model uses for this slot.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Base => "base_0_rgb",
            Self::LeftWrist => "left_wrist_0_rgb",
            Self::RightWrist => "right_wrist_0_rgb",
        }
    }
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// An example laid out the way the policy model consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInput {
    pub state: ArrayD<f32>,
    pub image: BTreeMap<ImageRole, Array3<u8>>,
    pub image_mask: BTreeMap<ImageRole, bool>,
    pub actions: Option<ArrayD<f32>>,
    pub prompt: Option<String>,
}

/// Maps raw SO100 records onto the policy model's inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct So100Inputs {
    action_dim: usize,
    model_type: ModelType,
}

impl So100Inputs {
    /// Creates a new `So100Inputs` adapter.
    ///
    /// # Arguments
    /// * `config` - A validated input configuration.
    pub fn new(config: InputsConfig) -> Self {
        Self {
            action_dim: config.action_dim,
            model_type: config.model_type,
        }
    }

    pub fn action_dim(&self) -> usize {
        self.action_dim
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    /// Whether the padded part of the state is masked downstream. pi0-FAST doesn't mask.
    pub fn mask_padding(&self) -> bool {
        self.model_type == ModelType::Pi0
    }
}

impl DataTransform for So100Inputs {
    type Input = Record;
    type Output = ModelInput;

    fn apply(&self, data: &Record) -> Result<ModelInput> {
        let state = pad_to_dim(
            STATE_KEY,
            data.require_float(STATE_KEY)?.view(),
            self.action_dim,
        )?;

        // LeRobot stores frames as float (c, h, w), inference frames are already u8 (h, w, c).
        let base = parse_image(MAIN_LEFT_IMAGE_KEY, data.require(MAIN_LEFT_IMAGE_KEY)?)?;
        let left_wrist = parse_image(SECONDARY_0_IMAGE_KEY, data.require(SECONDARY_0_IMAGE_KEY)?)?;

        // The right wrist camera is not used, its slot is always blank.
        let right_wrist = Array3::zeros(left_wrist.raw_dim());

        let image = BTreeMap::from([
            (ImageRole::Base, base),
            (ImageRole::LeftWrist, left_wrist),
            (ImageRole::RightWrist, right_wrist),
        ]);
        let image_mask = ImageRole::ALL.into_iter().map(|role| (role, true)).collect();

        // Actions are only available during training.
        let actions = data
            .optional_float(ACTIONS_KEY)?
            .map(|actions| pad_to_dim(ACTIONS_KEY, actions.view(), self.action_dim))
            .transpose()?;

        let prompt = data.optional_text(PROMPT_KEY)?.map(str::to_string);

        debug!(
            "adapted inputs: state {:?}, actions {:?}, prompt {}, mask padding {}",
            state.shape(),
            actions.as_ref().map(|a| a.shape().to_vec()),
            prompt.is_some(),
            self.mask_padding(),
        );

        Ok(ModelInput {
            state,
            image,
            image_mask,
            actions,
            prompt,
        })
    }
}
