use serde::{Deserialize, Serialize};

use crate::{PolicyErr, Result};

/// The downstream policy model the inputs are prepared for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    #[default]
    Pi0,
    Pi0Fast,
}

/// Configuration of the SO100 input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputsConfig {
    /// The action dimension of the model, state and actions are padded up to it.
    pub action_dim: usize,

    /// Determines which model will be used.
    #[serde(default)]
    pub model_type: ModelType,
}

impl InputsConfig {
    /// Creates a new `InputsConfig`.
    ///
    /// # Errors
    /// `PolicyErr::InvalidConfig` if `action_dim` is zero.
    pub fn new(action_dim: usize, model_type: ModelType) -> Result<Self> {
        let config = Self {
            action_dim,
            model_type,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration such as `{"action_dim": 32, "model_type": "pi0"}`.
    ///
    /// # Errors
    /// `PolicyErr::InvalidConfig` if the JSON is malformed or the values are invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.action_dim == 0 {
            return Err(PolicyErr::InvalidConfig(
                "action_dim must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults_to_pi0() {
        let config = InputsConfig::from_json(r#"{ "action_dim": 32 }"#).unwrap();

        assert_eq!(config.action_dim, 32);
        assert_eq!(config.model_type, ModelType::Pi0);
    }

    #[test]
    fn test_from_json_reads_fast_variant() {
        let config =
            InputsConfig::from_json(r#"{ "action_dim": 7, "model_type": "pi0_fast" }"#).unwrap();

        assert_eq!(config.model_type, ModelType::Pi0Fast);
    }

    #[test]
    fn test_rejects_zero_action_dim() {
        assert!(matches!(
            InputsConfig::new(0, ModelType::Pi0),
            Err(PolicyErr::InvalidConfig(_))
        ));
        assert!(matches!(
            InputsConfig::from_json(r#"{ "action_dim": 0 }"#),
            Err(PolicyErr::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_model_type() {
        assert!(InputsConfig::from_json(r#"{ "action_dim": 8, "model_type": "pi1" }"#).is_err());
    }
}
