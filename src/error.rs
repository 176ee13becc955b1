use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire policy module.
pub type Result<T> = std::result::Result<T, PolicyErr>;

/// The policy module's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum PolicyErr {
    MissingKey {
        key: String,
    },
    UnexpectedType {
        key: String,
        expected: &'static str,
        got: &'static str,
    },
    InvalidShape {
        key: String,
        expected: &'static str,
        got: Vec<usize>,
    },
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    InvalidConfig(String),
}

impl Display for PolicyErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PolicyErr::MissingKey { key } => format!("The record has no value for key '{key}'"),
            PolicyErr::UnexpectedType { key, expected, got } => {
                format!("The value at '{key}' should be {expected}, got {got}")
            }
            PolicyErr::InvalidShape { key, expected, got } => {
                format!("The array at '{key}' should be {expected}, got shape {got:?}")
            }
            PolicyErr::SizeMismatch {
                what,
                got,
                expected,
            } => format!(
                "There's a size mismatch in {what}, got {got} and expected at least {expected}"
            ),
            PolicyErr::InvalidConfig(msg) => format!("invalid config: {msg}"),
        };

        write!(f, "{s}")
    }
}

impl Error for PolicyErr {}

impl From<serde_json::Error> for PolicyErr {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}
