pub mod error;
pub mod policy;
pub mod record;
pub mod transforms;

pub use error::{PolicyErr, Result};
