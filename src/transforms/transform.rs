use crate::Result;

/// A data transform: maps one record onto another.
pub trait DataTransform {
    type Input;
    type Output;

    /// Applies the transform to `data`.
    ///
    /// # Arguments
    /// * `data` - The record to transform.
    ///
    /// # Returns
    /// The transformed record or an error if `data` is missing a required field or holds one of
    /// the wrong shape.
    fn apply(&self, data: &Self::Input) -> Result<Self::Output>;
}
