use celestial_core::AstroError;
use thiserror::Error;

pub type KinematicsResult<T> = Result<T, KinematicsError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    /// Input lies outside the domain where the partial derivatives are defined.
    #[error("{quantity} = {value} is outside the valid domain: {message}")]
    Domain {
        quantity: &'static str,
        value: f64,
        message: String,
    },

    #[error("{quantity} is not finite")]
    NotFinite { quantity: &'static str },

    #[error("Expected {expected} observation values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Core calculation failed: {0}")]
    Core(#[from] AstroError),
}

impl KinematicsError {
    pub fn domain(quantity: &'static str, value: f64, message: impl Into<String>) -> Self {
        Self::Domain {
            quantity,
            value,
            message: message.into(),
        }
    }

    pub fn not_finite(quantity: &'static str) -> Self {
        Self::NotFinite { quantity }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}
