#![warn(missing_docs)]

//! Error types for the geometry library.

use core::fmt;

/// Errors that can occur in geometric calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Error for an unusable steering request.
    /// This variant is returned when a steering step size is negative or not finite.
    InvalidSteeringInput(&'static str),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidSteeringInput(msg) => {
                write!(f, "Invalid steering input: {}", msg)
            }
        }
    }
}

impl core::error::Error for GeometryError {}
