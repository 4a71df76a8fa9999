//! This module defines the error types used by the `headon-navigation` crate.

#![warn(missing_docs)]

use headon_geometry::GeometryError;

/// Error type for navigation operations.
///
/// This enum encapsulates all possible errors that can occur while planning,
/// following or driving a scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationError {
    /// Error for an unusable configuration value.
    /// This variant is returned by `MotionConfig::validate` and by every constructor that validates.
    InvalidConfig(&'static str),
    /// Error for a nearest-node query against a tree with no nodes.
    EmptyTree,
    /// Error for a node id that does not belong to the tree it was used with.
    UnknownNode(usize),
    /// Error for a scenario state change that is not allowed from the current state.
    InvalidTransition(&'static str),
    /// Error raised by a geometric primitive.
    Geometry(GeometryError),
}

impl core::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NavigationError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            NavigationError::EmptyTree => write!(f, "Nearest-node query on an empty tree"),
            NavigationError::UnknownNode(id) => write!(f, "Unknown tree node: {}", id),
            NavigationError::InvalidTransition(msg) => {
                write!(f, "Invalid scenario transition: {}", msg)
            }
            NavigationError::Geometry(e) => write!(f, "Geometry error: {}", e),
        }
    }
}

impl core::error::Error for NavigationError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            NavigationError::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeometryError> for NavigationError {
    fn from(e: GeometryError) -> Self {
        NavigationError::Geometry(e)
    }
}
