//! Pairwise proximity test used to keep tree nodes clear of the other agent.
//!
//! This is a snapshot simplification of a velocity obstacle: both agents'
//! velocities are ignored and only the positional separation at the instant of
//! planning is checked.

use headon_geometry::{Point, distance};

/// Returns `true` if `candidate` is closer than `collision_radius` to `other`.
///
/// # Arguments
/// * `candidate` - Position being tested (a new tree node)
/// * `other` - Position of the other agent, captured once at plan time
/// * `collision_radius` - Minimum allowed separation
pub fn is_unsafe(candidate: Point, other: Point, collision_radius: f64) -> bool {
    distance(candidate, other) < collision_radius
}

/// Returns `true` if `candidate` violates the margin around any of `hazards`.
pub fn is_unsafe_among(candidate: Point, hazards: &[Point], collision_radius: f64) -> bool {
    hazards
        .iter()
        .any(|&hazard| is_unsafe(candidate, hazard, collision_radius))
}
