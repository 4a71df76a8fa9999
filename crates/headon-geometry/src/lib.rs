#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library of 2D planar geometry primitives."]
#![doc = ""]
#![doc = "This crate provides points, vectors, Euclidean distance and the bounded"]
#![doc = "steering step used to grow a sampling-based search tree."]

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Sub};
use libm::sqrt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::GeometryError;

/// A position `(x, y)` in the planar workspace.
///
/// The workspace uses screen-style coordinates: `x` grows to the right and
/// `y` grows downwards. Units are whatever the caller uses (pixels in the
/// viewer).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal (primary axis) coordinate.
    pub x: f64,
    /// Vertical (secondary axis) coordinate.
    pub y: f64,
}

impl Point {
    /// Construct a new point.
    ///
    /// # Arguments
    ///
    /// * `x`: Horizontal coordinate.
    /// * `y`: Vertical coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance from this point to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        distance(*self, other)
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// A displacement or velocity `(x, y)`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Construct a new vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Euclidean length of the vector.
    pub fn length(&self) -> f64 {
        sqrt(self.x * self.x + self.y * self.y)
    }

    /// Returns the unit vector pointing in the same direction, or `None` for
    /// the zero vector (which has no direction).
    pub fn normalized(&self) -> Option<Vector2> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return None;
        }
        Some(Vector2::new(self.x / len, self.y / len))
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:.2}, {:.2}>", self.x, self.y)
    }
}

impl Sub for Point {
    type Output = Vector2;

    fn sub(self, rhs: Point) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector2> for Point {
    type Output = Point;

    fn add(self, rhs: Vector2) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign<Vector2> for Point {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

/// Euclidean distance between two points.
///
/// Symmetric, zero for identical points and satisfies the triangle inequality.
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2 - p1).length()
}

/// Steps from `from` towards `toward` by at most `step_size`.
///
/// If `toward` is closer than `step_size` it is returned exactly, which lets a
/// search tree land on its goal instead of overshooting it forever. When the two
/// points coincide there is no direction to step in and `from` is returned
/// unchanged.
///
/// # Arguments
///
/// * `from`: The point to step from.
/// * `toward`: The point to step towards.
/// * `step_size`: Maximum length of the step.
///
/// # Errors
///
/// Returns `Err(GeometryError::InvalidSteeringInput)` if `step_size` is negative
/// or not finite.
///
/// # Returns
///
/// A point whose distance from `from` is `min(step_size, distance(from, toward))`.
pub fn steer(from: Point, toward: Point, step_size: f64) -> Result<Point, GeometryError> {
    if !step_size.is_finite() || step_size < 0.0 {
        return Err(GeometryError::InvalidSteeringInput(
            "step size must be finite and non-negative",
        ));
    }

    let offset = toward - from;
    let dist = offset.length();
    if dist < step_size {
        return Ok(toward);
    }

    match offset.normalized() {
        Some(direction) => Ok(from + direction * step_size),
        None => Ok(from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_distance_identity_and_symmetry() {
        let p = Point::new(3.5, -2.0);
        let q = Point::new(-1.0, 7.25);
        assert_eq!(distance(p, p), 0.0);
        assert!((distance(p, q) - distance(q, p)).abs() < EPSILON);
    }

    #[test]
    fn test_distance_known_triangle() {
        // 3-4-5 right triangle
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < EPSILON);
        assert!((a.distance_to(b) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_distance_triangle_inequality() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 2.0);
        let c = Point::new(4.0, 9.0);
        assert!(distance(a, c) <= distance(a, b) + distance(b, c) + EPSILON);
    }

    #[test]
    fn test_steer_full_step() {
        let from = Point::new(100.0, 300.0);
        let toward = Point::new(700.0, 300.0);
        let next = steer(from, toward, 1.0).unwrap();
        assert!((next.x - 101.0).abs() < EPSILON);
        assert!((next.y - 300.0).abs() < EPSILON);
        assert!((distance(from, next) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_steer_diagonal_step_length() {
        let from = Point::new(0.0, 0.0);
        let toward = Point::new(30.0, 40.0);
        let next = steer(from, toward, 10.0).unwrap();
        // direction is (0.6, 0.8)
        assert!((next.x - 6.0).abs() < EPSILON);
        assert!((next.y - 8.0).abs() < EPSILON);
    }

    #[test]
    fn test_steer_snaps_when_close() {
        let from = Point::new(0.0, 0.0);
        let toward = Point::new(0.3, 0.4);
        let next = steer(from, toward, 1.0).unwrap();
        assert_eq!(next, toward);
    }

    #[test]
    fn test_steer_step_is_min_of_step_and_distance() {
        let from = Point::new(5.0, 5.0);
        for (toward, step) in [
            (Point::new(5.0, 25.0), 7.0),
            (Point::new(6.0, 5.0), 7.0),
            (Point::new(-20.0, -20.0), 0.5),
        ] {
            let next = steer(from, toward, step).unwrap();
            let expected = step.min(distance(from, toward));
            assert!((distance(from, next) - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn test_steer_coincident_points() {
        let p = Point::new(42.0, 42.0);
        // zero step and zero distance must not divide by zero
        assert_eq!(steer(p, p, 0.0).unwrap(), p);
        assert_eq!(steer(p, p, 1.0).unwrap(), p);
    }

    #[test]
    fn test_steer_invalid_step() {
        let from = Point::new(0.0, 0.0);
        let toward = Point::new(1.0, 0.0);
        assert!(matches!(
            steer(from, toward, -1.0),
            Err(GeometryError::InvalidSteeringInput(_))
        ));
        assert!(matches!(
            steer(from, toward, f64::NAN),
            Err(GeometryError::InvalidSteeringInput(_))
        ));
    }

    #[test]
    fn test_vector_normalized() {
        let v = Vector2::new(0.0, -2.0);
        let unit = v.normalized().unwrap();
        assert!((unit.x - 0.0).abs() < EPSILON);
        assert!((unit.y - (-1.0)).abs() < EPSILON);
        assert!(Vector2::ZERO.normalized().is_none());
    }

    #[test]
    fn test_point_vector_ops() {
        let mut p = Point::new(1.0, 1.0);
        p += Vector2::new(0.5, -0.5) * 2.0;
        assert_eq!(p, Point::new(2.0, 0.0));
        assert_eq!(p - Point::new(1.0, 1.0), Vector2::new(1.0, -1.0));
    }
}
