//! Reactive separation nudge between the two agents.
//!
//! When the agents are closer than `collision_radius`, each is shifted along
//! the secondary (y) axis by `deviation_distance`, in opposite directions. The
//! first agent keeps right in y-down coordinates, so it goes to -y only when
//! moving towards -x and to +y otherwise. The second agent always takes the
//! other side, which widens the lateral gap by `2 * deviation_distance`.
//! The nudge is stateless and never triggers re-planning.

#![warn(missing_docs)]

use headon_geometry::distance;
use tracing::debug;

use crate::agent::Agent;
use crate::config::MotionConfig;
use crate::error::NavigationError;

/// Applies the separation nudge.
#[derive(Debug, Clone, Copy)]
pub struct AvoidanceCoordinator {
    collision_radius: f64,
    deviation_distance: f64,
}

impl AvoidanceCoordinator {
    /// Creates a coordinator from a validated configuration.
    pub fn new(config: &MotionConfig) -> Result<Self, NavigationError> {
        config.validate()?;
        Ok(AvoidanceCoordinator {
            collision_radius: config.collision_radius,
            deviation_distance: config.deviation_distance,
        })
    }

    /// Nudges both agents apart if they are too close.
    ///
    /// # Returns
    /// * `bool` - `true` if a nudge was applied
    pub fn check_and_apply(&self, first: &mut Agent, second: &mut Agent) -> bool {
        let separation = distance(first.position, second.position);
        if separation >= self.collision_radius {
            return false;
        }

        let side = lateral_sign(first.velocity.x);
        first.position.y += side * self.deviation_distance;
        second.position.y -= side * self.deviation_distance;

        debug!(
            separation,
            first = %first.name,
            second = %second.name,
            "Agents inside collision radius, nudged apart"
        );
        true
    }
}

fn lateral_sign(vx: f64) -> f64 {
    if vx < 0.0 { -1.0 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headon_geometry::{Point, Vector2};

    const EPSILON: f64 = 1e-9;

    fn coordinator() -> AvoidanceCoordinator {
        AvoidanceCoordinator::new(&MotionConfig::default()).unwrap()
    }

    #[test]
    fn test_coincident_agents_separate() {
        let mut a = Agent::new("red", Point::new(400.0, 300.0), Point::new(700.0, 300.0));
        let mut b = Agent::new("blue", Point::new(400.0, 300.0), Point::new(100.0, 300.0));
        let deviation = MotionConfig::default().deviation_distance;

        assert!(coordinator().check_and_apply(&mut a, &mut b));
        assert!((a.position.y - b.position.y).abs() >= 2.0 * deviation - EPSILON);
        // primary axis untouched
        assert_eq!(a.position.x, 400.0);
        assert_eq!(b.position.x, 400.0);
    }

    #[test]
    fn test_head_on_agents_keep_right() {
        let mut a = Agent::new("red", Point::new(380.0, 300.0), Point::new(700.0, 300.0));
        let mut b = Agent::new("blue", Point::new(420.0, 300.0), Point::new(100.0, 300.0));
        a.velocity = Vector2::new(0.8, 0.0);
        b.velocity = Vector2::new(-0.8, 0.0);

        assert!(coordinator().check_and_apply(&mut a, &mut b));
        assert!((a.position.y - 301.0).abs() < EPSILON);
        assert!((b.position.y - 299.0).abs() < EPSILON);
    }

    #[test]
    fn test_same_direction_agents_separate() {
        let mut a = Agent::new("red", Point::new(400.0, 300.0), Point::new(700.0, 300.0));
        let mut b = Agent::new("blue", Point::new(420.0, 300.0), Point::new(700.0, 300.0));
        a.velocity = Vector2::new(0.8, 0.0);
        b.velocity = Vector2::new(0.8, 0.0);

        assert!(coordinator().check_and_apply(&mut a, &mut b));
        assert!((a.position.y - 301.0).abs() < EPSILON);
        assert!((b.position.y - 299.0).abs() < EPSILON);

        let mut c = Agent::new("red", Point::new(420.0, 300.0), Point::new(100.0, 300.0));
        let mut d = Agent::new("blue", Point::new(400.0, 300.0), Point::new(100.0, 300.0));
        c.velocity = Vector2::new(-0.8, 0.0);
        d.velocity = Vector2::new(-0.8, 0.0);
        assert!(coordinator().check_and_apply(&mut c, &mut d));
        assert!((c.position.y - 299.0).abs() < EPSILON);
        assert!((d.position.y - 301.0).abs() < EPSILON);
    }

    #[test]
    fn test_distant_agents_untouched() {
        let mut a = Agent::new("red", Point::new(100.0, 300.0), Point::new(700.0, 300.0));
        let mut b = Agent::new("blue", Point::new(200.0, 300.0), Point::new(100.0, 300.0));
        // exactly collision_radius apart is safe
        assert!(!coordinator().check_and_apply(&mut a, &mut b));
        assert_eq!(a.position, Point::new(100.0, 300.0));
        assert_eq!(b.position, Point::new(200.0, 300.0));
    }
}
