//! Waypoint following at a bounded speed.

#![warn(missing_docs)]

use headon_geometry::{Vector2, distance};
use tracing::debug;

use crate::agent::Agent;
use crate::config::MotionConfig;
use crate::error::NavigationError;

/// What a single follower tick did to an agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FollowStep {
    /// No waypoints left; the agent stays put.
    Idle,
    /// The front waypoint was reached and removed.
    Arrived,
    /// The agent moved towards its front waypoint.
    Advanced,
}

/// Moves agents along their waypoint queues.
#[derive(Debug, Clone, Copy)]
pub struct PathFollower {
    speed: f64,
    waypoint_tolerance: f64,
}

impl PathFollower {
    /// Creates a follower using `agent_speed` and `waypoint_tolerance`.
    pub fn new(config: &MotionConfig) -> Result<Self, NavigationError> {
        config.validate()?;
        Ok(PathFollower {
            speed: config.agent_speed,
            waypoint_tolerance: config.waypoint_tolerance,
        })
    }

    /// Advances `agent` by one tick.
    ///
    /// Within `waypoint_tolerance` of the front waypoint the waypoint is popped
    /// and the agent does not move this tick. Otherwise the agent's velocity is
    /// set to `speed` towards the waypoint and applied once. An agent with an
    /// empty queue has its velocity zeroed. The queue never grows.
    pub fn tick(&self, agent: &mut Agent) -> FollowStep {
        let Some(target) = agent.next_waypoint() else {
            agent.velocity = Vector2::ZERO;
            return FollowStep::Idle;
        };

        let direction = (target - agent.position).normalized();
        match direction {
            Some(unit) if distance(agent.position, target) >= self.waypoint_tolerance => {
                agent.velocity = unit * self.speed;
                agent.position += agent.velocity;
                FollowStep::Advanced
            }
            // within tolerance, or sitting exactly on the waypoint
            _ => {
                agent.path.pop_front();
                debug!(agent = %agent.name, waypoint = %target, left = agent.path.len(), "Waypoint reached");
                FollowStep::Arrived
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headon_geometry::Point;

    const EPSILON: f64 = 1e-9;

    fn follower() -> PathFollower {
        PathFollower::new(&MotionConfig::default()).unwrap()
    }

    #[test]
    fn test_advance_towards_waypoint() {
        let mut agent = Agent::new("red", Point::new(100.0, 300.0), Point::new(700.0, 300.0));
        agent.set_path(vec![Point::new(700.0, 300.0)]);

        assert_eq!(follower().tick(&mut agent), FollowStep::Advanced);
        // speed 0.8 along +x
        assert!((agent.position.x - 100.8).abs() < EPSILON);
        assert!((agent.position.y - 300.0).abs() < EPSILON);
        assert!((agent.velocity.x - 0.8).abs() < EPSILON);
        assert_eq!(agent.remaining(), 1);
    }

    #[test]
    fn test_pop_on_arrival_keeps_position_and_velocity() {
        let mut agent = Agent::new("red", Point::new(0.0, 0.0), Point::new(50.0, 0.0));
        agent.set_path(vec![Point::new(5.0, 0.0), Point::new(50.0, 0.0)]);
        agent.velocity = Vector2::new(0.8, 0.0);

        assert_eq!(follower().tick(&mut agent), FollowStep::Arrived);
        assert_eq!(agent.position, Point::new(0.0, 0.0));
        assert_eq!(agent.velocity, Vector2::new(0.8, 0.0));
        assert_eq!(agent.next_waypoint(), Some(Point::new(50.0, 0.0)));
    }

    #[test]
    fn test_empty_path_stops_agent() {
        let mut agent = Agent::new("blue", Point::new(10.0, 10.0), Point::new(10.0, 10.0));
        agent.velocity = Vector2::new(-0.8, 0.0);
        assert_eq!(follower().tick(&mut agent), FollowStep::Idle);
        assert_eq!(agent.velocity, Vector2::ZERO);
        assert_eq!(agent.position, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_zero_tolerance_on_waypoint_pops() {
        let config = MotionConfig { waypoint_tolerance: 0.0, ..MotionConfig::default() };
        let follower = PathFollower::new(&config).unwrap();
        let mut agent = Agent::new("red", Point::new(1.0, 1.0), Point::new(1.0, 1.0));
        agent.set_path(vec![Point::new(1.0, 1.0)]);
        assert_eq!(follower.tick(&mut agent), FollowStep::Arrived);
        assert!(agent.is_done());
    }

    #[test]
    fn test_path_length_never_increases() {
        let follower = follower();
        let mut agent = Agent::new("red", Point::new(0.0, 0.0), Point::new(60.0, 40.0));
        agent.set_path(vec![
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(40.0, 20.0),
            Point::new(60.0, 40.0),
        ]);

        let mut previous = agent.remaining();
        for _ in 0..500 {
            follower.tick(&mut agent);
            assert!(agent.remaining() <= previous);
            previous = agent.remaining();
        }
        assert!(agent.is_done());
        assert!(distance(agent.position, agent.goal()) < 10.0);
    }
}
