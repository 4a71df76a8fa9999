//! Per-agent motion state: position, velocity and the queue of waypoints
//! still to visit.

#![warn(missing_docs)]

use std::collections::VecDeque;
use std::fmt;

use headon_geometry::{Point, Vector2};

/// One independently controlled agent.
///
/// `start` and `goal` are fixed for the agent's lifetime. The waypoint queue is
/// replaced wholesale by the planner and afterwards only shrinks from the front.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    /// Label used in logs ("red", "blue").
    pub name: String,
    /// Current position, updated every tick while moving.
    pub position: Point,
    /// Velocity applied on the last advancing tick.
    pub velocity: Vector2,
    start: Point,
    goal: Point,
    pub(crate) path: VecDeque<Point>,
}

impl Agent {
    /// Creates an agent at rest on `start` with no waypoints.
    pub fn new(name: impl Into<String>, start: Point, goal: Point) -> Self {
        Agent {
            name: name.into(),
            position: start,
            velocity: Vector2::ZERO,
            start,
            goal,
            path: VecDeque::new(),
        }
    }

    /// Where the agent began.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Where the agent is headed.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Replaces the remaining waypoints with a freshly planned path.
    pub fn set_path(&mut self, path: Vec<Point>) {
        self.path = path.into();
    }

    /// The waypoint the agent is currently heading for.
    pub fn next_waypoint(&self) -> Option<Point> {
        self.path.front().copied()
    }

    /// Remaining waypoints, next one first.
    pub fn waypoints(&self) -> impl Iterator<Item = &Point> {
        self.path.iter()
    }

    /// Number of waypoints not yet reached.
    pub fn remaining(&self) -> usize {
        self.path.len()
    }

    /// True once every waypoint has been reached.
    pub fn is_done(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} moving {} ({} waypoints left)",
            self.name,
            self.position,
            self.velocity,
            self.path.len()
        )
    }
}
