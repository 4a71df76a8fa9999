//! Immutable configuration shared by the planner, the path follower and the
//! avoidance coordinator.

#![warn(missing_docs)]

use headon_geometry::Point;

use crate::error::NavigationError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning constants for planning and motion.
///
/// Built once and handed to every component at construction; nothing reads
/// these values from ambient state. The defaults reproduce the head-on demo
/// (an 800x600 workspace with 40 unit agents).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct MotionConfig {
    /// Workspace width. Samples are drawn from `[0, width]`.
    pub width: f64,
    /// Workspace height. Samples are drawn from `[0, height]`.
    pub height: f64,
    /// Side length of an agent's box. Only used for drawing and for deriving
    /// the default collision radius.
    pub agent_size: f64,
    /// Distance an agent advances per tick while following its path.
    pub agent_speed: f64,
    /// Length of one steering step when growing the tree.
    pub step_size: f64,
    /// Lateral nudge applied per tick by the avoidance coordinator.
    pub deviation_distance: f64,
    /// A tree node closer than this to the goal ends planning.
    pub goal_tolerance: f64,
    /// An agent closer than this to its next waypoint pops it.
    pub waypoint_tolerance: f64,
    /// Probability of sampling the goal instead of a uniform point.
    pub goal_bias: f64,
    /// Minimum separation from the other agent (and from obstacles).
    pub collision_radius: f64,
    /// Iteration budget for one planning call.
    pub max_iterations: usize,
    /// Neighbourhood radius reserved for RRT* rewiring. The planner does not
    /// rewire; the value is only validated.
    pub rewire_radius: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        let agent_size = 40.0;
        MotionConfig {
            width: 800.0,
            height: 600.0,
            agent_size,
            agent_speed: 0.8,
            step_size: 1.0,
            deviation_distance: 1.0,
            goal_tolerance: 10.0,
            waypoint_tolerance: 10.0,
            goal_bias: 0.2,
            collision_radius: agent_size + 60.0,
            max_iterations: 200,
            rewire_radius: 100.0,
        }
    }
}

impl MotionConfig {
    /// Checks every field for a usable value.
    ///
    /// # Returns
    /// * `Result<(), NavigationError>` - `Ok` if the configuration is usable,
    ///   `Err(NavigationError::InvalidConfig)` naming the first offending field otherwise
    pub fn validate(&self) -> Result<(), NavigationError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(NavigationError::InvalidConfig("width must be positive"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(NavigationError::InvalidConfig("height must be positive"));
        }
        if !(self.agent_size.is_finite() && self.agent_size >= 0.0) {
            return Err(NavigationError::InvalidConfig("agent_size must be non-negative"));
        }
        if !(self.agent_speed.is_finite() && self.agent_speed > 0.0) {
            return Err(NavigationError::InvalidConfig("agent_speed must be positive"));
        }
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(NavigationError::InvalidConfig("step_size must be positive"));
        }
        if !(self.deviation_distance.is_finite() && self.deviation_distance >= 0.0) {
            return Err(NavigationError::InvalidConfig(
                "deviation_distance must be non-negative",
            ));
        }
        if !(self.goal_tolerance.is_finite() && self.goal_tolerance >= 0.0) {
            return Err(NavigationError::InvalidConfig("goal_tolerance must be non-negative"));
        }
        if !(self.waypoint_tolerance.is_finite() && self.waypoint_tolerance >= 0.0) {
            return Err(NavigationError::InvalidConfig(
                "waypoint_tolerance must be non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.goal_bias) {
            return Err(NavigationError::InvalidConfig("goal_bias must be within [0, 1]"));
        }
        if !(self.collision_radius.is_finite() && self.collision_radius >= 0.0) {
            return Err(NavigationError::InvalidConfig(
                "collision_radius must be non-negative",
            ));
        }
        if !(self.rewire_radius.is_finite() && self.rewire_radius >= 0.0) {
            return Err(NavigationError::InvalidConfig("rewire_radius must be non-negative"));
        }
        Ok(())
    }

    /// Returns `true` if `p` lies inside the closed workspace rectangle.
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// Start and goal of one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentSpec {
    /// Where the agent begins.
    pub start: Point,
    /// Where the agent is heading.
    pub goal: Point,
}

/// Description of a two-agent run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ScenarioConfig {
    /// First agent ("red"), ticked first.
    pub red: AgentSpec,
    /// Second agent ("blue").
    pub blue: AgentSpec,
    /// Seed for the sampling source. `None` picks one at startup.
    pub seed: Option<u64>,
    /// Centres of static obstacles, each kept `collision_radius` clear.
    pub obstacles: Vec<Point>,
}

impl Default for ScenarioConfig {
    /// The head-on crossing: red goes left to right, blue right to left, both on
    /// the workspace's horizontal midline.
    fn default() -> Self {
        let left = Point::new(100.0, 300.0);
        let right = Point::new(700.0, 300.0);
        ScenarioConfig {
            red: AgentSpec { start: left, goal: right },
            blue: AgentSpec { start: right, goal: left },
            seed: None,
            obstacles: Vec::new(),
        }
    }
}
