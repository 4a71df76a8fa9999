//! Collision-avoiding motion for two agents crossing a shared 2D workspace.
//!
//! The [`rrt::Planner`] grows a goal-biased random tree for each agent while
//! keeping clear of the other agent's position at plan time. The
//! [`follower::PathFollower`] walks the resulting waypoints at a fixed speed,
//! and the [`avoidance::AvoidanceCoordinator`] nudges the agents apart whenever
//! they get too close. [`scenario::Scenario`] ties the three together.

pub mod agent;
pub mod avoidance;
pub mod collision;
pub mod config;
pub mod error;
pub mod follower;
pub mod rrt;
pub mod scenario;
pub mod tree;

pub use agent::Agent;
pub use avoidance::AvoidanceCoordinator;
pub use config::{AgentSpec, MotionConfig, ScenarioConfig};
pub use error::NavigationError;
pub use follower::{FollowStep, PathFollower};
pub use rrt::{PlanResult, PlanStatus, Planner};
pub use scenario::{Scenario, ScenarioState, SeededScenario};

pub use headon_geometry::{Point, Vector2};
