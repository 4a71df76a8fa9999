//! Goal-biased Rapidly-exploring Random Tree planner.
//!
//! Each iteration samples a target (the goal with probability `goal_bias`,
//! otherwise a uniform point of the workspace), finds the nearest tree node,
//! steers one step towards the target and keeps the new node unless it falls
//! within `collision_radius` of a hazard. The first node within
//! `goal_tolerance` of the goal ends the search and the path is read back
//! through the parent links.
//!
//! Hazards are snapshots taken when planning starts; a hazard that moves
//! afterwards is not tracked. There is no RRT* rewiring step, so returned
//! paths are feasible but not locally optimal.

#![warn(missing_docs)]

use core::fmt;

use headon_geometry::{Point, distance, steer};
use rand::Rng;
use tracing::{debug, info, trace, warn};

use crate::collision::is_unsafe_among;
use crate::config::MotionConfig;
use crate::error::NavigationError;
use crate::tree::Tree;

/// How a plan was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    /// The tree reached the goal; every node was checked against the hazards.
    Verified,
    /// The iteration budget ran out and the direct `[start, goal]` segment was
    /// returned unchecked. It may cross a hazard.
    Fallback,
}

/// Result of one planning call, with search metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    /// Waypoints from start to (near) goal.
    pub path: Vec<Point>,
    /// Whether the path was found or is the direct fallback.
    pub status: PlanStatus,
    /// Number of iterations consumed.
    pub iterations: usize,
    /// Number of nodes in the tree when planning stopped.
    pub tree_size: usize,
}

impl PlanResult {
    /// Returns true if the path was found by the search.
    pub fn is_verified(&self) -> bool {
        self.status == PlanStatus::Verified
    }

    /// Returns the waypoints.
    pub fn into_path(self) -> Vec<Point> {
        self.path
    }
}

impl fmt::Display for PlanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlanResult {{ status: {:?}, waypoints: {}, iterations: {}, tree_size: {} }}",
            self.status,
            self.path.len(),
            self.iterations,
            self.tree_size
        )
    }
}

/// Sampling-based planner bound to one configuration.
#[derive(Debug, Clone)]
pub struct Planner {
    config: MotionConfig,
}

impl Planner {
    /// Creates a planner.
    ///
    /// # Arguments
    /// * `config` - Motion configuration; validated here
    ///
    /// # Returns
    /// * `Result<Self, NavigationError>` - The planner or `InvalidConfig`
    pub fn new(config: MotionConfig) -> Result<Self, NavigationError> {
        config.validate()?;
        debug!(
            step_size = config.step_size,
            goal_bias = config.goal_bias,
            max_iterations = config.max_iterations,
            rewire_radius = config.rewire_radius,
            "Planner created (no rewiring)"
        );
        Ok(Planner { config })
    }

    /// The configuration this planner was built with.
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Plans from `start` to `goal`, keeping every node clear of `other`.
    ///
    /// `other` is the other agent's position at the moment of the call.
    pub fn plan_path<R: Rng>(
        &self,
        start: Point,
        goal: Point,
        other: Point,
        rng: &mut R,
    ) -> Result<PlanResult, NavigationError> {
        self.plan_path_among(start, goal, &[other], rng)
    }

    /// Plans from `start` to `goal`, keeping every node clear of all `hazards`.
    ///
    /// The root (`start`) is not checked. If `start` is already within
    /// `goal_tolerance` of `goal` the single-point path `[start]` is returned.
    /// When the iteration budget is exhausted the result is the fallback
    /// `[start, goal]` with `PlanStatus::Fallback`.
    ///
    /// # Arguments
    /// * `start` - Root of the tree
    /// * `goal` - Target point
    /// * `hazards` - Positions to keep `collision_radius` away from
    /// * `rng` - Sampling source; seed it for reproducible trees
    ///
    /// # Returns
    /// * `Result<PlanResult, NavigationError>` - The plan and its metadata
    pub fn plan_path_among<R: Rng>(
        &self,
        start: Point,
        goal: Point,
        hazards: &[Point],
        rng: &mut R,
    ) -> Result<PlanResult, NavigationError> {
        let cfg = &self.config;

        if distance(start, goal) < cfg.goal_tolerance {
            debug!(%start, %goal, "Start already within goal tolerance");
            return Ok(PlanResult {
                path: vec![start],
                status: PlanStatus::Verified,
                iterations: 0,
                tree_size: 1,
            });
        }

        let mut tree = Tree::with_root(start);

        for iteration in 0..cfg.max_iterations {
            let target = self.sample(goal, rng);
            let nearest_id = tree.nearest(target)?;
            let nearest = tree.point(nearest_id)?;
            let candidate = steer(nearest, target, cfg.step_size)?;

            if is_unsafe_among(candidate, hazards, cfg.collision_radius) {
                trace!(%candidate, "Rejected candidate inside collision margin");
                continue;
            }

            let id = tree.insert(candidate, nearest_id)?;

            if distance(candidate, goal) < cfg.goal_tolerance {
                let path = tree.path_to(id)?;
                info!(
                    %start,
                    %goal,
                    iterations = iteration + 1,
                    tree_size = tree.len(),
                    waypoints = path.len(),
                    "Path found"
                );
                return Ok(PlanResult {
                    path,
                    status: PlanStatus::Verified,
                    iterations: iteration + 1,
                    tree_size: tree.len(),
                });
            }
        }

        warn!(
            %start,
            %goal,
            iterations = cfg.max_iterations,
            tree_size = tree.len(),
            "Iteration budget exhausted; falling back to direct path"
        );
        Ok(PlanResult {
            path: vec![start, goal],
            status: PlanStatus::Fallback,
            iterations: cfg.max_iterations,
            tree_size: tree.len(),
        })
    }

    /// Draws the next target: the goal with probability `goal_bias`, otherwise
    /// a uniform point of the closed workspace rectangle.
    fn sample<R: Rng>(&self, goal: Point, rng: &mut R) -> Point {
        if rng.random::<f64>() < self.config.goal_bias {
            goal
        } else {
            Point::new(
                rng.random_range(0.0..=self.config.width),
                rng.random_range(0.0..=self.config.height),
            )
        }
    }
}
