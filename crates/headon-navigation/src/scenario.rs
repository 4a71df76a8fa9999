//! Two-agent scenario driver.
//!
//! Plans a path for each agent against the other's position, then, once
//! started, runs the per-tick loop: avoidance nudge first, then one follower
//! step for each agent. The run stops by itself when both waypoint queues are
//! empty.

#![warn(missing_docs)]

use core::fmt;

use headon_geometry::Point;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::agent::Agent;
use crate::avoidance::AvoidanceCoordinator;
use crate::config::{MotionConfig, ScenarioConfig};
use crate::error::NavigationError;
use crate::follower::PathFollower;
use crate::rrt::{PlanResult, Planner};

/// Lifecycle of a scenario run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioState {
    /// Paths are planned but nobody moves yet.
    Idle,
    /// Agents are following their paths.
    Moving,
    /// Both paths are exhausted. Terminal.
    Stopped,
}

impl fmt::Display for ScenarioState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioState::Idle => write!(f, "Idle"),
            ScenarioState::Moving => write!(f, "Moving"),
            ScenarioState::Stopped => write!(f, "Stopped"),
        }
    }
}

/// Owns both agents, the planner and the tick loop.
pub struct Scenario<R: Rng> {
    planner: Planner,
    follower: PathFollower,
    avoidance: AvoidanceCoordinator,
    red: Agent,
    blue: Agent,
    red_plan: PlanResult,
    blue_plan: PlanResult,
    obstacles: Vec<Point>,
    state: ScenarioState,
    ticks: u64,
    rng: R,
}

/// A scenario driven by the crate's default seedable sampling source.
pub type SeededScenario = Scenario<SmallRng>;

impl Scenario<SmallRng> {
    /// Builds a scenario with a `SmallRng` seeded from `scenario.seed`, or from
    /// a random seed (which is logged) when none is configured.
    pub fn seeded(motion: MotionConfig, scenario: &ScenarioConfig) -> Result<Self, NavigationError> {
        let seed = scenario.seed.unwrap_or_else(rand::random);
        info!(seed, "Seeding planner");
        Self::new(motion, scenario, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Scenario<R> {
    /// Creates the agents and plans both paths.
    ///
    /// Red is planned against blue's start position, then blue against red's.
    ///
    /// # Arguments
    /// * `motion` - Shared motion configuration
    /// * `scenario` - Agents' starts and goals plus static obstacles
    /// * `rng` - Sampling source for the planner
    ///
    /// # Returns
    /// * `Result<Self, NavigationError>` - An `Idle` scenario with both paths set
    pub fn new(
        motion: MotionConfig,
        scenario: &ScenarioConfig,
        mut rng: R,
    ) -> Result<Self, NavigationError> {
        let follower = PathFollower::new(&motion)?;
        let avoidance = AvoidanceCoordinator::new(&motion)?;
        let planner = Planner::new(motion)?;

        let mut red = Agent::new("red", scenario.red.start, scenario.red.goal);
        let mut blue = Agent::new("blue", scenario.blue.start, scenario.blue.goal);
        let obstacles = scenario.obstacles.clone();
        let (red_plan, blue_plan) =
            plan_pair(&planner, &mut red, &mut blue, &obstacles, &mut rng)?;

        Ok(Scenario {
            planner,
            follower,
            avoidance,
            red,
            blue,
            red_plan,
            blue_plan,
            obstacles,
            state: ScenarioState::Idle,
            ticks: 0,
            rng,
        })
    }

    /// Adds a static obstacle and re-plans both agents. Only allowed while `Idle`.
    pub fn add_obstacle(&mut self, obstacle: Point) -> Result<(), NavigationError> {
        if self.state != ScenarioState::Idle {
            return Err(NavigationError::InvalidTransition(
                "obstacles can only be added before the agents start moving",
            ));
        }
        if !obstacle.is_finite() {
            return Err(NavigationError::InvalidConfig("obstacle coordinates must be finite"));
        }
        info!(%obstacle, "Obstacle added, re-planning");
        self.obstacles.push(obstacle);
        let (red_plan, blue_plan) = plan_pair(
            &self.planner,
            &mut self.red,
            &mut self.blue,
            &self.obstacles,
            &mut self.rng,
        )?;
        self.red_plan = red_plan;
        self.blue_plan = blue_plan;
        Ok(())
    }

    /// The external "start moving" signal: `Idle` to `Moving`.
    pub fn start(&mut self) -> Result<(), NavigationError> {
        match self.state {
            ScenarioState::Idle => {
                self.state = ScenarioState::Moving;
                info!("Scenario moving");
                Ok(())
            }
            ScenarioState::Moving => Err(NavigationError::InvalidTransition("already moving")),
            ScenarioState::Stopped => Err(NavigationError::InvalidTransition(
                "a stopped scenario cannot be restarted",
            )),
        }
    }

    /// Runs one simulation tick. Does nothing unless `Moving`.
    ///
    /// # Returns
    /// * `ScenarioState` - The state after the tick
    pub fn tick(&mut self) -> ScenarioState {
        if self.state != ScenarioState::Moving {
            return self.state;
        }

        self.avoidance.check_and_apply(&mut self.red, &mut self.blue);
        self.follower.tick(&mut self.red);
        self.follower.tick(&mut self.blue);
        self.ticks += 1;

        debug!(tick = self.ticks, red = %self.red, blue = %self.blue, "Tick");

        if self.red.is_done() && self.blue.is_done() {
            self.state = ScenarioState::Stopped;
            info!(ticks = self.ticks, red = %self.red.position, blue = %self.blue.position, "Both agents finished");
        }
        self.state
    }

    /// Ticks until the scenario stops or `max_ticks` ticks have run.
    pub fn run(&mut self, max_ticks: u64) -> ScenarioState {
        for _ in 0..max_ticks {
            if self.tick() != ScenarioState::Moving {
                break;
            }
        }
        self.state
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ScenarioState {
        self.state
    }

    /// Number of ticks run while `Moving`.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The first agent.
    pub fn red(&self) -> &Agent {
        &self.red
    }

    /// The second agent.
    pub fn blue(&self) -> &Agent {
        &self.blue
    }

    /// Both agents, red first.
    pub fn agents(&self) -> [&Agent; 2] {
        [&self.red, &self.blue]
    }

    /// The most recent plan for the red agent.
    pub fn red_plan(&self) -> &PlanResult {
        &self.red_plan
    }

    /// The most recent plan for the blue agent.
    pub fn blue_plan(&self) -> &PlanResult {
        &self.blue_plan
    }

    /// Static obstacle centres.
    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }

    /// The shared motion configuration.
    pub fn config(&self) -> &MotionConfig {
        self.planner.config()
    }
}

/// Plans red against blue's current position, then blue against red's, each
/// also avoiding the static obstacles, and hands the paths to the agents.
fn plan_pair<R: Rng>(
    planner: &Planner,
    red: &mut Agent,
    blue: &mut Agent,
    obstacles: &[Point],
    rng: &mut R,
) -> Result<(PlanResult, PlanResult), NavigationError> {
    let mut hazards = Vec::with_capacity(obstacles.len() + 1);
    hazards.push(blue.position);
    hazards.extend_from_slice(obstacles);
    let red_plan = planner.plan_path_among(red.start(), red.goal(), &hazards, rng)?;
    red.set_path(red_plan.path.clone());

    hazards[0] = red.position;
    let blue_plan = planner.plan_path_among(blue.start(), blue.goal(), &hazards, rng)?;
    blue.set_path(blue_plan.path.clone());

    info!(red = %red_plan, blue = %blue_plan, "Scenario planned");
    Ok((red_plan, blue_plan))
}
